pub mod extract;

pub use extract::{parse_path_param, JsonBody};
