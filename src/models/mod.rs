pub mod product;

pub use product::{Product, ProductAttributes, ProductId};
