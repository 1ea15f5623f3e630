// handlers/public/mod.rs - endpoints that need no token

pub mod products;
pub mod system;

pub use products::{list as products_list, price_above as products_price_above, show as products_show};
pub use system::{ping, root};
