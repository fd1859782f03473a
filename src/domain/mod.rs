//! Domain types
pub mod cart;
pub mod product;

pub use cart::{Cart, CartItem};
pub use product::Product;
