pub mod cart;
pub mod showcase;
