//! Entities module - the dish and order resources

pub mod dish;
pub mod order;

pub use dish::Dish;
pub use order::{Order, OrderLineItem, OrderStatus};
