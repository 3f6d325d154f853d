pub mod admin_session;
pub mod admin_user;
pub mod category;
pub mod order;
pub mod order_item;
pub mod product;
pub mod schema;
