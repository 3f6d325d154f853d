pub mod admin_user_repo;
pub mod category_repo;
pub mod order_repo;
pub mod product_repo;
pub mod session_repo;
