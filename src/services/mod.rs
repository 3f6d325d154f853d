pub mod category_service;
pub mod errors;
pub mod order_service;
pub mod product_service;
pub mod session_service;
pub mod stats_service;
