pub mod api;
pub mod data;
pub mod i18n;
pub mod security;
pub mod services;
pub mod storefront;
pub mod utils;
