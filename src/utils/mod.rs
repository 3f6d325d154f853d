pub mod gestures;
pub mod images;
pub mod mappers;
pub mod price;
pub mod validation;
pub mod viewport;
pub mod whatsapp;
