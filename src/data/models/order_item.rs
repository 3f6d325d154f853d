use crate::data::models::order::Order;
use crate::data::models::schema::*;
use diesel::prelude::*;

/// Snapshot of a product line at purchase time. Never updated afterwards.
#[derive(Queryable, Selectable, Identifiable, Associations, PartialEq, Debug)]
#[diesel(table_name = order_items)]
#[diesel(belongs_to(Order, foreign_key = order_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct OrderItem {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub product_name: String,
    pub price: f64,
    pub quantity: i64,
    pub subtotal: f64,
}

#[derive(Insertable, PartialEq, Debug)]
#[diesel(table_name = order_items)]
pub struct NewOrderItem<'a> {
    pub order_id: i64,
    pub product_id: i64,
    pub product_name: &'a str,
    pub price: f64,
    pub quantity: i64,
    pub subtotal: f64,
}
