use crate::data::models::schema::*;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Identifiable, PartialEq, Debug)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub original_price: Option<f64>,
    pub image: String,
    pub images: Option<String>,
    pub description: String,
    pub material: String,
    pub stone: String,
    pub size: String,
    pub in_stock: bool,
    pub featured: bool,
}

#[derive(Insertable, PartialEq, Debug)]
#[diesel(table_name = products)]
pub struct NewProduct<'a> {
    pub name: &'a str,
    pub category: &'a str,
    pub price: f64,
    pub original_price: Option<f64>,
    pub image: &'a str,
    pub images: Option<&'a str>,
    pub description: &'a str,
    pub material: &'a str,
    pub stone: &'a str,
    pub size: &'a str,
    pub in_stock: bool,
    pub featured: bool,
}

/// Full-replace changeset; `None` clears the column.
#[derive(AsChangeset, PartialEq, Debug)]
#[diesel(table_name = products)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateProduct<'a> {
    pub name: &'a str,
    pub category: &'a str,
    pub price: f64,
    pub original_price: Option<f64>,
    pub image: &'a str,
    pub images: Option<&'a str>,
    pub description: &'a str,
    pub material: &'a str,
    pub stone: &'a str,
    pub size: &'a str,
    pub in_stock: bool,
    pub featured: bool,
}
