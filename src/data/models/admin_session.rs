use crate::data::models::admin_user::AdminUser;
use crate::data::models::schema::*;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Identifiable, Associations, PartialEq, Debug)]
#[diesel(table_name = admin_sessions)]
#[diesel(belongs_to(AdminUser, foreign_key = admin_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AdminSession {
    pub id: i64,
    pub admin_id: i64,
    pub token: String,
    pub expires_at: chrono::NaiveDateTime,
    pub created_at: chrono::NaiveDateTime,
}

#[derive(Insertable, PartialEq, Debug)]
#[diesel(table_name = admin_sessions)]
pub struct NewAdminSession<'a> {
    pub admin_id: i64,
    pub token: &'a str,
    pub expires_at: chrono::NaiveDateTime,
}
