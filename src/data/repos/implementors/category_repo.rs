use crate::data::database::{Database, DbConnection};
use crate::data::models::category::Category;
use diesel::prelude::*;
use diesel::result;
use diesel_async::pooled_connection::deadpool::Object;
use diesel_async::RunQueryDsl;

/// Categories are seeded reference data; only reads are exposed.
pub struct CategoryRepo {}

impl CategoryRepo {
    pub fn new() -> Self {
        CategoryRepo {}
    }

    pub async fn get_all(&self) -> Result<Option<Vec<Category>>, result::Error> {
        use crate::data::models::schema::categories::dsl::{categories, id};

        let db = Database::new().await;

        let mut conn: Object<DbConnection> = db.get_connection().await.map_err(|e| {
            result::Error::DatabaseError(
                result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        match categories
            .order(id.asc())
            .load::<Category>(&mut conn)
            .await
        {
            Ok(value) if value.is_empty() => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

impl Default for CategoryRepo {
    fn default() -> Self {
        Self::new()
    }
}
