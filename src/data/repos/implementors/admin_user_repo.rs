use crate::data::database::{Database, DbConnection};
use crate::data::models::admin_user::{AdminUser, NewAdminUser};
use diesel::prelude::*;
use diesel::result;
use diesel_async::pooled_connection::deadpool::Object;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

pub struct AdminUserRepo {}

impl AdminUserRepo {
    pub fn new() -> Self {
        AdminUserRepo {}
    }

    /// Login lookup. Deactivated accounts are invisible here.
    pub async fn get_active_by_username(
        &self,
        username_query: &str,
    ) -> Result<Option<AdminUser>, result::Error> {
        use crate::data::models::schema::admin_users::dsl::{admin_users, is_active, username};

        let db = Database::new().await;

        let mut conn: Object<DbConnection> = db.get_connection().await.map_err(|e| {
            result::Error::DatabaseError(
                result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        match admin_users
            .filter(username.eq(username_query))
            .filter(is_active.eq(true))
            .first::<AdminUser>(&mut conn)
            .await
        {
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn add<'a>(&self, item: NewAdminUser<'a>) -> Result<i64, result::Error> {
        use crate::data::models::schema::admin_users::dsl::admin_users;

        let db = Database::new().await;

        let mut conn: Object<DbConnection> = db.get_connection().await.map_err(|e| {
            result::Error::DatabaseError(
                result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        conn.transaction::<_, result::Error, _>(|connection| {
            async move {
                diesel::insert_into(admin_users)
                    .values(&item)
                    .execute(connection)
                    .await?;

                let new_id: i64 = diesel::select(diesel::dsl::sql::<diesel::sql_types::BigInt>(
                    "last_insert_rowid()",
                ))
                .get_result(connection)
                .await?;

                Ok(new_id)
            }
            .scope_boxed()
        })
        .await
    }

    pub async fn count_all(&self) -> Result<i64, result::Error> {
        use crate::data::models::schema::admin_users::dsl::admin_users;

        let db = Database::new().await;

        let mut conn: Object<DbConnection> = db.get_connection().await.map_err(|e| {
            result::Error::DatabaseError(
                result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        admin_users.count().get_result(&mut conn).await
    }

    pub async fn touch_last_login(
        &self,
        admin_id: i64,
        when: chrono::NaiveDateTime,
    ) -> Result<(), result::Error> {
        use crate::data::models::schema::admin_users::dsl::{admin_users, id, last_login};

        let db = Database::new().await;

        let mut conn: Object<DbConnection> = db.get_connection().await.map_err(|e| {
            result::Error::DatabaseError(
                result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        diesel::update(admin_users.filter(id.eq(admin_id)))
            .set(last_login.eq(when))
            .execute(&mut conn)
            .await?;

        Ok(())
    }
}

impl Default for AdminUserRepo {
    fn default() -> Self {
        Self::new()
    }
}
