use crate::data::database::{Database, DbConnection};
use crate::data::models::admin_session::{AdminSession, NewAdminSession};
use crate::data::models::admin_user::AdminUser;
use diesel::prelude::*;
use diesel::result;
use diesel_async::pooled_connection::deadpool::Object;
use diesel_async::RunQueryDsl;

pub struct SessionRepo {}

impl SessionRepo {
    pub fn new() -> Self {
        SessionRepo {}
    }

    pub async fn add<'a>(&self, item: NewAdminSession<'a>) -> Result<(), result::Error> {
        use crate::data::models::schema::admin_sessions::dsl::admin_sessions;

        let db = Database::new().await;

        let mut conn: Object<DbConnection> = db.get_connection().await.map_err(|e| {
            result::Error::DatabaseError(
                result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        diesel::insert_into(admin_sessions)
            .values(&item)
            .execute(&mut conn)
            .await?;

        Ok(())
    }

    /// The admin gate: token must exist, be unexpired at `now`, and belong
    /// to an account that is still active.
    pub async fn find_valid(
        &self,
        token_query: &str,
        now: chrono::NaiveDateTime,
    ) -> Result<Option<(AdminSession, AdminUser)>, result::Error> {
        use crate::data::models::schema::admin_sessions::dsl::{
            admin_sessions, expires_at, token,
        };
        use crate::data::models::schema::admin_users::dsl::{admin_users, is_active};

        let db = Database::new().await;

        let mut conn: Object<DbConnection> = db.get_connection().await.map_err(|e| {
            result::Error::DatabaseError(
                result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        match admin_sessions
            .inner_join(admin_users)
            .filter(token.eq(token_query))
            .filter(expires_at.gt(now))
            .filter(is_active.eq(true))
            .select((AdminSession::as_select(), AdminUser::as_select()))
            .first::<(AdminSession, AdminUser)>(&mut conn)
            .await
        {
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn delete_by_token(&self, token_query: &str) -> Result<(), result::Error> {
        use crate::data::models::schema::admin_sessions::dsl::{admin_sessions, token};

        let db = Database::new().await;

        let mut conn: Object<DbConnection> = db.get_connection().await.map_err(|e| {
            result::Error::DatabaseError(
                result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        diesel::delete(admin_sessions.filter(token.eq(token_query)))
            .execute(&mut conn)
            .await?;

        Ok(())
    }

    /// Drops every session past its expiry. Ran opportunistically at login.
    pub async fn purge_expired(&self, now: chrono::NaiveDateTime) -> Result<usize, result::Error> {
        use crate::data::models::schema::admin_sessions::dsl::{admin_sessions, expires_at};

        let db = Database::new().await;

        let mut conn: Object<DbConnection> = db.get_connection().await.map_err(|e| {
            result::Error::DatabaseError(
                result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        let removed = diesel::delete(admin_sessions.filter(expires_at.le(now)))
            .execute(&mut conn)
            .await?;

        Ok(removed)
    }
}

impl Default for SessionRepo {
    fn default() -> Self {
        Self::new()
    }
}
