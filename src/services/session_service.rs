use crate::api::config::Config;
use crate::data::models::admin_session::NewAdminSession;
use crate::data::repos::implementors::admin_user_repo::AdminUserRepo;
use crate::data::repos::implementors::session_repo::SessionRepo;
use crate::security::auth::AuthService;
use crate::security::token::generate_session_token;
use crate::services::errors::SessionServiceError;

/// Who a valid session token belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionIdentity {
    pub admin_id: i64,
    pub username: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoginOutcome {
    pub token: String,
    pub username: String,
    pub role: String,
    pub expires_at: chrono::NaiveDateTime,
}

pub struct SessionService;

impl SessionService {
    pub fn new() -> Self {
        SessionService
    }

    /// Checks credentials against the active admin accounts, then opens a
    /// fresh session. Expired sessions are swept on the way in.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<LoginOutcome, SessionServiceError> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(SessionServiceError::MissingCredentials);
        }

        let now = chrono::Utc::now().naive_utc();

        let session_repo = SessionRepo::new();
        if let Ok(removed) = session_repo.purge_expired(now).await {
            if removed > 0 {
                tracing::debug!("purged {} expired admin sessions", removed);
            }
        }

        let user_repo = AdminUserRepo::new();
        let admin = user_repo
            .get_active_by_username(username.trim())
            .await
            .map_err(|_| SessionServiceError::DatabaseError)?
            .ok_or(SessionServiceError::InvalidCredentials)?;

        let auth = AuthService::new();
        let valid = auth
            .verify_password(password, &admin.password_hash)
            .await
            .map_err(|_| SessionServiceError::VerificationFailed)?;

        if !valid {
            return Err(SessionServiceError::InvalidCredentials);
        }

        let token = generate_session_token();
        let expires_at = now + chrono::Duration::minutes(Config::new().session_ttl_minutes);

        session_repo
            .add(NewAdminSession {
                admin_id: admin.id,
                token: &token,
                expires_at,
            })
            .await
            .map_err(|_| SessionServiceError::DatabaseError)?;

        user_repo
            .touch_last_login(admin.id, now)
            .await
            .map_err(|_| SessionServiceError::DatabaseError)?;

        Ok(LoginOutcome {
            token,
            username: admin.username,
            role: admin.role,
            expires_at,
        })
    }

    /// Resolves a bearer token to its admin, enforcing expiry and account
    /// state.
    pub async fn verify(&self, token: &str) -> Result<SessionIdentity, SessionServiceError> {
        let now = chrono::Utc::now().naive_utc();

        let repo = SessionRepo::new();
        let (session, admin) = repo
            .find_valid(token, now)
            .await
            .map_err(|_| SessionServiceError::DatabaseError)?
            .ok_or(SessionServiceError::InvalidToken)?;

        Ok(SessionIdentity {
            admin_id: session.admin_id,
            username: admin.username,
            role: admin.role,
        })
    }

    /// Logout is idempotent; an unknown token is simply gone already.
    pub async fn logout(&self, token: &str) -> Result<(), SessionServiceError> {
        let repo = SessionRepo::new();
        repo.delete_by_token(token)
            .await
            .map_err(|_| SessionServiceError::DatabaseError)
    }
}

impl Default for SessionService {
    fn default() -> Self {
        Self::new()
    }
}
