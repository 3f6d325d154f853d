use joya_server_lib::api::config::Config;
use joya_server_lib::api::server;
use joya_server_lib::data::database::Database;
use joya_server_lib::data::models::admin_user::NewAdminUser;
use joya_server_lib::data::repos::implementors::admin_user_repo::AdminUserRepo;
use joya_server_lib::security::auth::AuthService;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let db = Database::new().await;
    db.run_migrations()
        .await
        .expect("Failed to apply the database schema");

    seed_admin().await;

    server::start().await;
}

/// Create the initial admin account when the table is empty, so a fresh
/// deployment can log in with the configured credentials.
async fn seed_admin() {
    let repo = AdminUserRepo::new();

    let existing = repo
        .count_all()
        .await
        .expect("Failed to inspect admin accounts");
    if existing > 0 {
        return;
    }

    let config = Config::new();
    let password_hash = AuthService::new()
        .hash_password(&config.admin_password)
        .await
        .expect("Failed to hash the admin password");

    repo.add(NewAdminUser {
        username: &config.admin_username,
        password_hash: &password_hash,
        role: "admin",
        is_active: true,
    })
    .await
    .expect("Failed to seed the admin account");

    tracing::info!("Seeded initial admin account '{}'", config.admin_username);
}
