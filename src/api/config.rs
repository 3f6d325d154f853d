use dotenvy::dotenv;
use once_cell::sync::Lazy;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub session_ttl_minutes: i64,
    pub admin_username: String,
    pub admin_password: String,
}

impl Config {
    pub fn new() -> Self {
        CONFIG.clone()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

static CONFIG: Lazy<Config> = Lazy::new(|| {
    dotenv().ok();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8787".to_string());
    let session_ttl_minutes = std::env::var("SESSION_TTL_MINUTES")
        .unwrap_or_else(|_| "120".to_string())
        .parse()
        .expect("SESSION_TTL_MINUTES must be a valid i64");
    let admin_username = std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string());
    let admin_password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".to_string());

    tracing::info!("Config loaded");

    Config {
        bind_addr,
        session_ttl_minutes,
        admin_username,
        admin_password,
    }
});
