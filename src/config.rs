#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub cookie_ttl_days: i64,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub session: SessionConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:daily_diet.db".into());
        let session = SessionConfig {
            cookie_ttl_days: std::env::var("SESSION_TTL_DAYS")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(7),
        };
        Self {
            database_url,
            session,
        }
    }
}
