use crate::auth::jwt::JwtConfig;

/// Default base for issued certificate URLs.
const DEFAULT_CERTIFICATE_BASE_URL: &str = "http://localhost:3000/certificates";

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
    /// Prefix for certificate URLs; the course and user ids are appended.
    pub certificate_base_url: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                              |
    /// |------------------------|--------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                            |
    /// | `PORT`                 | `3000`                               |
    /// | `CORS_ORIGINS`         | `http://localhost:4200`              |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                 |
    /// | `CERTIFICATE_BASE_URL` | `http://localhost:3000/certificates` |
    ///
    /// # Panics
    ///
    /// Panics on unparseable numbers or a missing `JWT_SECRET`.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:4200".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let certificate_base_url = std::env::var("CERTIFICATE_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_CERTIFICATE_BASE_URL.into())
            .trim_end_matches('/')
            .to_string();

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt,
            certificate_base_url,
        }
    }

    /// URL of the certificate for `user_id` completing `course_id`.
    pub fn certificate_url(&self, course_id: i64, user_id: i64) -> String {
        format!("{}/{course_id}/{user_id}", self.certificate_base_url)
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
