/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | HTTP_PORT | 12345 | HTTP listen port |
/// | SURREAL_URL | mem:// | Store endpoint (`ws://`, `rocksdb://`, `mem://`) |
/// | SURREAL_NS | demo | Store namespace |
/// | SURREAL_DB | demo | Store database |
/// | SURREAL_USER | - | Root user, sign-in skipped when unset |
/// | SURREAL_PASS | - | Root password |
/// | COLLECTION | demo | Table holding every document |
/// | LOG_LEVEL | info | Default log filter (`RUST_LOG` wins) |
/// | LOG_JSON | false | JSON console logs |
/// | LOG_DIR | - | Daily rolling log files when set |
#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    pub surreal_url: String,
    pub surreal_ns: String,
    pub surreal_db: String,
    pub surreal_user: Option<String>,
    pub surreal_pass: Option<String>,
    /// Single collection shared by customers, products and receipts
    pub collection: String,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from the environment, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(12345),
            surreal_url: std::env::var("SURREAL_URL").unwrap_or_else(|_| "mem://".into()),
            surreal_ns: std::env::var("SURREAL_NS").unwrap_or_else(|_| "demo".into()),
            surreal_db: std::env::var("SURREAL_DB").unwrap_or_else(|_| "demo".into()),
            surreal_user: std::env::var("SURREAL_USER").ok(),
            surreal_pass: std::env::var("SURREAL_PASS").ok(),
            collection: std::env::var("COLLECTION").unwrap_or_else(|_| "demo".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }

    /// Override the store location
    ///
    /// Mostly used by tests to point at a private in-memory database.
    pub fn with_store(
        url: impl Into<String>,
        namespace: impl Into<String>,
        database: impl Into<String>,
    ) -> Self {
        let mut config = Self::from_env();
        config.surreal_url = url.into();
        config.surreal_ns = namespace.into();
        config.surreal_db = database.into();
        config.surreal_user = None;
        config.surreal_pass = None;
        config
    }
}
