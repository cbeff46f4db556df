use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub site_path: PathBuf,
    /// Absolute base URL that canonical links and Open Graph URLs resolve against.
    pub site_url: String,
    /// When set, unrecognized page-kind tags are rejected instead of degrading
    /// to the general profile.
    pub strict_page_kinds: bool,
    pub google_verification: Option<String>,
    pub yandex_verification: Option<String>,
}

impl AppConfig {
    /// Site URL without a trailing slash, ready for joining with page paths.
    #[must_use]
    pub fn site_base(&self) -> &str {
        self.site_url.trim_end_matches('/')
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("site_path", &self.site_path)
            .field("site_url", &self.site_url)
            .field("strict_page_kinds", &self.strict_page_kinds)
            .field(
                "google_verification",
                &self.google_verification.as_ref().map(|_| "[redacted]"),
            )
            .field(
                "yandex_verification",
                &self.yandex_verification.as_ref().map(|_| "[redacted]"),
            )
            .finish()
    }
}
