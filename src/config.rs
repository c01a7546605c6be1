use std::path::PathBuf;

use clap::Parser;

/// Command-line configuration.
///
/// The two positional arguments mirror the invocation
/// `staticd <port> <root>`; the bind host is a flag because it is almost
/// always the default.
#[derive(Debug, Clone, Parser)]
#[command(name = "staticd")]
#[command(about = "Event-driven static file server")]
pub struct Config {
    /// Port to listen on
    pub port: u16,

    /// Directory to serve files from
    pub root: PathBuf,

    /// Host/IP to bind
    #[arg(long, default_value = "0.0.0.0", env = "STATICD_HOST")]
    pub host: String,
}

impl Config {
    /// Parses the configuration from the process arguments, exiting with a
    /// usage message when they are missing or malformed.
    pub fn load() -> Self {
        Config::parse()
    }

    /// The full bind address (host:port).
    ///
    /// # Example
    ///
    /// ```
    /// # use clap::Parser;
    /// # use staticd::config::Config;
    /// let config = Config::parse_from(["staticd", "8080", "/srv/www"]);
    /// assert_eq!(config.address(), "0.0.0.0:8080");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
