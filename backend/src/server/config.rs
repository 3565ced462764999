//! HTTP server configuration objects and helpers.

use std::net::SocketAddr;

use notes_backend::inbound::http::session_config::SessionSettings;
use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

fn default_host() -> String {
    DEFAULT_HOST.to_owned()
}

/// Listener settings loaded via OrthoConfig from flags, `NOTES_*` variables
/// and configuration files.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "NOTES")]
pub struct ServerSettings {
    /// Interface to bind.
    #[ortho_config(default = default_host())]
    pub host: String,
    /// TCP port to bind.
    #[ortho_config(default = DEFAULT_PORT)]
    pub port: u16,
}

impl ServerSettings {
    /// Configured host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Configured port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Resolve host and port into a socket address.
    ///
    /// # Errors
    /// Returns [`std::io::Error`] when the host is not a literal address.
    pub fn bind_addr(&self) -> std::io::Result<SocketAddr> {
        let raw = format!("{}:{}", self.host(), self.port());
        raw.parse().map_err(|err| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid bind address {raw}: {err}"),
            )
        })
    }
}

/// Everything [`super::create_server`] needs to start listening.
pub struct ServerConfig {
    pub(crate) session: SessionSettings,
    pub(crate) bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Construct a server configuration from validated settings.
    #[must_use]
    pub fn new(session: SessionSettings, bind_addr: SocketAddr) -> Self {
        Self { session, bind_addr }
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for listener settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("notes-backend")])
            .expect("config should load")
    }

    #[rstest]
    fn defaults_bind_all_interfaces_on_3000() {
        let _guard = lock_env([
            ("NOTES_HOST", None::<String>),
            ("NOTES_PORT", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.host(), DEFAULT_HOST);
        assert_eq!(settings.port(), DEFAULT_PORT);
        assert_eq!(
            settings.bind_addr().expect("default address parses"),
            "0.0.0.0:3000".parse::<SocketAddr>().expect("literal address")
        );
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("NOTES_HOST", Some("127.0.0.1")),
            ("NOTES_PORT", Some("8081")),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.host(), "127.0.0.1");
        assert_eq!(settings.port(), 8081);
    }

    #[rstest]
    fn hostnames_are_rejected_as_bind_addresses() {
        let settings = ServerSettings {
            host: "localhost".into(),
            port: DEFAULT_PORT,
        };

        let err = settings.bind_addr().expect_err("hostname is not a socket address");
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
    }
}
