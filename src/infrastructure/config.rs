use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 8056;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSettings,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ServerSettings {
    #[serde(default = "default_port")]
    pub port: u16,
    /// Listen on localhost only
    #[serde(default)]
    pub localhost: bool,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            localhost: false,
        }
    }
}

impl ServerSettings {
    pub fn listen_addr(&self) -> SocketAddr {
        let ip = if self.localhost {
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        } else {
            IpAddr::V4(Ipv4Addr::UNSPECIFIED)
        };
        SocketAddr::new(ip, self.port)
    }
}

/// Load `config/server.*` (optional) overridden by `CARVIEW__SERVER__*` env vars
pub fn load_server_config() -> anyhow::Result<ServerConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/server").required(false))
        .add_source(
            config::Environment::with_prefix("CARVIEW")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = ServerSettings::default();
        assert_eq!(settings.port, 8056);
        assert_eq!(settings.listen_addr().to_string(), "0.0.0.0:8056");
    }

    #[test]
    fn test_localhost_only() {
        let settings = ServerSettings {
            port: 9000,
            localhost: true,
        };
        assert_eq!(settings.listen_addr().to_string(), "127.0.0.1:9000");
    }

    #[test]
    fn test_deserialize_partial_file() {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(
                "[server]\nlocalhost = true\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();

        let parsed: ServerConfig = settings.try_deserialize().unwrap();
        assert_eq!(
            parsed.server,
            ServerSettings {
                port: DEFAULT_PORT,
                localhost: true,
            }
        );
    }

    #[test]
    fn test_deserialize_empty_source() {
        let settings = config::Config::builder().build().unwrap();
        let parsed: ServerConfig = settings.try_deserialize().unwrap();
        assert_eq!(parsed.server, ServerSettings::default());
    }
}
