//! Configuration types for the pokedex host service

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use leptos::config::LeptosOptions;
use pokedex_app::ShellMeta;
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub shell: ShellMeta,
}

/// Listening socket configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }
}

/// Location of the compiled client bundle and static assets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_output_name")]
    pub output_name: String,
    #[serde(default = "default_site_root")]
    pub site_root: PathBuf,
    #[serde(default = "default_site_pkg_dir")]
    pub site_pkg_dir: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            output_name: default_output_name(),
            site_root: default_site_root(),
            site_pkg_dir: default_site_pkg_dir(),
        }
    }
}

impl Config {
    /// Leptos options used when rendering the document shell
    pub fn leptos_options(&self) -> LeptosOptions {
        LeptosOptions::builder()
            .output_name(self.site.output_name.as_str())
            .site_root(self.site.site_root.to_string_lossy().into_owned())
            .site_pkg_dir(self.site.site_pkg_dir.as_str())
            .build()
    }
}

fn default_bind_address() -> IpAddr {
    IpAddr::V4(Ipv4Addr::LOCALHOST)
}

fn default_port() -> u16 {
    3000
}

fn default_output_name() -> String {
    "pokedex".to_string()
}

fn default_site_root() -> PathBuf {
    PathBuf::from("target/site")
}

fn default_site_pkg_dir() -> String {
    "pkg".to_string()
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> crate::Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::PokedexError::Config(format!("Failed to read config file {:?}: {}", path, e))
    })?;
    let config: Config = serde_json::from_str(&content)?;
    Ok(config)
}
