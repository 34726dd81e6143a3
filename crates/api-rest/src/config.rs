//! REST server configuration, resolved once at startup.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_STATIC_DIR: &str = "static";
pub const DEFAULT_TEMPLATE_DIR: &str = "templates";

/// Filename of the intake form template inside the template directory.
pub const FORM_TEMPLATE: &str = "medical_form.html";

#[derive(Clone, Debug)]
pub struct ServerConfig {
    addr: SocketAddr,
    static_dir: PathBuf,
    template_dir: PathBuf,
}

impl ServerConfig {
    pub fn new(addr: SocketAddr, static_dir: PathBuf, template_dir: PathBuf) -> Self {
        Self {
            addr,
            static_dir,
            template_dir,
        }
    }

    /// Reads `INTAKE_REST_ADDR`, `INTAKE_STATIC_DIR` and `INTAKE_TEMPLATE_DIR`.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_values(
            std::env::var("INTAKE_REST_ADDR").ok(),
            std::env::var("INTAKE_STATIC_DIR").ok(),
            std::env::var("INTAKE_TEMPLATE_DIR").ok(),
        )
    }

    /// Builds a config from raw optional values. Absent or blank values take the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the address is not a valid socket address.
    pub fn from_values(
        addr: Option<String>,
        static_dir: Option<String>,
        template_dir: Option<String>,
    ) -> anyhow::Result<Self> {
        fn or_default(value: Option<String>, default: &str) -> String {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        }

        let raw_addr = or_default(addr, DEFAULT_REST_ADDR);
        let addr = raw_addr
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid INTAKE_REST_ADDR '{}': {}", raw_addr, e))?;

        Ok(Self::new(
            addr,
            PathBuf::from(or_default(static_dir, DEFAULT_STATIC_DIR)),
            PathBuf::from(or_default(template_dir, DEFAULT_TEMPLATE_DIR)),
        ))
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn static_dir(&self) -> &Path {
        &self.static_dir
    }

    pub fn template_dir(&self) -> &Path {
        &self.template_dir
    }
}
