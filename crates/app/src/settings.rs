//! Handles settings for the application.
//!
//! Configuration comes from an optional `settings.toml` next to the binary,
//! overridden by `SPESA`-prefixed environment variables (for example
//! `SPESA_SERVER__PORT=8080`). Every key has a default, so the process
//! starts with no configuration at all.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct App {
    pub level: String,
}

#[derive(Debug, Deserialize)]
pub struct Server {
    pub bind: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub app: App,
    pub server: Server,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("app.level", "info")?
            .set_default("server.bind", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .add_source(File::with_name("settings").required(false))
            .add_source(Environment::with_prefix("SPESA").separator("__"))
            .build()?;

        settings.try_deserialize()
    }
}
