use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Runtime settings. Defaults first, then `TODO_*` environment variables.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub loglevel: String,
    pub static_dir: PathBuf,
    pub max_connections: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:todos.db".to_string(),
            listen_addr: "0.0.0.0:8000".to_string(),
            loglevel: "info".to_string(),
            static_dir: PathBuf::from("static"),
            max_connections: 5,
        }
    }
}

impl Config {
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::prefixed("TODO_"))
    }

    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn defaults_apply_without_env() {
        Jail::expect_with(|_jail| {
            let cfg = Config::load()?;
            assert_eq!(cfg, Config::default());
            Ok(())
        });
    }

    #[test]
    fn env_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.set_env("TODO_DATABASE_URL", "sqlite::memory:");
            jail.set_env("TODO_LISTEN_ADDR", "127.0.0.1:9000");
            jail.set_env("TODO_MAX_CONNECTIONS", "1");

            let cfg = Config::load()?;
            assert_eq!(cfg.database_url, "sqlite::memory:");
            assert_eq!(cfg.listen_addr, "127.0.0.1:9000");
            assert_eq!(cfg.max_connections, 1);
            assert_eq!(cfg.loglevel, "info");
            Ok(())
        });
    }

    #[test]
    fn rejects_malformed_pool_size() {
        Jail::expect_with(|jail| {
            jail.set_env("TODO_MAX_CONNECTIONS", "lots");
            assert!(Config::load().is_err());
            Ok(())
        });
    }
}
