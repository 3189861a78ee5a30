//! Centralized configuration (environment variables + defaults).
//!
//! Two independent stores are configured: the Netsis database carrying the
//! invoice and order tables, and the SenkronERP database carrying the fiş
//! reference tables. Every setting has a deployment-shaped default so a dev
//! instance starts with nothing but `TEST_MODE=true` in the environment.

use std::env;
use std::time::Duration;

use sqlx::postgres::PgConnectOptions;

use crate::app::data_service::RunMode;

/// Top-level runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_port: u16,
    pub mode: RunMode,
    /// Netsis store: fatura master/detail tables.
    pub netsis: StoreConfig,
    /// SenkronERP store: fiş types, warehouses, fiş numbers, sipariş tables.
    pub senkron_fis: StoreConfig,
}

/// Connection parameters for one relational store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub label: &'static str,
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
    pub max_connections: u32,
    pub connect_timeout: Duration,
}

impl StoreConfig {
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.database)
            .username(&self.user)
            .password(&self.password)
    }

    /// `user@host:port/database` summary for startup logs (no credentials).
    pub fn summary(&self) -> String {
        format!("{}@{}:{}/{}", self.user, self.host, self.port, self.database)
    }
}

impl Config {
    /// Reads the full configuration from the environment (`.env` honoured).
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let mode = if env_flag("TEST_MODE") { RunMode::Static } else { RunMode::Live };

        Self {
            api_port: env_parse("API_PORT", 5000),
            mode,
            netsis: StoreConfig {
                label: "netsis",
                host: env_or("NETSIS_DB_HOST", "localhost"),
                port: env_parse("NETSIS_DB_PORT", 5432),
                database: env_or("NETSIS_DB_NAME", "cmkkablo2025"),
                user: env_or("NETSIS_DB_USER", "sa"),
                password: env_or("NETSIS_DB_PASSWORD", ""),
                max_connections: env_parse("NETSIS_DB_MAX_CONNECTIONS", 10),
                connect_timeout: Duration::from_secs(env_parse(
                    "NETSIS_DB_CONNECT_TIMEOUT_SECS",
                    30,
                )),
            },
            senkron_fis: StoreConfig {
                label: "senkron_fis",
                host: env_or("SENKRON_DB_HOST", "localhost"),
                port: env_parse("SENKRON_DB_PORT", 5432),
                database: env_or("SENKRON_DB_NAME", "senkronerp"),
                user: env_or("SENKRON_DB_USER", "muhendis"),
                password: env_or("SENKRON_DB_PASSWORD", ""),
                max_connections: env_parse("SENKRON_DB_MAX_CONNECTIONS", 10),
                connect_timeout: Duration::from_secs(env_parse(
                    "SENKRON_DB_CONNECT_TIMEOUT_SECS",
                    30,
                )),
            },
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_flag(key: &str) -> bool {
    env::var(key).map(|v| v.trim().eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key).ok().and_then(|v| v.parse::<T>().ok()).unwrap_or(default)
}
