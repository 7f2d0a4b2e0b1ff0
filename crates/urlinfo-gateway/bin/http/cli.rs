use clap::{Parser, ValueEnum};
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use std::path::PathBuf;
use urlinfo_core::DbBackend;
use urlinfo_telemetry::LogFormat;

pub const DATAFILE_ENV: &str = "URLINFO_DATAFILE";
pub const LISTEN_ADDR_ENV: &str = "URLINFO_LISTEN_ADDR";
pub const DB_BACKEND_ENV: &str = "URLINFO_DB_BACKEND";
pub const LOG_FORMAT_ENV: &str = "URLINFO_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DbBackendArg {
    #[value(name = "string")]
    String,
    #[value(name = "fnv64")]
    Fnv64,
    #[value(name = "blake3")]
    Blake3,
}

impl Display for DbBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&DbBackend::from(*self), f)
    }
}

impl From<DbBackendArg> for DbBackend {
    fn from(value: DbBackendArg) -> Self {
        match value {
            DbBackendArg::String => DbBackend::String,
            DbBackendArg::Fnv64 => DbBackend::Fnv64,
            DbBackendArg::Blake3 => DbBackend::Blake3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    #[value(name = "text")]
    Text,
    #[value(name = "json")]
    Json,
}

impl Display for LogFormatArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&LogFormat::from(*self), f)
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Text => LogFormat::Text,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "urlinfo-gateway")]
pub struct CLI {
    /// File of canonical malware URLs, one per line.
    #[arg(long, env = DATAFILE_ENV)]
    pub datafile: PathBuf,

    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    #[arg(
        long,
        env = DB_BACKEND_ENV,
        value_enum,
        default_value_t = DbBackendArg::Fnv64
    )]
    pub backend: DbBackendArg,

    #[arg(
        long,
        env = LOG_FORMAT_ENV,
        value_enum,
        default_value_t = LogFormatArg::Text
    )]
    pub log_format: LogFormatArg,
}
