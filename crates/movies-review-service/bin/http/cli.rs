use clap::{Parser, ValueEnum};
use movies_telemetry::LogFormat;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;

pub const LISTEN_ADDR_ENV: &str = "MOVIES_REVIEW_LISTEN_ADDR";
pub const STORAGE_BACKEND_ENV: &str = "MOVIES_REVIEW_STORAGE_BACKEND";
pub const MONGODB_URI_ENV: &str = "MOVIES_REVIEW_MONGODB_URI";
pub const MONGODB_DATABASE_ENV: &str = "MOVIES_REVIEW_MONGODB_DATABASE";
pub const LOG_FORMAT_ENV: &str = "MOVIES_REVIEW_LOG_FORMAT";
pub const OTLP_ENDPOINT_ENV: &str = "MOVIES_REVIEW_OTLP_ENDPOINT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8081";
pub const DEFAULT_MONGODB_DATABASE: &str = "movies";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackendArg {
    #[value(name = "in-memory")]
    InMemory,
    #[value(name = "mongodb")]
    Mongodb,
}

impl Display for StorageBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackendArg::InMemory => write!(f, "in-memory"),
            StorageBackendArg::Mongodb => write!(f, "mongodb"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "movies-review")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    #[arg(
        long,
        env = STORAGE_BACKEND_ENV,
        value_enum,
        default_value_t = StorageBackendArg::InMemory
    )]
    pub storage: StorageBackendArg,

    #[arg(long, env = MONGODB_URI_ENV, required_if_eq("storage", "mongodb"))]
    pub mongodb_uri: Option<String>,

    #[arg(long, env = MONGODB_DATABASE_ENV, default_value = DEFAULT_MONGODB_DATABASE)]
    pub mongodb_database: String,

    #[arg(long, env = LOG_FORMAT_ENV, value_enum, default_value_t = LogFormatArg::Pretty)]
    pub log_format: LogFormatArg,

    #[arg(long, env = OTLP_ENDPOINT_ENV)]
    pub otlp_endpoint: Option<String>,
}
