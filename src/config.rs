use clap::Parser;
use std::path::PathBuf;

/// Name of the data file inside the storage directory
pub const TODO_FILE: &str = "todos.json";

/// Todo backend serving `/todos` from a JSON file
#[derive(Debug, Clone, Parser)]
#[command(name = "todo-backend", version)]
pub struct Config {
    /// Port to listen on
    #[arg(short = 'p', long = "port", env = "TODO_PORT", default_value_t = 80)]
    pub service_port: u16,

    /// Address to bind
    #[arg(long = "host", env = "TODO_HOST", default_value = "0.0.0.0")]
    pub service_host: String,

    /// Storage directory
    #[arg(short = 's', long = "storage", env = "TODO_STORAGE", default_value = "/storage")]
    pub storage_dir: PathBuf,
}

impl Config {
    /// Parse flags, falling back to environment variables
    pub fn from_args() -> Self {
        Config::parse()
    }

    /// Path of the todo file, `<storage>/todos.json`
    pub fn todos_path(&self) -> PathBuf {
        self.storage_dir.join(TODO_FILE)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Storage directory: {}", self.storage_dir.display());
        tracing::info!("  Todo file: {}", self.todos_path().display());
        tracing::info!("  Service listening on: {}", self.bind_addr());
    }
}
