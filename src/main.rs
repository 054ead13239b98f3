use anyhow::Result;
use frond::commands::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Structured logging only in debug mode; console output otherwise
    if std::env::var("FROND_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("frond=debug")))
            .init();
    }

    Cli::menu()
}
