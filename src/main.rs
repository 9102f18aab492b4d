//! CLI entry point.

use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() {
    // INFO level by default, respecting RUST_LOG
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    if let Err(e) = paysplit::cli::run() {
        error!("{e}");
        std::process::exit(1);
    }
}
