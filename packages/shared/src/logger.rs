//! Logger setup shared by the Hanashi binaries.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// The default level applies to the given binary target only; everything else
/// stays at `info`. `RUST_LOG` overrides both when set.
pub fn setup_logger(bin_name: &str, default_level: &str) {
    let target = bin_name.replace('-', "_");
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("info,{target}={default_level}")));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::debug!("Logger initialized for '{}'", bin_name);
}
