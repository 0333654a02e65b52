//! Subscriber setup for applications embedding the solver.
//!
//! The library crates only emit `tracing` events; installing a subscriber is
//! left to the binary.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn filter(verbose: bool) -> EnvFilter {
    let default = if verbose {
        "hailstorm=debug,hailstorm_trajectory=debug,hailstorm_linalg=debug,info"
    } else {
        "hailstorm=info,hailstorm_trajectory=info,info"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Installs a compact formatter on stderr, filtered by `RUST_LOG` if set.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_logger(verbose: bool) -> bool {
    tracing_subscriber::registry()
        .with(filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
        .is_ok()
}
