//! fidlgen CLI entry point

fn main() {
    // `RUST_LOG` overrides the default level. Logs share stderr with diagnostics; stdout carries
    // only generated code.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    fidlgen::cli::run();
}
