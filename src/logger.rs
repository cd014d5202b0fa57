use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Environment variables consulted for a filter directive, in order.
const FILTER_VARS: [&str; 2] = ["ABREPORT_LOG", "RUST_LOG"];

/// Installs the global subscriber. Logs go to stderr so stdout only carries
/// the generated report path.
pub fn init_logging(verbose: bool, no_color: bool) {
    let directive = FILTER_VARS
        .iter()
        .find_map(|name| std::env::var(name).ok());
    let filter = resolve_filter(directive.as_deref(), verbose);

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
}

fn resolve_filter(directive: Option<&str>, verbose: bool) -> EnvFilter {
    let fallback = if verbose { "debug" } else { "info" };
    match directive.map(EnvFilter::try_new) {
        Some(Ok(filter)) => filter,
        Some(Err(err)) => {
            eprintln!("Ignoring invalid log filter: {}", err);
            EnvFilter::new(fallback)
        }
        None => EnvFilter::new(fallback),
    }
}
