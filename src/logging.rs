use tracing_subscriber::{EnvFilter, fmt::MakeWriter, prelude::*};

use crate::config::Config;

/// Install the stdout log sink. `RUST_LOG` takes precedence over the
/// default filter.
pub fn init(config: &Config) {
    init_with_writer(config, std::io::stdout);
}

/// Same as [`init`], writing to `make_writer` instead of stdout.
///
/// Statements arrive from sqlx under the `sqlx::query` target.
pub fn init_with_writer<W>(config: &Config, make_writer: W)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let default_filter = if config.sql_log { "info" } else { "info,sqlx=warn" };
    let filter_layer =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(make_writer);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
