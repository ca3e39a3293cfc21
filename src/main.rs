// SPDX-License-Identifier: MPL-2.0
use notification_banner::app::{self, Flags};
use notification_banner::config::{self, BackgroundStyle};
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print_help();
        return Ok(());
    }

    let config_dir: Option<String> = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring --config-dir");
        None
    });
    config::paths::init_cli_override(config_dir);

    let background = match args.opt_value_from_str::<_, String>("--background") {
        Ok(Some(name)) => BackgroundStyle::from_name(&name).or_else(|| {
            tracing::warn!(%name, "unknown background style, using the configured one");
            None
        }),
        Ok(None) => None,
        Err(err) => {
            tracing::warn!(%err, "ignoring --background");
            None
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    app::run(Flags { background })
}

fn print_help() {
    let styles: Vec<&str> = BackgroundStyle::ALL.iter().map(|s| s.name()).collect();
    println!(
        "notification_banner

USAGE:
    notification_banner [OPTIONS]

OPTIONS:
    -h, --help                 Print this help message
    --config-dir <PATH>        Read settings.toml from PATH
    --background <STYLE>       Banner background: {}

ENVIRONMENT:
    NOTIFICATION_BANNER_CONFIG_DIR   Config directory (overridden by --config-dir)
    RUST_LOG                         Log filter, e.g. notification_banner=debug",
        styles.join(", ")
    );
}
