// SPDX-License-Identifier: MPL-2.0
use iced_layers::app::{self, Flags};
use iced_layers::ui::notifications::Position;

fn main() -> iced::Result {
    init_logging();

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        config_dir: optional_arg(&mut args, "--config-dir"),
        position: optional_arg::<String>(&mut args, "--position")
            .map(|value| Position::from_attr(&value)),
        max: optional_arg(&mut args, "--max"),
    };

    for extra in args.finish() {
        tracing::warn!(argument = ?extra, "ignoring unknown argument");
    }

    app::run(flags)
}

/// Reads an optional flag value, logging and ignoring malformed input.
fn optional_arg<T>(args: &mut pico_args::Arguments, key: &'static str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    args.opt_value_from_str(key).unwrap_or_else(|err| {
        tracing::warn!(flag = key, %err, "ignoring invalid flag value");
        None
    })
}

/// Logs go to stderr; `RUST_LOG` overrides the default level.
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("iced_layers=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
