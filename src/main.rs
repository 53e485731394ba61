// SPDX-License-Identifier: MPL-2.0
use iced_toasts::app::{self, Flags};
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = pico_args::Arguments::from_env();
    let flags = Flags {
        lang: opt_value(&mut args, "--lang"),
        anchor: opt_value(&mut args, "--anchor"),
        duration_ms: opt_value(&mut args, "--duration"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unknown arguments");
    }

    app::run(flags)
}

fn opt_value<T>(args: &mut pico_args::Arguments, key: &'static str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    args.opt_value_from_str(key).unwrap_or_else(|err| {
        tracing::warn!(%err, "invalid value for {key}");
        None
    })
}
