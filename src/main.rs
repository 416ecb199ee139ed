// SPDX-License-Identifier: MPL-2.0
use iced_dashkit::app::{self, paths, Flags};
use iced_dashkit::logging::{self, LoggingConfig};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or_default(),
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or_default(),
        route: args.opt_value_from_str("--route").unwrap_or_default(),
        debug: args.contains("--debug"),
    };

    if let Err(err) = logging::init(LoggingConfig { debug: flags.debug }) {
        eprintln!("{err}");
    }

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}
