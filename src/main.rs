// SPDX-License-Identifier: MPL-2.0
use hero_carousel::app::{self, paths, Flags};
use std::path::PathBuf;

fn main() -> iced::Result {
    env_logger::init();

    let mut args = pico_args::Arguments::from_env();

    let lang = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        log::warn!("ignoring --lang: {err}");
        None
    });
    let config_dir: Option<String> =
        args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
            log::warn!("ignoring --config-dir: {err}");
            None
        });
    let images: Vec<PathBuf> = args.finish().into_iter().map(PathBuf::from).collect();

    paths::init_cli_overrides(config_dir);

    app::run(Flags { lang, images })
}
