// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
iced_gallery - photo and video viewer demo

USAGE:
  iced_gallery [OPTIONS] [ITEMS]...

ITEMS:
  path/to/photo.jpg      decoded when the app starts
  lib:<identifier>       photo from the --library directory
  https://host/photo.png downloaded when displayed

OPTIONS:
  --lang <LOCALE>        interface language (en-US, fr)
  --library <DIR>        directory served as the photo library
  --video <PATH|URL>     video shown instead of a single photo
  --title <TEXT>         caption shown when the comment box is hidden
  --config-dir <DIR>     configuration directory override
  -h, --help             print this help

Set RUST_LOG (e.g. RUST_LOG=iced_gallery=debug) to control logging.
";

fn main() -> iced::Result {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(error) => {
            eprintln!("error: {error}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    tracing::debug!(?flags, "starting");
    app::run(flags)
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let lang = args.opt_value_from_str("--lang")?;
    let library = args.opt_value_from_str("--library")?;
    let video = args.opt_value_from_str("--video")?;
    let title = args.opt_value_from_str("--title")?;
    let config_dir: Option<String> = args.opt_value_from_str("--config-dir")?;
    paths::init_cli_override(config_dir);

    let items = args
        .finish()
        .into_iter()
        .filter_map(|arg| match arg.into_string() {
            Ok(item) => Some(item),
            Err(raw) => {
                tracing::warn!(item = ?raw, "ignoring non UTF-8 argument");
                None
            }
        })
        .collect();

    Ok(Flags {
        lang,
        library,
        video,
        title,
        items,
    })
}
