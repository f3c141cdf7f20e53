pub mod controller;
pub mod style;
pub mod toolkit;
pub mod window;

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use log::debug;
use pblite::{ApplicationHost, Assets, Launcher, Settings};

use crate::toolkit::GtkToolkit;

#[derive(Parser, Debug)]
#[command(name = "pblite")]
#[command(disable_version_flag = true)]
#[command(version)]
struct Args {
    #[arg(short = 'V', long = "version", action = ArgAction::SetTrue)]
    version: bool,

    /// Directory holding fonts, app.css and translation catalogs
    #[arg(long, value_name = "DIR")]
    assets: Option<PathBuf>,
}

/// Installed assets, falling back to the source tree for development builds.
fn locate_assets() -> pblite::Result<Assets> {
    Assets::locate().or_else(|err| {
        let dev = PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/res"));
        if dev.is_dir() {
            debug!("Using assets from source tree at {}", dev.display());
            Ok(Assets::new(dev))
        } else {
            Err(err)
        }
    })
}

pub fn run() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.version {
        println!("pblite {} ({})", env!("CARGO_PKG_VERSION"), env!("GIT_HASH"));
        return Ok(());
    }

    let assets = match args.assets {
        Some(dir) => Assets::new(dir),
        None => locate_assets()?,
    };

    let mut launcher = Launcher::new(
        ApplicationHost::new(GtkToolkit::new()),
        assets,
        Settings::load(),
    );

    launcher.show(None)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_assets_override() {
        let args = Args::try_parse_from(["pblite", "--assets", "/opt/pblite/res"]).unwrap();
        assert!(!args.version);
        assert_eq!(args.assets, Some(PathBuf::from("/opt/pblite/res")));
    }

    #[test]
    fn parses_short_version_flag() {
        let args = Args::try_parse_from(["pblite", "-V"]).unwrap();
        assert!(args.version);
        assert!(args.assets.is_none());
    }
}
