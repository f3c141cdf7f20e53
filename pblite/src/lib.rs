//! Launcher core for the pblite publishing checker.
//!
//! This crate bootstraps the main window of a desktop front end without
//! depending on a particular UI toolkit:
//!
//! - Obtaining or creating the process-wide application object
//! - Installing bundled fonts and a locale translation catalog
//! - Composing the stylesheet with absolute asset URLs
//! - Keeping exactly one main window alive and reusing it across launches
//!
//! A toolkit plugs in by implementing [`Toolkit`] and [`MainWindow`].
//!
//! # Example
//!
//! ```no_run
//! use pblite::{ApplicationHost, Assets, Launcher, Settings, Toolkit};
//!
//! fn launch<T: Toolkit>(toolkit: T) -> pblite::Result<()>
//! where
//!     T::Window: 'static,
//! {
//!     let assets = Assets::locate()?;
//!     let mut launcher = Launcher::new(ApplicationHost::new(toolkit), assets, Settings::load());
//!
//!     // Blocks in the event loop if this created the application.
//!     launcher.show(None)?;
//!     Ok(())
//! }
//! ```
//!
//! # Error Handling
//!
//! Operations that can abort a launch return `Result<T, LaunchError>`.
//! Fonts that fail to register and missing translations are logged and
//! tolerated; a missing stylesheet is not.
//!
//! # Logging
//!
//! This crate uses the [`log`](https://docs.rs/log) facade. To see log
//! output, install a logger such as `env_logger`:
//!
//! ```no_run,ignore
//! env_logger::init();
//! // ...
//! ```

mod error;

pub mod assets;
pub mod host;
pub mod i18n;
pub mod launcher;
pub mod resources;
pub mod settings;
pub mod style;
pub mod toolkit;
pub mod window;

pub use assets::Assets;
pub use error::{LaunchError, Result};
pub use host::{Acquired, ApplicationHost};
pub use i18n::Translator;
pub use launcher::Launcher;
pub use resources::{ResourceInstaller, FONTS};
pub use settings::{FontSpec, Settings};
pub use style::{rewrite_relative_urls, StyleComposer};
pub use toolkit::{MainWindow, Toolkit};
pub use window::WindowLifecycleManager;
