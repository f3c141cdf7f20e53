//! The seams between the launcher and a concrete UI toolkit.

use std::path::Path;

use crate::i18n::Translator;
use crate::settings::FontSpec;
use crate::Result;

/// The main application window as the launcher sees it.
///
/// Handles are cheap clones of one underlying window; two clones of the same
/// window are [`is_same`](MainWindow::is_same).
pub trait MainWindow: Clone {
    /// Registers a callback fired once when the toolkit destroys the window.
    fn on_destroyed(&self, callback: Box<dyn Fn()>);
    fn show(&self);
    /// Raises the window and gives it focus.
    fn activate(&self);
    fn resize(&self, width: i32, height: i32);
    fn set_title(&self, title: &str);
    fn font(&self) -> FontSpec;
    fn set_font(&self, font: &FontSpec);
    fn set_style_sheet(&self, css: &str);
    /// Refreshes displayed state from the window's controller.
    fn reset(&self);
    /// Identity comparison.
    fn is_same(&self, other: &Self) -> bool;
}

/// Process-level toolkit operations used to bootstrap the main window.
pub trait Toolkit {
    /// The process-wide application object.
    type App: Clone;
    type Window: MainWindow;
    /// Collaborator injected into new windows.
    type Controller: Default;

    /// Returns the application instance if one already exists in the process.
    fn existing_application(&self) -> Option<Self::App>;

    /// Creates the application instance from process arguments.
    fn create_application(&self, args: &[String]) -> Result<Self::App>;

    /// Enters the blocking event loop and returns when it exits.
    ///
    /// An unsuccessful exit is reported as `LaunchError::EventLoop`.
    fn run(&self, app: &Self::App) -> Result<()>;

    /// Registers a font file with the process font database.
    fn add_application_font(&self, path: &Path) -> std::result::Result<(), String>;

    fn install_translator(&self, app: &Self::App, translator: Translator);

    fn create_window(
        &self,
        app: &Self::App,
        controller: Self::Controller,
        parent: Option<&Self::Window>,
    ) -> Self::Window;
}
