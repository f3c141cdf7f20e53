use gtk::gio;
use gtk::prelude::*;
use gtk::Application;
use pango::prelude::*;
use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use log::debug;
use pblite::{LaunchError, Toolkit, Translator};

use crate::controller::Controller;
use crate::window::Window;

pub const APP_ID: &str = "org.pblite.ui";

/// [`Toolkit`] implementation over GTK4.
///
/// The installed translator is shared with every window this toolkit builds.
#[derive(Clone, Default)]
pub struct GtkToolkit {
    translator: Rc<RefCell<Translator>>,
}

impl GtkToolkit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn translator(&self) -> Rc<RefCell<Translator>> {
        self.translator.clone()
    }
}

impl Toolkit for GtkToolkit {
    type App = Application;
    type Window = Window;
    type Controller = Controller;

    fn existing_application(&self) -> Option<Application> {
        gio::Application::default().and_then(|app| app.downcast::<Application>().ok())
    }

    fn create_application(&self, args: &[String]) -> pblite::Result<Application> {
        debug!("Creating application from {args:?}");
        gtk::init().map_err(|e| LaunchError::Application(e.to_string()))?;

        let app = Application::builder().application_id(APP_ID).build();

        app.connect_activate(|app| {
            if let Some(window) = app.active_window() {
                window.present();
            }
        });

        app.register(gio::Cancellable::NONE)
            .map_err(|e| LaunchError::Application(e.to_string()))?;

        Ok(app)
    }

    fn run(&self, app: &Application) -> pblite::Result<()> {
        // Process arguments belong to our own CLI, not to GApplication.
        let code: glib::ExitCode = app.run_with_args::<&str>(&[]);
        debug!("Event loop exited with {code:?}");

        if code == glib::ExitCode::SUCCESS {
            Ok(())
        } else {
            Err(LaunchError::EventLoop(format!("{code:?}")))
        }
    }

    fn add_application_font(&self, path: &Path) -> Result<(), String> {
        let font_map = pangocairo::FontMap::default();
        font_map.add_font_file(path).map_err(|e| e.to_string())
    }

    fn install_translator(&self, _app: &Application, translator: Translator) {
        debug!("Using translator for {:?}", translator.locale());
        *self.translator.borrow_mut() = translator;
    }

    fn create_window(
        &self,
        app: &Application,
        controller: Controller,
        parent: Option<&Window>,
    ) -> Window {
        Window::new(app, controller, parent, self.translator.clone())
    }
}
