use gtk::prelude::*;
use gtk::{
    Application, ApplicationWindow, Box as GtkBox, CssProvider, Label, Orientation,
    STYLE_PROVIDER_PRIORITY_APPLICATION,
};
use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use pblite::{FontSpec, MainWindow, Translator};

use crate::controller::Controller;
use crate::style;

struct Inner {
    window: ApplicationWindow,
    status: Label,
    provider: CssProvider,
    controller: RefCell<Controller>,
    translator: Rc<RefCell<Translator>>,
    font: RefCell<FontSpec>,
    css: RefCell<String>,
}

/// The main publishing window.
///
/// Cloning yields another handle to the same GTK window.
#[derive(Clone)]
pub struct Window {
    inner: Rc<Inner>,
}

impl Window {
    pub fn new(
        app: &Application,
        controller: Controller,
        parent: Option<&Window>,
        translator: Rc<RefCell<Translator>>,
    ) -> Self {
        let window = ApplicationWindow::new(app);
        window.add_css_class(style::WINDOW_CLASS);
        if let Some(parent) = parent {
            window.set_transient_for(Some(&parent.inner.window));
        }

        let vbox = GtkBox::new(Orientation::Vertical, 0);
        let status = Label::new(None);
        status.add_css_class("status");
        status.set_vexpand(true);
        vbox.append(&status);
        window.set_child(Some(&vbox));

        let provider = CssProvider::new();
        let display = gtk::prelude::RootExt::display(&window);
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
        let user_provider = style::load_user_css_if_exists(&display);

        {
            let provider = provider.clone();
            window.connect_destroy(move |window| {
                let display = gtk::prelude::RootExt::display(window);
                gtk::style_context_remove_provider_for_display(&display, &provider);
                if let Some(user) = &user_provider {
                    gtk::style_context_remove_provider_for_display(&display, user);
                }
                debug!("Removed window stylesheets");
            });
        }

        Self {
            inner: Rc::new(Inner {
                window,
                status,
                provider,
                controller: RefCell::new(controller),
                translator,
                font: RefCell::new(FontSpec::default()),
                css: RefCell::new(String::new()),
            }),
        }
    }

    pub fn gtk_window(&self) -> &ApplicationWindow {
        &self.inner.window
    }

    pub fn status_text(&self) -> String {
        self.inner.status.text().to_string()
    }

    pub fn generation(&self) -> u32 {
        self.inner.controller.borrow().generation()
    }

    fn reload_css(&self) {
        let composed = style::compose(&self.inner.css.borrow(), &self.inner.font.borrow());
        self.inner.provider.load_from_data(&composed);
    }

    fn tr(&self, key: &str) -> String {
        self.inner.translator.borrow().translate(key).to_string()
    }
}

impl MainWindow for Window {
    fn on_destroyed(&self, callback: Box<dyn Fn()>) {
        self.inner.window.connect_destroy(move |_| callback());
    }

    fn show(&self) {
        self.inner.window.set_visible(true);
    }

    fn activate(&self) {
        self.inner.window.present();
    }

    fn resize(&self, width: i32, height: i32) {
        self.inner.window.set_default_size(width, height);
    }

    fn set_title(&self, title: &str) {
        self.inner.window.set_title(Some(self.tr(title).as_str()));
    }

    fn font(&self) -> FontSpec {
        self.inner.font.borrow().clone()
    }

    fn set_font(&self, font: &FontSpec) {
        *self.inner.font.borrow_mut() = font.clone();
        self.reload_css();
    }

    fn set_style_sheet(&self, css: &str) {
        *self.inner.css.borrow_mut() = style::file_uris(css);
        self.reload_css();
    }

    fn reset(&self) {
        self.inner.controller.borrow_mut().reset();
        self.inner.status.set_text(&self.tr("Ready"));
    }

    fn is_same(&self, other: &Self) -> bool {
        self.inner.window == other.inner.window
    }
}
