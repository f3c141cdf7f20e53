use std::cell::Cell;
use std::rc::Rc;

use pblite::window::present;
use pblite::{MainWindow, Settings, Toolkit};
use pblite_gui::controller::Controller;
use pblite_gui::toolkit::GtkToolkit;

fn has_display() -> bool {
    std::env::var_os("DISPLAY").is_some() || std::env::var_os("WAYLAND_DISPLAY").is_some()
}

#[test]
fn window_presents_and_reports_destruction() {
    // Skip when no display (e.g. in CI)
    if std::env::var("CI").is_ok() || !has_display() {
        return;
    }

    let toolkit = GtkToolkit::new();
    let app = toolkit.create_application(&[]).unwrap();
    assert!(toolkit.existing_application().is_some());

    let window = toolkit.create_window(&app, Controller::default(), None);
    present(&window, &Settings::default(), "label.status { padding: 4px; }");

    assert_eq!(window.gtk_window().title().as_deref(), Some("Pyblish"));
    assert_eq!(window.gtk_window().default_size(), (430, 600));
    assert_eq!(window.status_text(), "Ready");
    assert_eq!(window.generation(), 1);
    assert!(window.is_same(&window.clone()));

    let destroyed = Rc::new(Cell::new(0));
    {
        let destroyed = destroyed.clone();
        window.on_destroyed(Box::new(move || destroyed.set(destroyed.get() + 1)));
    }

    gtk::prelude::GtkWindowExt::destroy(window.gtk_window());
    assert_eq!(destroyed.get(), 1);
}
