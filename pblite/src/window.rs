//! Lifecycle of the single main window.
//!
//! [`WindowLifecycleManager`] holds at most one window. The first
//! [`get_or_create`](WindowLifecycleManager::get_or_create) constructs it and
//! registers a destruction callback; later calls hand back the same window
//! until the toolkit destroys it, after which the slot is empty again.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::debug;

use crate::settings::Settings;
use crate::toolkit::MainWindow;

struct Entry<W> {
    id: u64,
    window: W,
}

type Slot<W> = Rc<RefCell<Option<Entry<W>>>>;

pub struct WindowLifecycleManager<W> {
    slot: Slot<W>,
    next_id: Cell<u64>,
}

impl<W> Default for WindowLifecycleManager<W> {
    fn default() -> Self {
        Self {
            slot: Rc::new(RefCell::new(None)),
            next_id: Cell::new(0),
        }
    }
}

impl<W: MainWindow + 'static> WindowLifecycleManager<W> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The live window, if any.
    pub fn current(&self) -> Option<W> {
        self.slot.borrow().as_ref().map(|entry| entry.window.clone())
    }

    pub fn is_present(&self) -> bool {
        self.slot.borrow().is_some()
    }

    /// Returns the live window, or builds one with `create` when the slot is
    /// empty.
    ///
    /// The destruction callback is registered only on construction. It clears
    /// the slot only while the slot still holds the window it was registered
    /// for, so late or repeated notifications are ignored.
    pub fn get_or_create<F>(&self, create: F) -> W
    where
        F: FnOnce() -> W,
    {
        if let Some(window) = self.current() {
            debug!("Reusing main window");
            return window;
        }

        let window = create();
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let slot = Rc::downgrade(&self.slot);
        window.on_destroyed(Box::new(move || {
            let Some(slot) = slot.upgrade() else {
                return;
            };
            let mut slot = slot.borrow_mut();
            if slot.as_ref().is_some_and(|entry| entry.id == id) {
                debug!("Main window destroyed");
                *slot = None;
            }
        }));

        debug!("Created main window #{id}");
        *self.slot.borrow_mut() = Some(Entry {
            id,
            window: window.clone(),
        });
        window
    }
}

/// Applies the fixed presentation state to `window`.
///
/// Runs on every launch, whether the window is new or reused.
pub fn present<W: MainWindow>(window: &W, settings: &Settings, css: &str) {
    window.show();
    window.activate();

    let (width, height) = settings.window_size;
    window.resize(width, height);
    window.set_title(&settings.window_title);

    let mut font = window.font();
    font.family.clone_from(&settings.font.family);
    font.point_size = settings.font.point_size;
    font.weight = settings.font.weight;
    window.set_font(&font);

    window.set_style_sheet(css);
    window.reset();
}
