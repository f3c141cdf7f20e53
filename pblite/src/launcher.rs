use crate::assets::Assets;
use crate::host::ApplicationHost;
use crate::resources::ResourceInstaller;
use crate::settings::Settings;
use crate::style::StyleComposer;
use crate::toolkit::Toolkit;
use crate::window::{self, WindowLifecycleManager};
use crate::Result;

/// Composition root that shows the main window.
///
/// Each launcher owns its window slot and font bookkeeping, so independent
/// launchers never see each other's windows.
pub struct Launcher<T: Toolkit> {
    host: ApplicationHost<T>,
    installer: ResourceInstaller,
    windows: WindowLifecycleManager<T::Window>,
    assets: Assets,
    settings: Settings,
}

impl<T> Launcher<T>
where
    T: Toolkit,
    T::Window: 'static,
{
    pub fn new(host: ApplicationHost<T>, assets: Assets, settings: Settings) -> Self {
        Self {
            host,
            installer: ResourceInstaller::new(),
            windows: WindowLifecycleManager::new(),
            assets,
            settings,
        }
    }

    pub fn host(&self) -> &ApplicationHost<T> {
        &self.host
    }

    pub fn installer(&self) -> &ResourceInstaller {
        &self.installer
    }

    pub fn windows(&self) -> &WindowLifecycleManager<T::Window> {
        &self.windows
    }

    pub fn assets(&self) -> &Assets {
        &self.assets
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Shows the main window, creating it if none is alive, and returns it.
    ///
    /// The stylesheet is loaded before anything else is touched, so a missing
    /// template leaves the application and window untouched. When this call
    /// creates the application it blocks in the event loop before returning.
    pub fn show(&mut self, parent: Option<&T::Window>) -> Result<T::Window> {
        let css = StyleComposer::load_style(&self.assets)?;

        let Self {
            host,
            installer,
            windows,
            assets,
            settings,
        } = self;

        host.scope(|app| {
            let toolkit = host.toolkit();

            installer.install_fonts(toolkit, assets);
            installer.install_translator(toolkit, app, assets);

            let controller = T::Controller::default();
            let window = windows.get_or_create(|| toolkit.create_window(app, controller, parent));

            window::present(&window, settings, &css);
            Ok(window)
        })
    }
}
