use std::collections::HashSet;
use std::path::PathBuf;

use log::{debug, info, warn};

use crate::assets::Assets;
use crate::i18n::{self, Translator};
use crate::toolkit::Toolkit;

/// Font files registered on every launch, relative to `<asset root>/font`.
pub const FONTS: [&str; 3] = [
    "opensans/OpenSans-Regular.ttf",
    "opensans/OpenSans-Semibold.ttf",
    "fontawesome/fontawesome-webfont.ttf",
];

/// Directory under the asset root holding translation catalogs.
pub const I18N_DIR: &str = "i18n";

/// Installs bundled fonts and the locale translator.
///
/// Remembers which font files were registered successfully so repeated
/// launches within one process skip them. A font that failed is retried on
/// the next call.
#[derive(Debug, Default)]
pub struct ResourceInstaller {
    installed: HashSet<PathBuf>,
}

impl ResourceInstaller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_installed(&self, path: &std::path::Path) -> bool {
        self.installed.contains(path)
    }

    /// Registers every entry of [`FONTS`]. Returns how many were newly
    /// installed by this call.
    pub fn install_fonts<T: Toolkit>(&mut self, toolkit: &T, assets: &Assets) -> usize {
        let mut count = 0;

        for font in FONTS {
            let path = assets.get(["font", font]);

            if self.installed.contains(&path) {
                debug!("Font {font} already installed");
                continue;
            }

            match toolkit.add_application_font(&path) {
                Ok(()) => {
                    info!("Installed {font}");
                    self.installed.insert(path);
                    count += 1;
                }
                Err(e) => warn!("Could not install {}: {e}", path.display()),
            }
        }

        count
    }

    /// Loads the catalog for the system locale and registers it on `app`.
    pub fn install_translator<T: Toolkit>(&self, toolkit: &T, app: &T::App, assets: &Assets) {
        self.install_translator_for(toolkit, app, assets, &i18n::system_locale());
    }

    /// Like [`install_translator`](Self::install_translator) with an
    /// explicit locale.
    ///
    /// A missing catalog installs an empty translator, so text stays
    /// untranslated.
    pub fn install_translator_for<T: Toolkit>(
        &self,
        toolkit: &T,
        app: &T::App,
        assets: &Assets,
        locale: &str,
    ) {
        let dir = assets.get([I18N_DIR]);
        let translator = match Translator::load(&dir, locale) {
            Some(translator) => {
                info!("Installed translator for {locale}");
                translator
            }
            None => {
                debug!("No translation for {locale} in {}", dir.display());
                Translator::empty()
            }
        };
        toolkit.install_translator(app, translator);
    }
}
