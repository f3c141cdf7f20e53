use std::fs;

use log::debug;

use crate::assets::Assets;
use crate::{LaunchError, Result};

/// Stylesheet template name under the asset root.
pub const STYLESHEET: &str = "app.css";

const URL_MARKER: &str = "url(\"";

/// Loads the application stylesheet with its asset URLs made absolute.
pub struct StyleComposer;

impl StyleComposer {
    /// Reads `<asset root>/app.css` and rewrites its relative URLs.
    ///
    /// Read fresh on every call.
    ///
    /// # Errors
    ///
    /// `ResourceNotFound` when the template is missing.
    pub fn load_style(assets: &Assets) -> Result<String> {
        let path = assets.get([STYLESHEET]);
        let css = fs::read_to_string(&path).map_err(|e| LaunchError::from_io(&path, e))?;
        debug!("Loaded stylesheet from {}", path.display());
        Ok(rewrite_relative_urls(&css, &assets.root_url()))
    }
}

/// Prefixes the target of every `url("` in `css` with `root`.
///
/// `root` is expected to end in `/`.
pub fn rewrite_relative_urls(css: &str, root: &str) -> String {
    css.replace(URL_MARKER, &format!("{URL_MARKER}{root}"))
}
