//! Resolution of bundled asset paths.
//!
//! Every packaged resource (fonts, the stylesheet template, translation
//! catalogs) lives under a single asset root. [`Assets`] carries that root
//! and joins relative asset names onto it.

use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::{LaunchError, Result};

const APP_DIR: &str = "pblite";
const RES_DIR: &str = "res";

/// The asset root and path helpers around it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assets {
    root: PathBuf,
}

impl Assets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Finds the installed asset root.
    ///
    /// Looks in, in order:
    /// - `<data dir>/pblite/res`
    /// - `<exe dir>/res`
    /// - `<exe dir>/../share/pblite/res`
    pub fn locate() -> Result<Self> {
        let mut candidates = Vec::new();

        if let Some(data) = dirs::data_dir() {
            candidates.push(data.join(APP_DIR).join(RES_DIR));
        }

        if let Some(exe_dir) = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
        {
            candidates.push(exe_dir.join(RES_DIR));
            candidates.push(exe_dir.join("..").join("share").join(APP_DIR).join(RES_DIR));
        }

        for candidate in &candidates {
            debug!("Looking for assets in {}", candidate.display());
            if candidate.is_dir() {
                return Ok(Self::new(candidate.clone()));
            }
        }

        Err(LaunchError::ResourceNotFound(
            candidates
                .into_iter()
                .next()
                .unwrap_or_else(|| PathBuf::from(RES_DIR)),
        ))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Joins `parts` onto the asset root.
    pub fn get<I, P>(&self, parts: I) -> PathBuf
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        parts
            .into_iter()
            .fold(self.root.clone(), |path, part| path.join(part))
    }

    /// The asset root as a forward-slash path ending in `/`, suitable for
    /// prefixing relative URLs in a stylesheet.
    ///
    /// Non-UTF-8 bytes in the root are replaced and reported.
    pub fn root_url(&self) -> String {
        if self.root.to_str().is_none() {
            warn!(
                "Asset root {} is not valid UTF-8; stylesheet URLs will not resolve",
                self.root.display()
            );
        }

        let mut url = self.root.to_string_lossy().replace('\\', "/");
        if !url.ends_with('/') {
            url.push('/');
        }
        url
    }
}
