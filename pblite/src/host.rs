use std::ffi::OsString;

use log::info;

use crate::toolkit::Toolkit;
use crate::Result;

/// An application instance and whether this host created it.
#[derive(Debug, Clone)]
pub struct Acquired<A> {
    pub app: A,
    pub is_new: bool,
}

/// Obtains the process-wide application object.
///
/// When the host creates the instance it also owns the event loop:
/// [`scope`](ApplicationHost::scope) enters it after setup. A reused instance
/// belongs to someone else who already runs a loop.
pub struct ApplicationHost<T> {
    toolkit: T,
    args: Vec<String>,
}

/// Converts process arguments to strings, replacing invalid UTF-8.
pub fn lossy_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect()
}

impl<T: Toolkit> ApplicationHost<T> {
    /// Creates a host that constructs applications from the process arguments.
    pub fn new(toolkit: T) -> Self {
        Self::with_args(toolkit, lossy_args(std::env::args_os()))
    }

    pub fn with_args(toolkit: T, args: Vec<String>) -> Self {
        Self { toolkit, args }
    }

    pub fn toolkit(&self) -> &T {
        &self.toolkit
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn acquire(&self) -> Result<Acquired<T::App>> {
        if let Some(app) = self.toolkit.existing_application() {
            info!("Using existing application");
            return Ok(Acquired { app, is_new: false });
        }

        info!("Starting new application");
        let app = self.toolkit.create_application(&self.args)?;
        Ok(Acquired { app, is_new: true })
    }

    /// Runs `setup` against the application, then blocks in the event loop
    /// if the application was created by this call.
    ///
    /// A failing `setup` returns before the loop is entered. A loop that
    /// exits unsuccessfully is reported as an error.
    pub fn scope<R, F>(&self, setup: F) -> Result<R>
    where
        F: FnOnce(&T::App) -> Result<R>,
    {
        let Acquired { app, is_new } = self.acquire()?;
        let out = setup(&app)?;

        if is_new {
            self.toolkit.run(&app)?;
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lossy_args_keeps_valid_arguments() {
        let args = lossy_args(["pblite", "--assets", "/opt/res"].map(OsString::from));
        assert_eq!(args, vec!["pblite", "--assets", "/opt/res"]);
    }

    #[cfg(unix)]
    #[test]
    fn lossy_args_replaces_invalid_utf8() {
        use std::os::unix::ffi::OsStringExt;

        let args = lossy_args([
            OsString::from("--assets"),
            OsString::from_vec(b"/tmp/\xff".to_vec()),
        ]);
        assert_eq!(args, vec!["--assets", "/tmp/\u{fffd}"]);
    }
}
