//! Browser abstraction for opening post URLs.
//!
//! This module provides an abstraction for handing URLs to the user's browser,
//! allowing the application to be testable by substituting a recording browser
//! and to support `--dry-run` by printing URLs instead.

use crate::errors::OpenError;
use std::cell::RefCell;
use std::io::Write;

/// Trait defining the interface for opening a URL.
///
/// # Examples
///
/// ```
/// use esampo::browser::Browser;
/// use esampo::errors::OpenError;
///
/// struct DummyBrowser;
///
/// impl Browser for DummyBrowser {
///     fn open_url(&self, url: &str) -> Result<(), OpenError> {
///         println!("Would open: {}", url);
///         Ok(())
///     }
/// }
///
/// DummyBrowser.open_url("https://docs.esa.io/posts/1").unwrap();
/// ```
pub trait Browser {
    /// Opens a single URL.
    ///
    /// # Errors
    ///
    /// Returns an `OpenError` if the URL could not be handed off.
    fn open_url(&self, url: &str) -> Result<(), OpenError>;
}

/// Opens URLs in the system's default browser.
#[derive(Debug, Default)]
pub struct SystemBrowser;

impl Browser for SystemBrowser {
    /// Uses the `webbrowser` crate to launch the default browser.
    ///
    /// # Errors
    ///
    /// Returns `OpenError::Launch` if no browser is available or it failed to start.
    fn open_url(&self, url: &str) -> Result<(), OpenError> {
        webbrowser::open(url).map_err(OpenError::Launch)
    }
}

/// Writes each URL on its own line instead of opening it.
pub struct DryRunBrowser<W: Write> {
    out: RefCell<W>,
}

impl<W: Write> DryRunBrowser<W> {
    /// Creates a dry-run browser that writes URLs to `out`.
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    /// Consumes the browser and returns the writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> Browser for DryRunBrowser<W> {
    fn open_url(&self, url: &str) -> Result<(), OpenError> {
        let mut out = self.out.borrow_mut();
        writeln!(out, "{}", url).map_err(OpenError::Write)?;
        out.flush().map_err(OpenError::Write)
    }
}
