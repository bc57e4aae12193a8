// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::ffi::OsString;
use std::path::Path;

use crate::Tool;

/// Checks whether an executable is available.
///
/// Only the presence is checked, the executable is never run.
pub trait Probe {
    /// Returns `true` when `executable` can be found.
    fn is_available(&self, executable: &str) -> bool;
}

/// A probe that looks up executables on the search path.
#[derive(Clone, Default, Debug)]
pub struct SearchPath {
    paths: Option<OsString>,
}

impl SearchPath {
    /// Uses the `PATH` environment variable.
    pub fn from_env() -> Self {
        SearchPath::default()
    }

    /// Uses the provided `PATH`-like value instead of the environment.
    pub fn new<T: Into<OsString>>(paths: T) -> Self {
        SearchPath { paths: Some(paths.into()) }
    }
}

impl Probe for SearchPath {
    fn is_available(&self, executable: &str) -> bool {
        let found = match self.paths {
            Some(ref paths) => {
                let cwd = std::env::current_dir().unwrap_or_else(|_| Path::new(".").to_path_buf());
                which::which_in(executable, Some(paths), cwd)
            }
            None => which::which(executable),
        };

        match found {
            Ok(path) => {
                log::debug!("'{}' found at '{}'.", executable, path.display());
                true
            }
            Err(_) => {
                log::debug!("'{}' not found.", executable);
                false
            }
        }
    }
}

/// Selects the first available tool in the `Tool::ALL` order.
pub fn resolve(probe: &dyn Probe) -> Option<Tool> {
    Tool::ALL.iter().copied().find(|tool| probe.is_available(tool.executable()))
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FakePath {
        installed: &'static [&'static str],
        probed: RefCell<Vec<String>>,
    }

    impl FakePath {
        fn new(installed: &'static [&'static str]) -> Self {
            FakePath { installed, probed: RefCell::new(Vec::new()) }
        }
    }

    impl Probe for FakePath {
        fn is_available(&self, executable: &str) -> bool {
            self.probed.borrow_mut().push(executable.to_string());
            self.installed.iter().any(|e| *e == executable)
        }
    }

    #[test]
    fn nothing_installed() {
        let probe = FakePath::new(&[]);
        assert_eq!(resolve(&probe), None);
        assert_eq!(*probe.probed.borrow(), ["magick", "convert", "inkscape", "rsvg-convert"]);
    }

    #[test]
    fn single_tool() {
        assert_eq!(resolve(&FakePath::new(&["magick"])), Some(Tool::Magick));
        assert_eq!(resolve(&FakePath::new(&["convert"])), Some(Tool::MagickLegacy));
        assert_eq!(resolve(&FakePath::new(&["inkscape"])), Some(Tool::Inkscape));
        assert_eq!(resolve(&FakePath::new(&["rsvg-convert"])), Some(Tool::RsvgConvert));
    }

    #[test]
    fn priority() {
        let all = FakePath::new(&["rsvg-convert", "inkscape", "convert", "magick"]);
        assert_eq!(resolve(&all), Some(Tool::Magick));
        assert_eq!(*all.probed.borrow(), ["magick"]);

        assert_eq!(resolve(&FakePath::new(&["rsvg-convert", "convert"])), Some(Tool::MagickLegacy));
        assert_eq!(resolve(&FakePath::new(&["rsvg-convert", "inkscape"])), Some(Tool::Inkscape));
    }

    #[test]
    fn empty_search_path() {
        let dir = tempfile::tempdir().unwrap();
        let probe = SearchPath::new(dir.path());
        assert!(!probe.is_available("rsvg-convert"));
        assert_eq!(resolve(&probe), None);
    }
}
