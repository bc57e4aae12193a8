// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::{Path, PathBuf};

use crate::job::DEFAULT_SIZES;

/// Source SVG path relative to the repository root.
pub const SOURCE: &str = "icons/icon.svg";

/// Output directory relative to the repository root.
pub const OUT_DIR: &str = "icons";

/// Generation options.
#[derive(Clone, Debug)]
pub struct Options {
    /// Repository root.
    ///
    /// `source` and `out_dir` are resolved against it.
    /// The process working directory is never changed.
    pub root: PathBuf,

    /// Source SVG.
    ///
    /// Default: `icons/icon.svg`
    pub source: PathBuf,

    /// Directory that receives `icon{size}.png` files.
    ///
    /// Default: `icons`
    pub out_dir: PathBuf,

    /// Icon sizes in pixels, in generation order.
    ///
    /// Must not be empty or contain zeros, otherwise `generate` fails
    /// with `Error::InvalidSizes`.
    ///
    /// Default: `[16, 32, 48, 128]`
    pub sizes: Vec<u32>,

    /// Check that each output file exists after the tool succeeded.
    ///
    /// Default: true
    pub verify_outputs: bool,
}

impl Options {
    /// Creates default options with the specified root.
    pub fn with_root<P: Into<PathBuf>>(root: P) -> Self {
        Options {
            root: root.into(),
            ..Options::default()
        }
    }

    /// Returns the absolute (root-relative) source path.
    pub fn source_path(&self) -> PathBuf {
        self.root.join(&self.source)
    }

    /// Returns the absolute (root-relative) output directory.
    pub fn out_dir_path(&self) -> PathBuf {
        self.root.join(&self.out_dir)
    }
}

impl Default for Options {
    fn default() -> Options {
        Options {
            root: PathBuf::from("."),
            source: PathBuf::from(SOURCE),
            out_dir: PathBuf::from(OUT_DIR),
            sizes: DEFAULT_SIZES.to_vec(),
            verify_outputs: true,
        }
    }
}

/// Returns the nearest of `start` and its ancestors that contains `source`.
pub fn find_root(start: &Path, source: &Path) -> Option<PathBuf> {
    start.ancestors()
        .find(|dir| dir.join(source).is_file())
        .map(Path::to_path_buf)
}
