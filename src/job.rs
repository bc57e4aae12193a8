// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::{Path, PathBuf};

/// Icon sizes generated when nothing else is requested.
pub const DEFAULT_SIZES: &[u32] = &[16, 32, 48, 128];

/// A single SVG to PNG conversion.
#[derive(Clone, PartialEq, Debug)]
pub struct Job {
    /// Source SVG.
    pub source: PathBuf,
    /// Width and height of the output in pixels.
    pub size: u32,
    /// Output PNG.
    pub output: PathBuf,
}

impl Job {
    /// Creates a job that writes `icon{size}.png` into `out_dir`.
    pub fn new(source: &Path, out_dir: &Path, size: u32) -> Self {
        Job {
            source: source.to_path_buf(),
            size,
            output: out_dir.join(output_name(size)),
        }
    }
}

/// Returns the file name of the icon with the specified size.
pub fn output_name(size: u32) -> String {
    format!("icon{}.png", size)
}

/// Creates one job per size, preserving the sizes order.
pub fn jobs(source: &Path, out_dir: &Path, sizes: &[u32]) -> Vec<Job> {
    sizes.iter().map(|&size| Job::new(source, out_dir, size)).collect()
}
