// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
`svgicons` generates PNG icons of fixed sizes from a single SVG.

Rendering is delegated to the first conversion tool found on the search path:
ImageMagick (`magick` or `convert`), Inkscape or `rsvg-convert`.

```no_run
let opt = svgicons::Options::with_root("/path/to/repo");
let probe = svgicons::SearchPath::from_env();
let report = svgicons::generate(&opt, &probe, &mut svgicons::System::default()).unwrap();
assert!(report.is_success());
```
*/

#![warn(missing_docs)]

use std::fs;

mod error;
mod exec;
mod job;
mod options;
mod probe;
mod tool;

pub use error::Error;
pub use exec::{DryRun, Executor, System};
pub use job::{jobs, output_name, Job, DEFAULT_SIZES};
pub use options::{find_root, Options, OUT_DIR, SOURCE};
pub use probe::{resolve, Probe, SearchPath};
pub use tool::{Invocation, Tool};

/// Returns installation hints printed when no tool is available.
///
/// The manual steps mention the source and sizes from `opt`.
pub fn install_hint(opt: &Options) -> String {
    let sizes: Vec<_> = opt.sizes.iter().map(|s| s.to_string()).collect();
    let sizes = match sizes.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{}, and {}", rest.join(", "), last),
        Some((last, _)) => last.clone(),
        None => String::new(),
    };

    format!("\
No icon generation tool found.
Please install one of:
  - ImageMagick: sudo apt-get install imagemagick
                 brew install imagemagick
                 winget install ImageMagick.ImageMagick
  - Inkscape:    sudo apt-get install inkscape
                 brew install --cask inkscape
                 winget install Inkscape.Inkscape
  - librsvg:     sudo apt-get install librsvg2-bin
                 brew install librsvg
                 pacman -S mingw-w64-x86_64-librsvg (MSYS2 on Windows)

Or manually:
1. Open {} in a graphics editor
2. Export as PNG at {} pixels
", opt.source.display(), sizes)
}

/// A conversion result.
#[derive(Debug)]
pub struct Outcome {
    /// The conversion.
    pub job: Job,
    /// The conversion status.
    pub result: Result<(), Error>,
}

/// Generation results.
#[derive(Debug)]
pub struct Report {
    /// The tool used for all conversions.
    pub tool: Tool,
    /// One outcome per requested size, in the requested order.
    pub outcomes: Vec<Outcome>,
}

impl Report {
    /// Returns `true` when all conversions have succeeded.
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|o| o.result.is_ok())
    }

    /// Returns failed conversions.
    pub fn failures(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes.iter().filter(|o| o.result.is_err())
    }
}

/// Generates one PNG per size using the first available tool.
///
/// Fails early, without touching the file system, when the sizes list is empty
/// or has a zero, or when there is no tool or no source SVG. Otherwise, all
/// sizes are processed even when some of them fail and the per-size results
/// are returned in `Report`.
pub fn generate(opt: &Options, probe: &dyn Probe, exec: &mut dyn Executor) -> Result<Report, Error> {
    if opt.sizes.is_empty() || opt.sizes.contains(&0) {
        return Err(Error::InvalidSizes(opt.sizes.clone()));
    }

    let tool = resolve(probe).ok_or(Error::ToolUnavailable)?;
    log::info!("Using {} ('{}').", tool, tool.executable());

    let source = opt.source_path();
    if !source.is_file() {
        return Err(Error::SourceNotFound(source));
    }

    let out_dir = opt.out_dir_path();
    if exec.produces_output() {
        fs::create_dir_all(&out_dir).map_err(|e| Error::CreateDir(out_dir.clone(), e))?;
    }

    let mut outcomes = Vec::with_capacity(opt.sizes.len());
    for job in jobs(&source, &out_dir, &opt.sizes) {
        let result = convert(tool, &job, opt, exec);
        if let Err(ref e) = result {
            log::warn!("Failed to generate '{}' cause {}.", job.output.display(), e);
        }

        outcomes.push(Outcome { job, result });
    }

    Ok(Report { tool, outcomes })
}

fn convert(tool: Tool, job: &Job, opt: &Options, exec: &mut dyn Executor) -> Result<(), Error> {
    let verify = opt.verify_outputs && exec.produces_output();

    // Leftovers from a previous run would pass the check.
    if verify {
        match fs::remove_file(&job.output) {
            Ok(()) => {}
            Err(ref e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(Error::RemoveOutput(job.output.clone(), e)),
        }
    }

    let invocation = tool.invocation(job);
    log::info!("{}", invocation);
    exec.execute(&invocation)?;

    if verify && !job.output.is_file() {
        return Err(Error::OutputMissing(job.output.clone()));
    }

    Ok(())
}
