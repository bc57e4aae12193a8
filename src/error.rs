// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

/// List of all errors.
#[derive(Debug)]
pub enum Error {
    /// None of the supported conversion tools was found on the search path.
    ToolUnavailable,

    /// No ancestor of the start directory contains the source SVG.
    RootNotFound(PathBuf),

    /// The source SVG doesn't exist.
    SourceNotFound(PathBuf),

    /// The sizes list is empty or has a zero.
    InvalidSizes(Vec<u32>),

    /// Failed to create the output directory.
    CreateDir(PathBuf, io::Error),

    /// Failed to remove an output left by a previous run.
    RemoveOutput(PathBuf, io::Error),

    /// Failed to start the conversion tool.
    Spawn(&'static str, io::Error),

    /// The conversion tool exited with a non-zero status.
    ///
    /// The exit code is `None` when the process was terminated by a signal.
    Failed(&'static str, Option<i32>),

    /// The conversion tool didn't finish in time and was killed.
    TimedOut(&'static str, Duration),

    /// The conversion tool reported success, but the output file doesn't exist.
    OutputMissing(PathBuf),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Error::ToolUnavailable => {
                write!(f, "no icon generation tool found")
            }
            Error::RootNotFound(ref dir) => {
                write!(f, "'{}' and its parents have no icons/icon.svg", dir.display())
            }
            Error::SourceNotFound(ref path) => {
                write!(f, "'{}' does not exist", path.display())
            }
            Error::InvalidSizes(ref sizes) => {
                write!(f, "icon sizes must be a non-empty list of positive numbers, got {:?}", sizes)
            }
            Error::CreateDir(ref path, ref e) => {
                write!(f, "failed to create '{}' cause {}", path.display(), e)
            }
            Error::RemoveOutput(ref path, ref e) => {
                write!(f, "failed to remove '{}' cause {}", path.display(), e)
            }
            Error::Spawn(program, ref e) => {
                write!(f, "failed to run '{}' cause {}", program, e)
            }
            Error::Failed(program, Some(code)) => {
                write!(f, "'{}' exited with code {}", program, code)
            }
            Error::Failed(program, None) => {
                write!(f, "'{}' was terminated by a signal", program)
            }
            Error::TimedOut(program, timeout) => {
                write!(f, "'{}' timed out after {}s", program, timeout.as_secs())
            }
            Error::OutputMissing(ref path) => {
                write!(f, "'{}' was not created", path.display())
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Error::CreateDir(_, ref e)
            | Error::RemoveOutput(_, ref e)
            | Error::Spawn(_, ref e) => Some(e),
            _ => None,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn failed_display() {
        assert_eq!(Error::Failed("convert", Some(2)).to_string(), "'convert' exited with code 2");
        assert_eq!(Error::Failed("convert", None).to_string(), "'convert' was terminated by a signal");
    }

    #[test]
    fn spawn_has_source() {
        let e = Error::Spawn("magick", io::ErrorKind::NotFound.into());
        assert!(e.source().is_some());
        assert!(Error::ToolUnavailable.source().is_none());
    }
}
