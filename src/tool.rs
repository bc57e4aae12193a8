// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::ffi::OsString;
use std::fmt;
use std::process::Command;

use crate::Job;

/// A supported SVG to PNG conversion tool.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tool {
    /// ImageMagick 7 `magick`.
    Magick,
    /// ImageMagick 6 `convert`.
    MagickLegacy,
    /// `inkscape` 1.x.
    Inkscape,
    /// librsvg's `rsvg-convert`.
    RsvgConvert,
}

impl Tool {
    /// All tools in the probing order.
    pub const ALL: [Tool; 4] = [Tool::Magick, Tool::MagickLegacy, Tool::Inkscape, Tool::RsvgConvert];

    /// Returns the executable name.
    pub fn executable(self) -> &'static str {
        match self {
            Tool::Magick => "magick",
            Tool::MagickLegacy => "convert",
            Tool::Inkscape => "inkscape",
            Tool::RsvgConvert => "rsvg-convert",
        }
    }

    /// Returns the name reported to the user.
    ///
    /// Both ImageMagick entry points are reported as `ImageMagick`.
    pub fn display_name(self) -> &'static str {
        match self {
            Tool::Magick | Tool::MagickLegacy => "ImageMagick",
            Tool::Inkscape => "Inkscape",
            Tool::RsvgConvert => "rsvg-convert",
        }
    }

    /// Builds an invocation that converts `job`.
    pub fn invocation(self, job: &Job) -> Invocation {
        let size = job.size.to_string();
        let geometry = format!("{}x{}", job.size, job.size);
        let source = job.source.as_os_str().to_owned();
        let output = job.output.as_os_str().to_owned();

        let args: Vec<OsString> = match self {
            Tool::Magick => vec![
                source, "-resize".into(), geometry.into(), output,
            ],
            Tool::MagickLegacy => vec![
                "-resize".into(), geometry.into(), source, output,
            ],
            Tool::Inkscape | Tool::RsvgConvert => vec![
                "-w".into(), size.clone().into(),
                "-h".into(), size.into(),
                "-o".into(), output,
                source,
            ],
        };

        Invocation { program: self.executable(), args }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.display_name())
    }
}


/// A program with its arguments.
#[derive(Clone, PartialEq, Debug)]
pub struct Invocation {
    /// Executable name, resolved through the search path.
    pub program: &'static str,
    /// Arguments in order.
    pub args: Vec<OsString>,
}

impl Invocation {
    /// Creates a `Command` that runs this invocation.
    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(self.program);
        cmd.args(&self.args);
        cmd
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }

        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn job(size: u32) -> Job {
        Job::new(Path::new("icons/icon.svg"), Path::new("icons"), size)
    }

    macro_rules! test {
        ($name:ident, $tool:expr, $expected:expr) => {
            #[test]
            fn $name() {
                let output = Path::new("icons").join("icon48.png");
                let expected = $expected.replace("OUT", &output.to_string_lossy());
                assert_eq!($tool.invocation(&job(48)).to_string(), expected);
            }
        };
    }

    test!(magick, Tool::Magick, "magick icons/icon.svg -resize 48x48 OUT");
    test!(magick_legacy, Tool::MagickLegacy, "convert -resize 48x48 icons/icon.svg OUT");
    test!(inkscape, Tool::Inkscape, "inkscape -w 48 -h 48 -o OUT icons/icon.svg");
    test!(rsvg_convert, Tool::RsvgConvert, "rsvg-convert -w 48 -h 48 -o OUT icons/icon.svg");

    #[test]
    fn display_names() {
        assert_eq!(Tool::Magick.to_string(), "ImageMagick");
        assert_eq!(Tool::MagickLegacy.to_string(), "ImageMagick");
        assert_eq!(Tool::RsvgConvert.to_string(), "rsvg-convert");
    }

    #[test]
    fn command_program() {
        let cmd = Tool::Inkscape.invocation(&job(16)).to_command();
        assert_eq!(cmd.get_program(), "inkscape");
        assert_eq!(cmd.get_args().count(), 7);
    }
}
