// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path;
use std::time::Duration;

fn main() {
    if let Err(e) = process() {
        eprintln!("Error: {}.", e);
        std::process::exit(1);
    }
}

fn process() -> Result<(), String> {
    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            println!("{}", HELP);
            return Err(e);
        }
    };

    if !args.quiet {
        if let Ok(()) = log::set_logger(&LOGGER) {
            let level = if args.verbose { log::LevelFilter::Info } else { log::LevelFilter::Warn };
            log::set_max_level(level);
        }
    }

    let root = match args.root {
        Some(root) => root,
        None => {
            let cwd = std::env::current_dir()
                .map_err(|e| format!("failed to get the current directory cause {}", e))?;
            svgicons::find_root(&cwd, path::Path::new(svgicons::SOURCE))
                .ok_or_else(|| svgicons::Error::RootNotFound(cwd).to_string())?
        }
    };

    let opt = svgicons::Options {
        root,
        sizes: args.sizes,
        verify_outputs: !args.no_verify,
        ..svgicons::Options::default()
    };

    let probe = svgicons::SearchPath::from_env();
    let mut system = svgicons::System { timeout: args.timeout };
    let mut dry_run = svgicons::DryRun;
    let exec: &mut dyn svgicons::Executor = if args.dry_run { &mut dry_run } else { &mut system };

    let report = match svgicons::generate(&opt, &probe, exec) {
        Ok(report) => report,
        Err(svgicons::Error::ToolUnavailable) => {
            print!("{}", svgicons::install_hint(&opt));
            return Err(svgicons::Error::ToolUnavailable.to_string());
        }
        Err(e) => return Err(e.to_string()),
    };

    if args.dry_run {
        return Ok(());
    }

    if !report.is_success() {
        let failed: Vec<_> = report.failures().map(|o| o.job.size.to_string()).collect();
        return Err(format!(
            "{} failed to generate {} of {} icons (sizes: {})",
            report.tool, failed.len(), report.outcomes.len(), failed.join(", ")
        ));
    }

    println!("Icons generated using {}", report.tool);
    Ok(())
}

const HELP: &str = "\
svgicons generates PNG icons from icons/icon.svg using an installed
conversion tool: ImageMagick, Inkscape or rsvg-convert.

USAGE:
  svgicons [OPTIONS]

  svgicons
  svgicons --sizes 16,32,48,128,256
  svgicons --root ../my-extension --dry-run

OPTIONS:
      --help                    Prints this help
  -V, --version                 Prints version

      --root DIR                Sets the repository root
                                [default: the nearest directory containing icons/icon.svg]
      --sizes LIST              Sets a comma-separated list of icon sizes
                                [default: 16,32,48,128]
      --timeout SECONDS         Kills a conversion tool that runs longer than that
      --dry-run                 Prints the commands instead of running them
      --no-verify               Do not check that output files were created

      --verbose                 Prints each command
      --quiet                   Disables warnings
";

#[derive(Debug)]
struct CliArgs {
    root: Option<path::PathBuf>,
    sizes: Vec<u32>,
    timeout: Option<Duration>,
    dry_run: bool,
    no_verify: bool,
    verbose: bool,
    quiet: bool,
}

fn collect_args() -> Result<CliArgs, pico_args::Error> {
    let mut input = pico_args::Arguments::from_env();

    if input.contains("--help") {
        print!("{}", HELP);
        std::process::exit(0);
    }

    if input.contains(["-V", "--version"]) {
        println!("{}", env!("CARGO_PKG_VERSION"));
        std::process::exit(0);
    }

    let args = CliArgs {
        root:       input.opt_value_from_str("--root")?,
        sizes:      input.opt_value_from_fn("--sizes", parse_sizes)?
            .unwrap_or_else(|| svgicons::DEFAULT_SIZES.to_vec()),
        timeout:    input.opt_value_from_fn("--timeout", parse_timeout)?,
        dry_run:    input.contains("--dry-run"),
        no_verify:  input.contains("--no-verify"),
        verbose:    input.contains("--verbose"),
        quiet:      input.contains("--quiet"),
    };

    let rest = input.finish();
    if !rest.is_empty() {
        let left: Vec<String> = rest.iter().map(|s| s.to_string_lossy().into_owned()).collect();
        return Err(pico_args::Error::ArgumentParsingFailed {
            cause: format!("unused arguments left: {}", left.join(", ")),
        });
    }

    Ok(args)
}

fn parse_sizes(s: &str) -> Result<Vec<u32>, String> {
    let mut sizes = Vec::new();
    for size in s.split(',') {
        let n: u32 = size.trim().parse().map_err(|_| "invalid size")?;
        if n == 0 {
            return Err("SIZE cannot be zero".to_string());
        }

        sizes.push(n);
    }

    Ok(sizes)
}

fn parse_timeout(s: &str) -> Result<Duration, String> {
    let n: u64 = s.parse().map_err(|_| "invalid number")?;

    if n > 0 {
        Ok(Duration::from_secs(n))
    } else {
        Err("TIMEOUT should be positive".to_string())
    }
}

fn parse_args() -> Result<CliArgs, String> {
    let args = collect_args().map_err(|e| e.to_string())?;

    if args.verbose && args.quiet {
        println!("Warning: --verbose has no effect with --quiet.");
    }

    Ok(args)
}


/// A simple stderr logger.
static LOGGER: SimpleLogger = SimpleLogger;
struct SimpleLogger;
impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            match record.level() {
                log::Level::Error => eprintln!("Error: {}", record.args()),
                log::Level::Warn  => eprintln!("Warning: {}", record.args()),
                log::Level::Info  => eprintln!("Info: {}", record.args()),
                log::Level::Debug => eprintln!("Debug: {}", record.args()),
                log::Level::Trace => eprintln!("Trace: {}", record.args()),
            }
        }
    }

    fn flush(&self) {}
}
