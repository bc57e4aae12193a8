// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::io;
use std::process::{Command, ExitStatus, Stdio};
use std::time::Duration;

use wait_timeout::ChildExt;

use crate::{Error, Invocation};

/// Runs conversion tools.
pub trait Executor {
    /// Runs `invocation` until it exits.
    ///
    /// Returns `Ok` only when the tool exited successfully.
    fn execute(&mut self, invocation: &Invocation) -> Result<(), Error>;

    /// Returns `false` when invocations are not actually run,
    /// so their outputs should not be checked.
    fn produces_output(&self) -> bool {
        true
    }
}

/// Runs tools as child processes.
#[derive(Clone, Default, Debug)]
pub struct System {
    /// Kill the tool if it runs longer than that.
    pub timeout: Option<Duration>,
}

impl Executor for System {
    fn execute(&mut self, invocation: &Invocation) -> Result<(), Error> {
        let program = invocation.program;
        let mut cmd = invocation.to_command();
        cmd.stdin(Stdio::null()).stdout(Stdio::null());

        let status = match self.timeout {
            Some(timeout) => match cmd.run_with_timeout(timeout) {
                Ok(Some(status)) => status,
                Ok(None) => return Err(Error::TimedOut(program, timeout)),
                Err(e) => return Err(Error::Spawn(program, e)),
            },
            None => cmd.status().map_err(|e| Error::Spawn(program, e))?,
        };

        if status.success() {
            Ok(())
        } else {
            Err(Error::Failed(program, status.code()))
        }
    }
}

/// Prints invocations instead of running them.
#[derive(Clone, Copy, Default, Debug)]
pub struct DryRun;

impl Executor for DryRun {
    fn execute(&mut self, invocation: &Invocation) -> Result<(), Error> {
        println!("{}", invocation);
        Ok(())
    }

    fn produces_output(&self) -> bool {
        false
    }
}


trait CommandExt {
    /// Returns `None` when the process was killed after `timeout`.
    fn run_with_timeout(&mut self, timeout: Duration) -> io::Result<Option<ExitStatus>>;
}

impl CommandExt for Command {
    fn run_with_timeout(&mut self, timeout: Duration) -> io::Result<Option<ExitStatus>> {
        let mut child = self.spawn()?;
        match child.wait_timeout(timeout)? {
            Some(status) => Ok(Some(status)),
            None => {
                child.kill()?;
                child.wait()?;
                Ok(None)
            }
        }
    }
}


#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh(script: &str) -> Invocation {
        Invocation { program: "sh", args: vec!["-c".into(), script.into()] }
    }

    #[test]
    fn success() {
        assert!(System::default().execute(&sh("exit 0")).is_ok());
    }

    #[test]
    fn exit_code() {
        match System::default().execute(&sh("exit 3")) {
            Err(Error::Failed("sh", Some(3))) => {}
            r => panic!("unexpected result: {:?}", r),
        }
    }

    #[test]
    fn missing_program() {
        let inv = Invocation { program: "svgicons-no-such-tool", args: Vec::new() };
        assert!(matches!(System::default().execute(&inv), Err(Error::Spawn(..))));
    }

    #[test]
    fn timeout() {
        let mut exec = System { timeout: Some(Duration::from_millis(200)) };
        assert!(matches!(exec.execute(&sh("sleep 5")), Err(Error::TimedOut("sh", _))));
        assert!(exec.execute(&sh("exit 0")).is_ok());
    }
}
