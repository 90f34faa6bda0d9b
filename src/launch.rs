// Copyright 2019-2020 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Resolving an [`App`] record into a spawnable process invocation.

use std::collections::BTreeMap;
use std::process::{ExitStatus, Stdio};

use tokio::process::Command;

use crate::config::App;
use crate::Error;

/// Stdio wiring for a spawned app.
pub struct StdIoConf {
    pub stdin: Stdio,
    pub stderr: Stdio,
    pub stdout: Stdio,
}

impl StdIoConf {
    /// The child shares the terminal of whoever spawned it.
    ///
    /// A supervising launcher would replace these with pipes to its logger.
    pub fn inherited() -> Self {
        StdIoConf {
            stdin: Stdio::inherit(),
            stderr: Stdio::inherit(),
            stdout: Stdio::inherit(),
        }
    }
}

/// The fully resolved launch instruction for one app.
///
/// The interpreter is the program actually executed, the script is its first
/// argument, followed by the args string split on whitespace. The declared env
/// is merged over the inherited environment at spawn time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    program: String,
    argv: Vec<String>,
    env: BTreeMap<String, String>,
}

impl Invocation {
    pub fn resolve(app: &App) -> Self {
        let mut argv = vec![app.script.clone()];
        if let Some(args) = &app.args {
            argv.extend(args.split_whitespace().map(str::to_string));
        }

        Invocation {
            program: app.interpreter.clone(),
            argv,
            env: app.env.clone(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn argv(&self) -> &[String] {
        &self.argv
    }

    pub fn env(&self) -> &BTreeMap<String, String> {
        &self.env
    }

    pub fn into_command(self, stdio: StdIoConf) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(&self.argv)
            .envs(self.env)
            .stdin(stdio.stdin)
            .stderr(stdio.stderr)
            .stdout(stdio.stdout);

        command
    }
}

/// Spawn the app and wait for it to exit.
///
/// One shot only: restarting on failure is the supervisor's business, not the
/// config layer's.
pub async fn spawn_and_wait(app: &App) -> Result<ExitStatus, Error> {
    let child = Invocation::resolve(app)
        .into_command(StdIoConf::inherited())
        .spawn()?;

    let status = child.await?;
    Ok(status)
}
