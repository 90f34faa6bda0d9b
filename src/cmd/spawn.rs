// Copyright 2019-2020 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use async_trait::async_trait;
use clap::{App, Arg, ArgMatches, SubCommand};

use crate::cmd::{load_config, Cmd, APP};
use crate::launch;
use crate::Error;

/// Spawn one declared app and wait for it to exit
///
/// Rules:
///   - spawns exactly the declared invocation, `interpreter script args`
///   - declared env is merged over the inherited environment
///   - mirrors the child's exit code, never restarts it
#[derive(Debug)]
pub struct Spawn;

#[async_trait]
impl Cmd for Spawn {
    const NAME: &'static str = "spawn";

    fn sub_command() -> App<'static, 'static> {
        SubCommand::with_name(Self::NAME)
            .about("Spawn a declared app and wait for it to exit")
            .arg(
                Arg::with_name(APP)
                    .short("a")
                    .long(APP)
                    .value_name("NAME")
                    .help("app to spawn, may be omitted when only one is declared")
                    .takes_value(true),
            )
    }

    async fn run(args: &ArgMatches<'_>) -> Result<(), Error> {
        let ecosystem = load_config(args)?;

        let app = match args.value_of(APP) {
            Some(name) => ecosystem.app(name)?,
            None if ecosystem.apps.len() == 1 => &ecosystem.apps[0],
            None => return Err(Error::from("--app is required when more than one app is declared")),
        };

        println!("spawning {}: {} {}", app.name, app.interpreter, app.script);

        let status = launch::spawn_and_wait(app).await?;
        if !status.success() {
            eprintln!("{} exited with {}", app.name, status);
            // no code means the child died to a signal
            std::process::exit(status.code().unwrap_or(1));
        }

        Ok(())
    }
}
