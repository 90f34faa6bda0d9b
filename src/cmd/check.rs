// Copyright 2019-2020 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use async_trait::async_trait;
use clap::{App, ArgMatches, SubCommand};

use crate::cmd::{load_config, Cmd};
use crate::Error;

/// Validate an ecosystem config file
///
/// Rules:
///   - read only, never spawns anything
///   - exit zero means every app record is launchable as declared
#[derive(Debug)]
pub struct Check;

#[async_trait]
impl Cmd for Check {
    const NAME: &'static str = "check";

    fn sub_command() -> App<'static, 'static> {
        SubCommand::with_name(Self::NAME).about("Validate an ecosystem config file")
    }

    async fn run(args: &ArgMatches<'_>) -> Result<(), Error> {
        let ecosystem = load_config(args)?;

        println!("ok: {} app(s) declared", ecosystem.apps.len());
        Ok(())
    }
}
