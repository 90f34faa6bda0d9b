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

/// Print the normalized form of an ecosystem config file
///
/// Rules:
///   - output is valid input: feeding it back to any subcommand yields the
///     same declarations
#[derive(Debug)]
pub struct Show;

#[async_trait]
impl Cmd for Show {
    const NAME: &'static str = "show";

    fn sub_command() -> App<'static, 'static> {
        SubCommand::with_name(Self::NAME).about("Print the normalized ecosystem config")
    }

    async fn run(args: &ArgMatches<'_>) -> Result<(), Error> {
        let ecosystem = load_config(args)?;

        print!("{}", ecosystem.to_yaml()?);
        Ok(())
    }
}
