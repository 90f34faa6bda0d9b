// Copyright 2019-2020 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

mod check;
mod show;
mod spawn;

pub use check::Check;
pub use show::Show;
pub use spawn::Spawn;

use std::path::Path;

use async_trait::async_trait;
use clap::{App, ArgMatches};

use crate::config::Ecosystem;
use crate::Error;

pub const CONFIG: &str = "config";
pub const APP: &str = "app";

/// A trait to define common construction of a subcommand
#[async_trait]
pub trait Cmd: Sized + Send + 'static {
    const NAME: &'static str;

    fn sub_command() -> App<'static, 'static>;

    async fn run(args: &ArgMatches<'_>) -> Result<(), Error>;
}

/// Load and validate the config file named by the common `config` argument.
pub(crate) fn load_config(args: &ArgMatches<'_>) -> Result<Ecosystem, Error> {
    let path = args.value_of(CONFIG).ok_or("config file not specified")?;
    Ecosystem::load(Path::new(path))
}
