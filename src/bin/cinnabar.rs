// Copyright 2019-2020 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use clap::{App, Arg};
use tokio::runtime;

use cinnabar::cmd::{self, Check, Cmd, Show, Spawn};
use cinnabar::Error;

trait SetupClapApp {
    fn setup_clap_app(self) -> Self;
    fn default_subcommand_opts(self) -> Self;
}

impl<'a, 'b> SetupClapApp for App<'a, 'b> {
    fn setup_clap_app(self) -> Self {
        self.version(env!("CARGO_PKG_VERSION"))
            .author(env!("CARGO_PKG_AUTHORS"))
    }

    fn default_subcommand_opts(self) -> Self {
        self.arg(
            Arg::with_name(cmd::CONFIG)
                .value_name("FILE")
                .help("path to the ecosystem config file")
                .required(true),
        )
    }
}

fn main() -> Result<(), Error> {
    let args = App::new(env!("CARGO_PKG_NAME"))
        .setup_clap_app()
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .subcommand(
            Check::sub_command()
                .setup_clap_app()
                .default_subcommand_opts(),
        )
        .subcommand(
            Show::sub_command()
                .setup_clap_app()
                .default_subcommand_opts(),
        )
        .subcommand(
            Spawn::sub_command()
                .setup_clap_app()
                .default_subcommand_opts(),
        )
        .get_matches();

    let mut runtime = runtime::Builder::new()
        .basic_scheduler()
        .enable_io()
        .build()
        .expect("Failed to initialize Tokio Runtime");

    runtime.block_on(async move {
        match args.subcommand() {
            (Check::NAME, Some(args)) => Check::run(args).await,
            (Show::NAME, Some(args)) => Show::run(args).await,
            (Spawn::NAME, Some(args)) => Spawn::run(args).await,
            ("", None) => {
                println!("command required");
                println!("{}", args.usage());
                std::process::exit(1);
            }
            (arg, _) => {
                println!("unexpected argument: {}", arg);
                println!("{}", args.usage());
                std::process::exit(2);
            }
        }
    })
}
