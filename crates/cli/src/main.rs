// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use hhrs::Cli;

fn main() {
    let cli = Cli::parse();
    hhrs::init_logging(cli.verbose);
    if let Err(e) = hhrs::run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
