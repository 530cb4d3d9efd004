// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! jetrun binary entry point.

use clap::Parser;

use jetrun::cli::Cli;
use jetrun::output::print_error;
use jetrun::paths::RunnerPaths;
use jetrun::runner;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    let paths = match RunnerPaths::resolve(&cli) {
        Ok(paths) => paths,
        Err(e) => {
            print_error(e);
            std::process::exit(1);
        }
    };

    match runner::run(&paths).await {
        // Transparent passthrough: our exit code is the test binary's.
        Ok(code) => std::process::exit(code),
        Err(e) => {
            print_error(e);
            std::process::exit(1);
        }
    }
}
