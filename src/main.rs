// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use tollvoucher::{cli, commands};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = cli::build_cli().get_matches();

    match matches.subcommand() {
        Some(("generate", sub)) => commands::generate::handle(sub)?,
        Some(("preview", sub)) => commands::preview::handle(sub)?,
        Some(("rules", sub)) => commands::rules::handle(sub)?,
        Some(("doctor", sub)) => commands::doctor::handle(sub)?,
        Some(("export", sub)) => commands::exporter::handle(sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
