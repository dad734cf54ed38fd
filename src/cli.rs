// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn source_args() -> [Arg; 2] {
    [
        Arg::new("config")
            .long("config")
            .value_name("PATH")
            .help("Settings file (TOML); defaults to the platform config dir"),
        Arg::new("report")
            .long("report")
            .value_name("PATH")
            .help("Settlement report (.xlsx, .xls, .ods or .csv)"),
    ]
}

fn run_args() -> Vec<Arg> {
    let mut args = source_args().to_vec();
    args.push(
        Arg::new("run")
            .long("run")
            .value_name("N")
            .value_parser(value_parser!(u32))
            .help("Run number used in narrations and the file name"),
    );
    args
}

pub fn build_cli() -> Command {
    Command::new("tollvoucher")
        .version(clap::crate_version!())
        .about("Build a tallied e-toll acquiring voucher from a settlement report")
        .subcommand(
            Command::new("generate")
                .about("Write the voucher workbook (or the ERROR_ workbook if it does not tally)")
                .args(run_args())
                .arg(
                    Arg::new("out")
                        .long("out")
                        .value_name("DIR")
                        .help("Output root; files land in <DIR>/<YYYY>/<MM>/<DD>"),
                ),
        )
        .subcommand(
            Command::new("preview")
                .about("Print the voucher, upload lines and totals without writing")
                .args(run_args())
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("jsonl"),
                )
                .arg(Arg::new("jsonl").long("jsonl").action(ArgAction::SetTrue)),
        )
        .subcommand(Command::new("rules").about("Show the voucher layout and its rules"))
        .subcommand(
            Command::new("doctor")
                .about("Check a report for columns and cells that would blank voucher lines")
                .args(source_args()),
        )
        .subcommand(
            Command::new("export")
                .about("Export parts of the voucher")
                .subcommand_required(true)
                .subcommand(
                    Command::new("upload")
                        .about("Write the bank upload lines as CSV or JSON")
                        .args(run_args())
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .value_name("csv|json")
                                .default_value("csv"),
                        )
                        .arg(
                            Arg::new("file")
                                .long("file")
                                .value_name("PATH")
                                .required(true),
                        ),
                ),
        )
}
