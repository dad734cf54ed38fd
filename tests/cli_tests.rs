// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use common::{HEADER, settlement_csv, write_report};
use serde_json::json;
use std::path::PathBuf;
use tempfile::tempdir;
use tollvoucher::commands::{doctor, exporter, preview, rules};
use tollvoucher::config::Settings;
use tollvoucher::report;
use tollvoucher::{build, cli};

fn export(args: &[&str]) -> anyhow::Result<()> {
    let mut argv = vec!["tollvoucher", "export", "upload"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(export_m)
    } else {
        panic!("no export subcommand");
    }
}

#[test]
fn export_upload_writes_csv_in_voucher_order() {
    let dir = tempdir().unwrap();
    let report = write_report(dir.path(), &settlement_csv("15-01-2025", "500.50"));
    let out = dir.path().join("upload.csv");

    export(&[
        "--report",
        report.to_str().unwrap(),
        "--file",
        out.to_str().unwrap(),
        "--run",
        "3",
    ])
    .unwrap();

    let contents = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines[0], "Account No,C/D,Amount,Narration");
    assert_eq!(lines[1], "0103SLRGTSRC,D,1238.45,NPCIR520250115 150125_3C ETCAC");
    assert_eq!(lines[2], "0103SLETCACQ,C,1500.50,Etoll acq 15.01.25_3C");
    assert_eq!(lines.len(), 7);
}

#[test]
fn export_upload_writes_json() {
    let dir = tempdir().unwrap();
    let report = write_report(dir.path(), &settlement_csv("15-01-2025", "500.50"));
    let out = dir.path().join("upload.json");

    export(&[
        "--report",
        report.to_str().unwrap(),
        "--file",
        out.to_str().unwrap(),
        "--format",
        " JSON ",
    ])
    .unwrap();

    let parsed: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 6);
    assert_eq!(
        parsed[2],
        json!({
            "account_no": "0103SLETCACQ",
            "cd": "D",
            "amount": "200.00",
            "narration": "Etoll acq 15.01.25 Chbk_1C"
        })
    );
}

#[test]
fn export_rejects_unknown_format() {
    let dir = tempdir().unwrap();
    let report = write_report(dir.path(), &settlement_csv("15-01-2025", "500.50"));
    let out = dir.path().join("upload.xml");
    let err = export(&[
        "--report",
        report.to_str().unwrap(),
        "--file",
        out.to_str().unwrap(),
        "--format",
        "xml",
    ])
    .unwrap_err();
    assert!(err.to_string().contains("Unknown format"));
    assert!(!out.exists());
}

#[test]
fn export_refuses_untallied_voucher() {
    let dir = tempdir().unwrap();
    let report = write_report(dir.path(), &settlement_csv("15-01-2025", "500.49"));
    let out = dir.path().join("upload.csv");
    let err = export(&["--report", report.to_str().unwrap(), "--file", out.to_str().unwrap()])
        .unwrap_err();
    assert!(err.to_string().contains("not tallied"));
    assert!(!out.exists());
}

#[test]
fn config_file_is_overridden_by_flags() {
    let dir = tempdir().unwrap();
    let cfg = dir.path().join("config.toml");
    std::fs::write(
        &cfg,
        "report = \"from_config.xlsx\"\nrun_number = 7\noutput_root = \"vouchers\"\n",
    )
    .unwrap();

    let matches = cli::build_cli().get_matches_from([
        "tollvoucher",
        "generate",
        "--config",
        cfg.to_str().unwrap(),
        "--run",
        "9",
    ]);
    let (_, sub) = matches.subcommand().unwrap();
    let settings = Settings::resolve(sub).unwrap();
    assert_eq!(settings.report, PathBuf::from("from_config.xlsx"));
    assert_eq!(settings.run_number, 9);
    assert_eq!(settings.output_root, PathBuf::from("vouchers"));
}

#[test]
fn partial_config_keeps_defaults() {
    let settings = Settings::from_toml("run_number = 2\n").unwrap();
    assert_eq!(settings.run_number, 2);
    assert_eq!(settings.report, Settings::default().report);
    assert!(Settings::from_toml("run_number = \"two\"").is_err());
}

#[test]
fn missing_explicit_config_is_an_error() {
    let dir = tempdir().unwrap();
    assert!(Settings::load(Some(&dir.path().join("absent.toml"))).is_err());
}

#[test]
fn rules_listing_covers_every_template_line() {
    let rows = rules::rows();
    assert_eq!(rows.len(), 19);
    assert_eq!(rows[1][2], "(separator)");
    assert_eq!(rows[0][2], "Final Net Amt");
    assert!(rows[13][4].contains("channel set"));
}

#[test]
fn doctor_flags_gaps_in_a_report() {
    let dir = tempdir().unwrap();
    let body = "Transaction Cycle,Channel,SETAMTDR\nNETC Settled Transaction,Toll,12..5\n";
    let path = write_report(dir.path(), body);
    let report = report::load(&path).unwrap();
    let issues = doctor::diagnose(&report);
    let kinds: Vec<&str> = issues.iter().map(|r| r[0].as_str()).collect();
    assert!(kinds.contains(&"missing_column"));
    assert!(kinds.contains(&"unparseable_amount"));
    assert!(kinds.contains(&"settlement_date_fallback"));
    assert!(kinds.contains(&"no_inward_gst_marker"));
    assert!(kinds.contains(&"no_final_net_amt"));
    assert!(
        issues
            .iter()
            .any(|r| r[1] == "row 2, SETAMTDR: '12..5'")
    );
}

#[test]
fn doctor_flags_cells_that_overflow_a_total() {
    let dir = tempdir().unwrap();
    let max = "79228162514264337593543950335";
    let body = format!(
        "{}\n15-01-2025,NETC Settled Transaction,Credit,Toll,,{max},,,,\n,,,Toll,,{max},,,,\n",
        HEADER
    );
    let path = write_report(dir.path(), &body);
    let report = report::load(&path).unwrap();
    let issues = doctor::diagnose(&report);
    let overflow: Vec<&str> = issues
        .iter()
        .filter(|r| r[0] == "amount_overflow")
        .map(|r| r[1].as_str())
        .collect();
    assert_eq!(overflow, vec![format!("row 3, SETAMTCR: '{max}' is skipped in the total")]);
}

#[test]
fn doctor_takes_no_run_number() {
    let ok = cli::build_cli().try_get_matches_from(["tollvoucher", "doctor", "--report", "r.csv"]);
    assert!(ok.is_ok());
    let err = cli::build_cli().try_get_matches_from(["tollvoucher", "doctor", "--run", "2"]);
    assert!(err.is_err());
}

#[test]
fn doctor_is_quiet_on_a_clean_report() {
    let dir = tempdir().unwrap();
    let path = write_report(dir.path(), &settlement_csv("15-01-2025", "500.50"));
    let report = report::load(&path).unwrap();
    assert!(doctor::diagnose(&report).is_empty());
}

#[test]
fn preview_rows_blank_zero_amounts() {
    let dir = tempdir().unwrap();
    let path = write_report(dir.path(), &settlement_csv("15-01-2025", "500.50"));
    let report = report::load(&path).unwrap();
    let voucher = build(&report, 1, chrono::NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()).unwrap();

    let rows = preview::voucher_rows(&voucher);
    assert_eq!(rows[1], vec![String::new(); 5]);
    let debit_adj = &rows[3];
    assert_eq!(debit_adj[4], "Debit Adjustment");
    assert_eq!(debit_adj[1], "");
    assert_eq!(debit_adj[2], "");

    let upload = preview::upload_rows(&voucher);
    assert_eq!(upload.len(), 6);
    assert_eq!(upload[0][1], "D");
    assert_eq!(upload[0][2], "1238.45");
}
