// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::VoucherError;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Tollvoucher", "tollvoucher"));

pub const DEFAULT_REPORT: &str = "dsr_report.xlsx";
pub const DEFAULT_OUTPUT_ROOT: &str = "E-tollAcquiringSettlement/Processing";

/// Run settings. Built-in defaults are overridden by the config file,
/// which is in turn overridden by command-line flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Settlement report (DSR) to read.
    pub report: PathBuf,
    /// Run number, embedded in narrations and the output file name.
    pub run_number: u32,
    pub output_root: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            report: PathBuf::from(DEFAULT_REPORT),
            run_number: 1,
            output_root: PathBuf::from(DEFAULT_OUTPUT_ROOT),
        }
    }
}

impl Settings {
    pub fn from_toml(s: &str) -> Result<Self, VoucherError> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Read config {}", path.display()))?;
        let settings = Self::from_toml(&raw)
            .with_context(|| format!("Parse config {}", path.display()))?;
        Ok(settings)
    }

    /// Load from an explicit path, or from the platform config file when it
    /// exists, or fall back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(p) = explicit {
            return Self::from_file(p);
        }
        match config_path() {
            Some(p) if p.is_file() => {
                log::debug!("using config {}", p.display());
                Self::from_file(&p)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Apply the shared `--config/--report/--run/--out` flags.
    pub fn resolve(m: &clap::ArgMatches) -> Result<Self> {
        let explicit = m
            .try_get_one::<String>("config")
            .ok()
            .flatten()
            .map(|s| PathBuf::from(s.trim()));
        let mut settings = Self::load(explicit.as_deref())?;
        if let Some(report) = m.try_get_one::<String>("report").ok().flatten() {
            settings.report = PathBuf::from(report.trim());
        }
        if let Some(run) = m.try_get_one::<u32>("run").ok().flatten() {
            settings.run_number = *run;
        }
        if let Some(out) = m.try_get_one::<String>("out").ok().flatten() {
            settings.output_root = PathBuf::from(out.trim());
        }
        Ok(settings)
    }
}

pub fn config_path() -> Option<PathBuf> {
    ProjectDirs::from(APP.0, APP.1, APP.2).map(|p| p.config_dir().join("config.toml"))
}
