//! Application and report configuration.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// How much detail each report entry gets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportMode {
    /// Question, options, answers and correctness for every entry.
    #[default]
    Verbose,
    /// One line per entry.
    Concise,
}

impl fmt::Display for ReportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportMode::Verbose => write!(f, "verbose"),
            ReportMode::Concise => write!(f, "concise"),
        }
    }
}

impl FromStr for ReportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verbose" => Ok(ReportMode::Verbose),
            "concise" => Ok(ReportMode::Concise),
            other => Err(format!("unknown report mode: {other}")),
        }
    }
}

/// Where the report is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    #[default]
    Console,
    File,
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputMode::Console => write!(f, "console"),
            OutputMode::File => write!(f, "file"),
        }
    }
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "console" | "stdout" => Ok(OutputMode::Console),
            "file" => Ok(OutputMode::File),
            other => Err(format!("unknown output mode: {other}")),
        }
    }
}

/// Language of the fixed report labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => write!(f, "en"),
            Locale::Ru => write!(f, "ru"),
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "ru" | "russian" => Ok(Locale::Ru),
            other => Err(format!("unknown locale: {other}")),
        }
    }
}

/// Report sink descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub mode: OutputMode,
    /// Target file, only consulted in [`OutputMode::File`].
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl OutputSettings {
    pub fn console() -> Self {
        Self::default()
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            mode: OutputMode::File,
            path: Some(path.into()),
        }
    }
}

/// Settings consumed by the report generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSettings {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub mode: ReportMode,
    #[serde(default)]
    pub output: OutputSettings,
    #[serde(default)]
    pub locale: Locale,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            mode: ReportMode::default(),
            output: OutputSettings::default(),
            locale: Locale::default(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// Top-level quizreport configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Quiz title shown in the report header.
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub report: ReportSettings,
}

fn default_title() -> String {
    "Quiz".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            report: ReportSettings::default(),
        }
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `quizreport.toml` in the current directory
/// 2. `~/.config/quizreport/config.toml`
///
/// Environment variable overrides: `QUIZREPORT_TITLE`, `QUIZREPORT_REPORT_ENABLED`,
/// `QUIZREPORT_REPORT_MODE`, `QUIZREPORT_OUTPUT_PATH`.
pub fn load_config() -> Result<AppConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<AppConfig> {
    load_config_with(path, |name| std::env::var(name).ok())
}

/// Like [`load_config_from`], reading overrides through `lookup`.
pub fn load_config_with<F>(path: Option<&Path>, lookup: F) -> Result<AppConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizreport.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => AppConfig::default(),
    };

    apply_env_overrides(config, lookup)
}

/// Parse a TOML config string.
pub fn parse_config_str(content: &str) -> Result<AppConfig> {
    Ok(toml::from_str::<AppConfig>(content)?)
}

/// Apply `QUIZREPORT_*` overrides using `lookup` to read variables.
pub fn apply_env_overrides<F>(mut config: AppConfig, lookup: F) -> Result<AppConfig>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(title) = lookup("QUIZREPORT_TITLE") {
        config.title = title;
    }

    if let Some(enabled) = lookup("QUIZREPORT_REPORT_ENABLED") {
        config.report.enabled = parse_bool(&enabled)
            .with_context(|| format!("invalid QUIZREPORT_REPORT_ENABLED: '{enabled}'"))?;
    }

    if let Some(mode) = lookup("QUIZREPORT_REPORT_MODE") {
        config.report.mode = mode
            .parse()
            .map_err(|e: String| anyhow::anyhow!("{}", e))
            .with_context(|| format!("invalid QUIZREPORT_REPORT_MODE: '{mode}'"))?;
    }

    // A path on its own is enough to switch the report to a file.
    if let Some(path) = lookup("QUIZREPORT_OUTPUT_PATH") {
        config.report.output = OutputSettings::file(path);
    }

    Ok(config)
}

fn parse_bool(s: &str) -> Result<bool> {
    match s.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("expected a boolean, got '{other}'"),
    }
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizreport"))
}
