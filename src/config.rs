use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

const APP_DIR: &str = "artistsort";
const CONFIG_FILE: &str = "config.json";
const ENV_PREFIX: &str = "ARTISTSORT_";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// What to do with artists that only have one album folder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SingleAlbumPolicy {
    /// Prompt with the choice menu.
    #[default]
    Ask,
    /// Move every album into an artist folder.
    #[serde(alias = "all")]
    MoveAll,
    /// Leave single-album artists where they are.
    #[serde(alias = "multi")]
    KeepSingles,
}

impl SingleAlbumPolicy {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "ask" => Some(Self::Ask),
            "all" | "moveall" => Some(Self::MoveAll),
            "multi" | "keepsingles" => Some(Self::KeepSingles),
            _ => None,
        }
    }
}

/// Runtime settings: defaults, then the config file, then `ARTISTSORT_*` env vars.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub output: OutputFormat,
    pub quiet: bool,
    pub verbose: bool,
    /// Preview the plan without moving anything.
    pub dry_run: bool,
    /// Skip the "Proceed with moving folders?" confirmation.
    pub assume_yes: bool,
    pub single_albums: SingleAlbumPolicy,
    /// Wait for a key press before exiting (the window stays open when the
    /// program was started by dropping a folder onto it).
    pub wait_for_key: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output: OutputFormat::Text,
            quiet: false,
            verbose: false,
            dry_run: false,
            assume_yes: false,
            single_albums: SingleAlbumPolicy::Ask,
            wait_for_key: true,
        }
    }
}

/// Subset of settings the logger needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogConfig {
    pub format: OutputFormat,
    pub quiet: bool,
    pub verbose: bool,
}

impl Settings {
    /// `<config dir>/artistsort/config.json`, if the platform has a config dir.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load from the user's config file and the process environment.
    pub fn load() -> anyhow::Result<Self> {
        let file = match Self::config_path() {
            Some(path) if path.exists() => Some(
                fs::read_to_string(&path)
                    .with_context(|| format!("reading config file {}", path.display()))?,
            ),
            _ => None,
        };
        Self::from_sources(file.as_deref(), |key| std::env::var(key).ok())
    }

    /// Layer an optional config file body and an environment lookup over the defaults.
    pub fn from_sources<F>(file: Option<&str>, env: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = match file {
            Some(text) if !text.trim().is_empty() => {
                serde_json::from_str(text).context("parsing config file")?
            }
            _ => Self::default(),
        };

        let var = |name: &str| env(&format!("{ENV_PREFIX}{name}"));

        if let Some(value) = var("OUTPUT") {
            settings.output = match value.trim().to_lowercase().as_str() {
                "json" => OutputFormat::Json,
                "text" => OutputFormat::Text,
                other => anyhow::bail!("{ENV_PREFIX}OUTPUT must be text or json, got {other:?}"),
            };
        }
        if let Some(value) = var("SINGLE_ALBUMS") {
            settings.single_albums = SingleAlbumPolicy::parse(&value).with_context(|| {
                format!("{ENV_PREFIX}SINGLE_ALBUMS must be ask, all or multi, got {value:?}")
            })?;
        }

        let flags: [(&str, &mut bool); 5] = [
            ("QUIET", &mut settings.quiet),
            ("VERBOSE", &mut settings.verbose),
            ("DRY_RUN", &mut settings.dry_run),
            ("ASSUME_YES", &mut settings.assume_yes),
            ("WAIT", &mut settings.wait_for_key),
        ];
        for (name, slot) in flags {
            if let Some(value) = var(name) {
                *slot = parse_bool(&value)
                    .with_context(|| format!("{ENV_PREFIX}{name} must be a boolean, got {value:?}"))?;
            }
        }

        Ok(settings)
    }

    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            format: self.output,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
