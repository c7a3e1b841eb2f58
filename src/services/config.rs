use serde::Deserialize;
use std::collections::HashSet;
use std::path::PathBuf;

use crate::cli::Cli;
use crate::domain::constants::{DEFAULT_DELAY_MS, DEFAULT_DELEGATE, DEFAULT_REGION};
use crate::domain::models::Caps;

/// Optional `~/.config/capwatch/config.toml`. Anything set here loses to an
/// explicit CLI flag and beats the built-in default.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub delegate: Option<String>,
    pub region: Option<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
    pub basecap: Option<u32>,
    pub endocap: Option<u32>,
    pub citcap: Option<u32>,
    pub delay_ms: Option<u64>,
}

pub fn load_config_file() -> anyhow::Result<ConfigFile> {
    let home = std::env::var("HOME")?;
    let path = PathBuf::from(home).join(".config/capwatch/config.toml");
    if !path.exists() {
        return Ok(ConfigFile::default());
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}

/// Immutable per-run configuration, resolved once and passed through every
/// stage.
#[derive(Debug)]
pub struct RunConfig {
    pub user: String,
    pub key: String,
    pub delegate: String,
    pub region: String,
    pub exclude: HashSet<String>,
    pub caps: Caps,
    pub delay_ms: u64,
    pub api_base: String,
    pub sheets_base: String,
    pub spreadsheet_id: String,
    pub sheet_range: String,
    pub json: bool,
    pub out_dir: PathBuf,
}

impl RunConfig {
    pub fn resolve(cli: &Cli, file: ConfigFile) -> Self {
        let defaults = Caps::default();
        let exclude_src = if cli.exclude.is_empty() {
            &file.exclude
        } else {
            &cli.exclude
        };
        let exclude: HashSet<String> = exclude_src.iter().map(|n| canonical_nation(n)).collect();
        Self {
            user: cli.user.clone(),
            key: cli.key.clone(),
            delegate: canonical_nation(
                cli.delegate
                    .as_deref()
                    .or(file.delegate.as_deref())
                    .unwrap_or(DEFAULT_DELEGATE),
            ),
            region: canonical_nation(
                cli.region
                    .as_deref()
                    .or(file.region.as_deref())
                    .unwrap_or(DEFAULT_REGION),
            ),
            exclude,
            caps: Caps {
                base: cli.basecap.or(file.basecap).unwrap_or(defaults.base),
                standard: cli.endocap.or(file.endocap).unwrap_or(defaults.standard),
                citizen: cli.citcap.or(file.citcap).unwrap_or(defaults.citizen),
            },
            delay_ms: cli
                .delay_ms
                .or(file.delay_ms)
                .unwrap_or(DEFAULT_DELAY_MS),
            api_base: cli.api_base.clone(),
            sheets_base: cli.sheets_base.clone(),
            spreadsheet_id: cli.spreadsheet_id.clone(),
            sheet_range: cli.sheet_range.clone(),
            json: cli.json,
            out_dir: cli.out_dir.clone(),
        }
    }
}

/// Canonical NationStates id form: trimmed, lowercase, underscores for
/// spaces. API payloads already use it; user input and roster cells may not.
pub fn canonical_nation(raw: &str) -> String {
    raw.trim().to_ascii_lowercase().replace(' ', "_")
}

#[cfg(test)]
mod tests {
    use super::{canonical_nation, ConfigFile, RunConfig};
    use crate::cli::Cli;
    use clap::Parser;

    #[test]
    fn cli_flags_beat_config_file_beat_defaults() {
        let cli = Cli::parse_from([
            "capwatch",
            "-u",
            "operator",
            "-k",
            "sheet-key",
            "-e",
            "30",
            "-x",
            "Vice Delegate",
            "violators",
        ]);
        let file = ConfigFile {
            delegate: Some("Some Other Del".to_string()),
            endocap: Some(99),
            citcap: Some(60),
            exclude: vec!["ignored_when_cli_set".to_string()],
            ..ConfigFile::default()
        };
        let cfg = RunConfig::resolve(&cli, file);

        assert_eq!(cfg.delegate, "some_other_del");
        assert_eq!(cfg.region, "europeia");
        assert_eq!(cfg.caps.base, 10);
        assert_eq!(cfg.caps.standard, 30);
        assert_eq!(cfg.caps.citizen, 60);
        assert!(cfg.exclude.contains("vice_delegate"));
        assert!(!cfg.exclude.contains("ignored_when_cli_set"));
        assert_eq!(cfg.delay_ms, 1000);
    }

    #[test]
    fn canonical_id_is_stable_for_display_names() {
        assert_eq!(canonical_nation("Le Libertia"), "le_libertia");
        assert_eq!(canonical_nation("  rand "), "rand");
        assert_eq!(canonical_nation("already_canonical"), "already_canonical");
    }

    #[test]
    fn config_file_fields_are_all_optional() {
        let cfg: ConfigFile = toml::from_str("").expect("empty config");
        assert!(cfg.delegate.is_none());
        assert!(cfg.exclude.is_empty());

        let cfg: ConfigFile = toml::from_str(
            r#"
            delegate = "Le Libertia"
            endocap = 30
            exclude = ["vd", "rsc"]
            "#,
        )
        .expect("partial config");
        assert_eq!(cfg.delegate.as_deref(), Some("Le Libertia"));
        assert_eq!(cfg.endocap, Some(30));
        assert_eq!(cfg.exclude, vec!["vd", "rsc"]);
        assert!(cfg.basecap.is_none());
    }
}
