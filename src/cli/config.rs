use anyhow::{Context, Result, bail};
use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};

use nomina_common::SearchScope;

use crate::cli::args::CliArgs;

pub const CONFIG_FILE_NAME: &str = "nomina.json";

/// Deserialize a boolean that might be written as a string ("true"/"false").
fn deserialize_bool_or_string<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        String(String),
    }

    match Option::<BoolOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(BoolOrString::Bool(b)) => Ok(Some(b)),
        Some(BoolOrString::String(s)) => match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(Some(true)),
            "false" | "0" | "no" | "off" => Ok(Some(false)),
            _ => Err(Error::custom(format!(
                "invalid boolean value: '{}'. Expected true, false, 'true', or 'false'",
                s
            ))),
        },
    }
}

/// Contents of `nomina.json`.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NominaConfig {
    /// Index snapshot, relative to the config file.
    #[serde(default)]
    pub index: Option<PathBuf>,
    #[serde(default)]
    pub scope: Option<SearchScope>,
    #[serde(default)]
    pub max_chain_depth: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_bool_or_string")]
    pub case_sensitive: Option<bool>,
}

/// Settings after merging CLI flags over the config file over defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub index_path: PathBuf,
    pub scope: SearchScope,
    /// `None` walks every chain to its end; cycles still stop a walk.
    pub max_chain_depth: Option<u32>,
    pub case_sensitive: bool,
}

pub fn parse_config(source: &str) -> Result<NominaConfig> {
    serde_json::from_str(source).context("invalid nomina.json")
}

pub fn load_config(path: &Path) -> Result<NominaConfig> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    parse_config(&source)
        .with_context(|| format!("failed to parse config: {}", path.display()))
}

/// The config file to use: `--config` when given, else `nomina.json` in `cwd`
/// if it exists.
pub fn find_config(args: &CliArgs, cwd: &Path) -> Option<PathBuf> {
    if let Some(path) = &args.config {
        return Some(cwd.join(path));
    }
    let candidate = cwd.join(CONFIG_FILE_NAME);
    candidate.is_file().then_some(candidate)
}

/// Merge CLI flags over `config`. `config_dir` anchors a relative `index`
/// path from the config file; `--index` is taken relative to `cwd`.
pub fn resolve_options(
    args: &CliArgs,
    config: &NominaConfig,
    config_dir: &Path,
    cwd: &Path,
) -> Result<ResolvedOptions> {
    let index_path = match (&args.index, &config.index) {
        (Some(path), _) => cwd.join(path),
        (None, Some(path)) => config_dir.join(path),
        (None, None) => {
            bail!("no index snapshot given; pass --index or set \"index\" in {CONFIG_FILE_NAME}")
        }
    };

    let case_sensitive = if args.ignore_case {
        false
    } else {
        config.case_sensitive.unwrap_or(true)
    };

    Ok(ResolvedOptions {
        index_path,
        scope: args
            .scope
            .map(SearchScope::from)
            .or(config.scope)
            .unwrap_or_default(),
        max_chain_depth: args.max_chain_depth.or(config.max_chain_depth),
        case_sensitive,
    })
}

/// Locate, load and merge configuration for one invocation.
pub fn load_options(args: &CliArgs, cwd: &Path) -> Result<ResolvedOptions> {
    let Some(path) = find_config(args, cwd) else {
        return resolve_options(args, &NominaConfig::default(), cwd, cwd);
    };
    let config = load_config(&path)?;
    let config_dir = path.parent().unwrap_or(cwd);
    resolve_options(args, &config, config_dir, cwd)
}
