use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Text-decoding policy for source files without a byte-order mark:
/// candidates are tried strictly in order, the fallback decodes lossily
/// when none of them fit the whole file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodeConfig {
    pub candidates: Vec<String>,
    pub fallback: String,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            candidates: vec![
                "utf-8".to_string(),
                "shift_jis".to_string(),
                "euc-jp".to_string(),
            ],
            fallback: "utf-8".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RollConfig {
    pub decode: DecodeConfig,
}

#[derive(Debug, Clone, Deserialize, Default)]
struct PartialRollConfig {
    decode: Option<DecodeConfig>,
}

fn env_or_string(var: &str, fallback: &str) -> String {
    match env::var(var) {
        Ok(v) if !v.trim().is_empty() => v.trim().to_string(),
        _ => fallback.to_string(),
    }
}

fn env_or_csv_list(var: &str, fallback: &[String]) -> Vec<String> {
    match env::var(var) {
        Ok(v) => {
            let out = v
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(ToOwned::to_owned)
                .collect::<Vec<_>>();
            if out.is_empty() { fallback.to_vec() } else { out }
        }
        Err(_) => fallback.to_vec(),
    }
}

fn validate(cfg: &RollConfig) -> Result<()> {
    if cfg.decode.candidates.is_empty() {
        return Err(anyhow!(
            "invalid decode candidates: at least one encoding label is required"
        ));
    }
    for label in &cfg.decode.candidates {
        if encoding_rs::Encoding::for_label(label.as_bytes()).is_none() {
            return Err(anyhow!("unknown decode candidate encoding label: {label}"));
        }
    }
    if encoding_rs::Encoding::for_label(cfg.decode.fallback.as_bytes()).is_none() {
        return Err(anyhow!(
            "unknown decode fallback encoding label: {}",
            cfg.decode.fallback
        ));
    }
    Ok(())
}

fn resolve_config_path(root: &Path) -> Option<PathBuf> {
    if let Ok(custom) = env::var("MONTHROLL_CONFIG_PATH") {
        let trimmed = custom.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    Some(root.join("monthroll.toml"))
}

fn merge_file_config(base: &mut RollConfig, root: &Path) -> Result<()> {
    let Some(path) = resolve_config_path(root) else {
        return Ok(());
    };
    if !path.exists() {
        return Ok(());
    }

    let raw = fs::read_to_string(&path)?;
    let parsed: PartialRollConfig = toml::from_str(&raw)
        .map_err(|err| anyhow!("failed to parse config {}: {err}", path.display()))?;
    if let Some(decode) = parsed.decode {
        base.decode = decode;
    }
    Ok(())
}

pub fn load_config(root: &Path) -> Result<RollConfig> {
    let mut cfg = RollConfig::default();
    merge_file_config(&mut cfg, root)?;

    cfg.decode.candidates = env_or_csv_list("MONTHROLL_DECODE_CANDIDATES", &cfg.decode.candidates);
    cfg.decode.fallback = env_or_string("MONTHROLL_DECODE_FALLBACK", &cfg.decode.fallback);

    validate(&cfg)?;
    Ok(cfg)
}
