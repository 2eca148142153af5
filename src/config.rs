use crate::error::{InspectorError, Result};
use aoi_common::sequencer::{DEFAULT_SLOT_COUNT, DEFAULT_TICK_PERIOD};
use aoi_common::{Dataset, SequencerConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// tick周期を上書きする環境変数
pub const PERIOD_ENV: &str = "AOI_INSPECTOR_PERIOD_MS";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub period_ms: u64,
    pub slot_count: usize,
    /// 再生データセット（未指定なら参照データ）
    pub dataset: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            period_ms: DEFAULT_TICK_PERIOD.as_millis() as u64,
            slot_count: DEFAULT_SLOT_COUNT,
            dataset: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 読み込めなければ既定値で続行（設定を修正するコマンド用）
    pub fn load_or_default() -> Result<Self> {
        Ok(Self::load_or_default_from(&Self::config_path()?))
    }

    pub fn load_or_default_from(config_path: &Path) -> Self {
        Self::load_from(config_path).unwrap_or_else(|err| {
            tracing::warn!(path = %config_path.display(), error = %err, "config unreadable, using defaults");
            Self::default()
        })
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| InspectorError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("aoi-inspector").join("config.json"))
    }

    /// tick周期（環境変数を優先）
    pub fn period(&self) -> Result<Duration> {
        let millis = match std::env::var(PERIOD_ENV) {
            Ok(raw) => raw.trim().parse::<u64>().map_err(|_| {
                InspectorError::Config(format!("{PERIOD_ENV} must be milliseconds, got {raw:?}"))
            })?,
            Err(_) => self.period_ms,
        };
        Ok(Duration::from_millis(millis))
    }

    /// CLI引数で上書きしたシーケンサ設定
    pub fn sequencer_config(
        &self,
        period_ms: Option<u64>,
        slot_count: Option<usize>,
    ) -> Result<SequencerConfig> {
        let tick_period = match period_ms {
            Some(ms) => Duration::from_millis(ms),
            None => self.period()?,
        };
        let config = SequencerConfig {
            tick_period,
            slot_count: slot_count.unwrap_or(self.slot_count),
        };
        config.validate()?;
        Ok(config)
    }

    /// 保存する値そのものを検証（環境変数・CLI引数は見ない）
    pub fn validate(&self) -> Result<()> {
        SequencerConfig {
            tick_period: Duration::from_millis(self.period_ms),
            slot_count: self.slot_count,
        }
        .validate()?;
        Ok(())
    }

    /// 再生データセットを解決（引数 > 設定 > 参照データ）
    pub fn resolve_dataset(&self, override_path: Option<&Path>) -> Result<Dataset> {
        match override_path.or(self.dataset.as_deref()) {
            Some(path) => load_dataset(path),
            None => Ok(Dataset::reference()),
        }
    }
}

pub fn load_dataset(path: &Path) -> Result<Dataset> {
    if !path.exists() {
        return Err(InspectorError::PathNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    Ok(Dataset::from_json(&content)?)
}
