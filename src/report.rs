//! 実行結果レポート（JSON）

use crate::error::Result;
use aoi_common::{Handoff, InspectionRecord, Sequencer, Summary};
use chrono::{DateTime, Local, SecondsFormat};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub started_at: String,
    pub finished_at: String,
    pub file_names: Vec<String>,
    pub records: Vec<InspectionRecord>,
    pub summary: Summary,
}

impl RunReport {
    /// 完了（またはキャンセル）時点のシーケンサから作成
    pub fn new(handoff: Handoff, sequencer: &Sequencer, started_at: DateTime<Local>) -> Self {
        Self {
            started_at: started_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            finished_at: Local::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            file_names: handoff.into_file_names(),
            records: sequencer.revealed().to_vec(),
            summary: sequencer.tally(),
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
