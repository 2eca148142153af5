//! 検査データセット
//!
//! 再生対象となる検査結果の順序付きリスト。構築時に検証し、以後は変更しない。

use crate::error::{Error, Result};
use crate::types::{InspectionRecord, Verdict, NO_DEFECT};
use std::collections::HashSet;

/// 検証済みの検査結果リスト
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<InspectionRecord>,
}

impl Dataset {
    /// レコードを検証してデータセットを構築
    pub fn new(records: Vec<InspectionRecord>) -> Result<Self> {
        let mut seen = HashSet::new();
        for record in &records {
            validate_record(record)?;
            if !seen.insert(record.board_id.as_str()) {
                return Err(Error::DuplicateBoard(record.board_id.clone()));
            }
        }
        Ok(Self { records })
    }

    /// デモ用の参照データ（5件: PASS 2 / FAIL 3）
    pub fn reference() -> Self {
        Self {
            records: vec![
                InspectionRecord::pass("PCB-001", 98.5),
                InspectionRecord::fail("PCB-002", "Solder Bridge", 94.2),
                InspectionRecord::fail("PCB-003", "Missing Component", 96.8),
                InspectionRecord::pass("PCB-004", 99.1),
                InspectionRecord::fail("PCB-005", "Cold Joint", 87.3),
            ],
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// JSON配列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<InspectionRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&InspectionRecord> {
        self.records.get(index)
    }

    pub fn records(&self) -> &[InspectionRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, InspectionRecord> {
        self.records.iter()
    }
}

fn validate_record(record: &InspectionRecord) -> Result<()> {
    if record.board_id.trim().is_empty() {
        return Err(Error::InvalidRecord("board id is empty".into()));
    }
    if !record.confidence.is_finite() || !(0.0..=100.0).contains(&record.confidence) {
        return Err(Error::InvalidRecord(format!(
            "{}: confidence {} is outside 0-100",
            record.board_id, record.confidence
        )));
    }
    match record.verdict {
        Verdict::Pass if record.defect_label != NO_DEFECT => Err(Error::InvalidRecord(format!(
            "{}: PASS record must have defect label \"{}\"",
            record.board_id, NO_DEFECT
        ))),
        Verdict::Fail if record.defect_label.trim().is_empty() || record.defect_label == NO_DEFECT => {
            Err(Error::InvalidRecord(format!(
                "{}: FAIL record needs a defect label",
                record.board_id
            )))
        }
        _ => Ok(()),
    }
}
