//! 表示用モデル（CLI/WASM共通）

use crate::types::{InspectionRecord, Verdict};

/// ベルトアニメーションのスロット間隔（秒）
pub const SLOT_ANIMATION_STAGGER_SECS: f32 = 2.67;

/// 結果テーブル行のアニメーション間隔（秒）
pub const ROW_ANIMATION_STAGGER_SECS: f32 = 0.1;

/// サンプル基板画像（ベルト上の装飾用）
pub const SAMPLE_BOARD_IMAGES: [&str; 3] = [
    "/assets/pcb-sample-1.svg",
    "/assets/pcb-sample-2.svg",
    "/assets/pcb-sample-3.svg",
];

/// プレースホルダ行のセル表記
pub const PLACEHOLDER_CELL: &str = "---";
pub const PLACEHOLDER_STATUS: &str = "Inspecting...";

/// 結果テーブルの1行
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TableRow<'a> {
    Revealed(&'a InspectionRecord),
    Pending,
}

impl TableRow<'_> {
    /// 表示セル (PCB ID, Status, Defect Type, Confidence)
    pub fn cells(&self) -> [String; 4] {
        match self {
            TableRow::Revealed(record) => [
                record.board_id.clone(),
                record.verdict.to_string(),
                record.defect_label.clone(),
                record.confidence_label(),
            ],
            TableRow::Pending => [
                PLACEHOLDER_CELL.to_string(),
                PLACEHOLDER_STATUS.to_string(),
                PLACEHOLDER_CELL.to_string(),
                PLACEHOLDER_CELL.to_string(),
            ],
        }
    }
}

/// ベルト上の表示スロット
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeltSlot {
    pub index: usize,
    pub flash: Option<Verdict>,
    pub animation_delay_secs: f32,
}

impl BeltSlot {
    pub fn new(index: usize, flash: Option<Verdict>) -> Self {
        Self {
            index,
            flash,
            animation_delay_secs: index as f32 * SLOT_ANIMATION_STAGGER_SECS,
        }
    }

    /// スロットに対応するサンプル画像（スロット数が画像数を超えたら循環）
    pub fn image(&self) -> &'static str {
        SAMPLE_BOARD_IMAGES[self.index % SAMPLE_BOARD_IMAGES.len()]
    }

    pub fn class(&self) -> String {
        match self.flash {
            Some(verdict) => format!("pcb-item {}", verdict.flash_class()),
            None => "pcb-item".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revealed_row_cells() {
        let record = InspectionRecord::fail("PCB-003", "Missing Component", 96.8);
        let cells = TableRow::Revealed(&record).cells();
        assert_eq!(cells, ["PCB-003", "FAIL", "Missing Component", "96.8%"]);
    }

    #[test]
    fn test_pending_row_cells() {
        assert_eq!(TableRow::Pending.cells(), ["---", "Inspecting...", "---", "---"]);
    }

    #[test]
    fn test_belt_slot_class() {
        assert_eq!(BeltSlot::new(0, None).class(), "pcb-item");
        assert_eq!(BeltSlot::new(1, Some(Verdict::Fail)).class(), "pcb-item flash-fail");
    }

    #[test]
    fn test_belt_slot_image_wraps() {
        assert_eq!(BeltSlot::new(0, None).image(), SAMPLE_BOARD_IMAGES[0]);
        assert_eq!(BeltSlot::new(4, None).image(), SAMPLE_BOARD_IMAGES[1]);
    }

    #[test]
    fn test_belt_slot_delay() {
        let slot = BeltSlot::new(2, None);
        assert!((slot.animation_delay_secs - 5.34).abs() < 1e-4);
    }
}
