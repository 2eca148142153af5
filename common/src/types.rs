//! 検査結果の型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - Verdict: 合否判定
//! - InspectionRecord: 1基板分の検査結果（生成後は不変）

use serde::{Deserialize, Serialize};
use std::fmt;

/// 欠陥なしを表すラベル
pub const NO_DEFECT: &str = "None";

/// 合否判定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Pass => "PASS",
            Verdict::Fail => "FAIL",
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }

    /// 結果テーブル行のCSSクラス
    pub fn row_class(&self) -> &'static str {
        match self {
            Verdict::Pass => "status-pass",
            Verdict::Fail => "status-fail",
        }
    }

    /// ベルト上スロットのフラッシュ用CSSクラス
    pub fn flash_class(&self) -> &'static str {
        match self {
            Verdict::Pass => "flash-pass",
            Verdict::Fail => "flash-fail",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 1基板分の検査結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectionRecord {
    pub board_id: String,
    pub verdict: Verdict,
    pub defect_label: String,
    /// 信頼度 (0-100)
    pub confidence: f32,
}

impl InspectionRecord {
    pub fn pass(board_id: impl Into<String>, confidence: f32) -> Self {
        Self {
            board_id: board_id.into(),
            verdict: Verdict::Pass,
            defect_label: NO_DEFECT.to_string(),
            confidence,
        }
    }

    pub fn fail(board_id: impl Into<String>, defect_label: impl Into<String>, confidence: f32) -> Self {
        Self {
            board_id: board_id.into(),
            verdict: Verdict::Fail,
            defect_label: defect_label.into(),
            confidence,
        }
    }

    /// 表示用の信頼度 ("98.5%")
    pub fn confidence_label(&self) -> String {
        format!("{}%", self.confidence)
    }
}
