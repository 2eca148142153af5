//! 画面間の受け渡し
//!
//! アップロード画面から検査画面へファイル名のみを渡す単発のメッセージ。
//! `HandoffSlot` は書き込み1回・読み出し1回の受け渡し口。

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// アップロード済みファイル名の順序付きリスト
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Handoff {
    file_names: Vec<String>,
}

impl Handoff {
    pub fn new(file_names: Vec<String>) -> Self {
        Self { file_names }
    }

    pub fn file_names(&self) -> &[String] {
        &self.file_names
    }

    pub fn into_file_names(self) -> Vec<String> {
        self.file_names
    }

    pub fn len(&self) -> usize {
        self.file_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.file_names.is_empty()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// 単発の受け渡し口
#[derive(Debug, Default)]
pub struct HandoffSlot {
    pending: Option<Handoff>,
}

impl HandoffSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// 受け渡しを書き込む。未読の前回分があれば置き換えて返す
    pub fn put(&mut self, handoff: Handoff) -> Option<Handoff> {
        self.pending.replace(handoff)
    }

    /// 受け渡しを取り出す（2回目以降は None）
    pub fn take(&mut self) -> Option<Handoff> {
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
