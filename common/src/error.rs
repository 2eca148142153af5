//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("No files selected: upload PCB images before starting inspection")]
    NoFilesSelected,

    #[error("Invalid inspection record: {0}")]
    InvalidRecord(String),

    #[error("Duplicate board id in dataset: {0}")]
    DuplicateBoard(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
