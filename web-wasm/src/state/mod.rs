//! 画面をまたぐ状態（コンテキストで提供）

mod handoff;
mod toaster;

pub use handoff::HandoffStore;
pub use toaster::{Toast, Toaster};
