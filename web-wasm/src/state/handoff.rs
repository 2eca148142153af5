//! アップロード画面 → 検査画面の単発受け渡し

use aoi_common::{Handoff, HandoffSlot, Notice, StartAction, UploadCollector};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct HandoffStore(StoredValue<HandoffSlot>);

impl HandoffStore {
    pub fn new() -> Self {
        Self(StoredValue::new(HandoffSlot::new()))
    }

    /// 検査開始: 成功時のみ受け渡しを書き込む
    pub fn start(&self, collector: &UploadCollector) -> StartAction {
        self.0
            .try_update_value(|slot| collector.start_inspection(slot))
            .unwrap_or_else(|| {
                StartAction::Notify(Notice::warning(
                    "Inspection unavailable",
                    "Reload the page and try again",
                ))
            })
    }

    /// 検査画面の表示時に1度だけ取り出す
    pub fn take(&self) -> Option<Handoff> {
        self.0.try_update_value(HandoffSlot::take).flatten()
    }
}
