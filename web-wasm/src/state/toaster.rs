//! トースト通知

use aoi_common::Notice;
use leptos::prelude::*;
use std::time::Duration;

const TOAST_DURATION: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn toasts(&self) -> Signal<Vec<Toast>> {
        self.toasts.into()
    }

    /// 通知を表示し、一定時間後に自動で閉じる
    pub fn push(&self, notice: Notice) {
        let Some(id) = self.next_id.try_update_value(|next| {
            *next += 1;
            *next
        }) else {
            return;
        };

        gloo::console::log!(format!("[{}] {}: {}", notice.level.as_str(), notice.title, notice.description));
        self.toasts.update(|toasts| toasts.push(Toast { id, notice }));

        let this = *self;
        set_timeout(move || this.dismiss(id), TOAST_DURATION);
    }

    pub fn dismiss(&self, id: u64) {
        // 画面破棄後のタイムアウトでも安全に無視する
        self.toasts.try_update(|toasts| toasts.retain(|toast| toast.id != id));
    }
}
