//! アップロード画面

use aoi_common::{StartAction, UploadCollector, UploadedFile};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::{file_list::FileList, header::Header, upload_area::UploadArea};
use crate::state::{HandoffStore, Toaster};

#[component]
pub fn UploadPage() -> impl IntoView {
    let toaster = expect_context::<Toaster>();
    let handoff = expect_context::<HandoffStore>();
    let navigate = use_navigate();

    // 画面に入るたびに空から始める
    let collector = RwSignal::new(UploadCollector::new());
    let names = Signal::derive(move || collector.with(UploadCollector::names));

    let on_dropped = move |files: Vec<UploadedFile>| {
        let mut notice = None;
        collector.update(|c| notice = c.add_dropped(files));
        if let Some(notice) = notice {
            toaster.push(notice);
        }
    };

    let on_picked = move |files: Vec<UploadedFile>| {
        let mut notice = None;
        collector.update(|c| notice = Some(c.add_picked(files)));
        if let Some(notice) = notice {
            toaster.push(notice);
        }
    };

    let on_start = move |_| {
        match collector.with_untracked(|c| handoff.start(c)) {
            StartAction::Navigate => navigate("/inspection", Default::default()),
            StartAction::Notify(notice) => toaster.push(notice),
        }
    };

    view! {
        <div class="container">
            <Header subtitle="Upload PCB Images for Inspection".to_string() />
            <p class="intro text-muted">
                "Drag and drop your PCB images below or click to browse. Our advanced optical inspection "
                "system will analyze each board for defects and quality issues."
            </p>

            <UploadArea on_dropped=on_dropped on_picked=on_picked />

            <Show when=move || !names.with(Vec::is_empty)>
                <FileList names=names />
            </Show>

            <div class="start-row">
                <button class="btn btn-primary" on:click=on_start>
                    "Start Inspection"
                </button>
            </div>
        </div>
    }
}
