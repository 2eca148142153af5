//! アップロードエリアコンポーネント
//!
//! ドロップは画像のみ受け付ける（フィルタはコレクタ側）。クリックで隠しinputを開く。

use aoi_common::UploadedFile;
use leptos::html::Input;
use leptos::prelude::*;
use web_sys::{DragEvent, FileList, MouseEvent};

#[component]
pub fn UploadArea<FD, FP>(on_dropped: FD, on_picked: FP) -> impl IntoView
where
    FD: Fn(Vec<UploadedFile>) + 'static + Clone,
    FP: Fn(Vec<UploadedFile>) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let input_ref = NodeRef::<Input>::new();

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(false);

        if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
            on_dropped(to_uploaded_files(&files));
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_click = move |_: MouseEvent| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_change = move |ev: web_sys::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        if let Some(files) = input.files() {
            on_picked(to_uploaded_files(&files));
        }
        // 同じファイルを続けて選んでも change が発火するようにする
        input.set_value("");
    };

    view! {
        <div
            class=move || {
                if is_dragover.get() { "upload-zone dragover" } else { "upload-zone" }
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <div class="upload-icon">"📷"</div>
            <h3>
                {move || if is_dragover.get() { "Drop files here" } else { "Drag & drop files here" }}
            </h3>
            <p class="text-muted">
                "or " <span class="text-primary">"click to browse"</span>
            </p>
            <div class="upload-hints text-muted">
                <p>"Supported formats: JPG, PNG, WEBP"</p>
                <p>"Maximum file size: 20MB per image"</p>
            </div>
            <input
                node_ref=input_ref
                type="file"
                accept="image/*"
                multiple=true
                class="hidden"
                on:click=|ev: MouseEvent| ev.stop_propagation()
                on:change=on_change
            />
        </div>
    }
}

fn to_uploaded_files(files: &FileList) -> Vec<UploadedFile> {
    (0..files.length())
        .filter_map(|i| files.get(i))
        .map(|file| UploadedFile::new(file.name(), file.type_(), file.size() as u64))
        .collect()
}
