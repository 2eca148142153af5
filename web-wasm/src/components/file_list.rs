//! アップロード済みファイル一覧

use leptos::prelude::*;

#[component]
pub fn FileList(#[prop(into)] names: Signal<Vec<String>>) -> impl IntoView {
    view! {
        <div class="industrial-card file-list">
            <h3>{move || format!("✔ Uploaded Files ({})", names.with(Vec::len))}</h3>
            <div class="file-grid">
                // 重複を許すため位置をキーにする
                <For
                    each=move || names.get().into_iter().enumerate()
                    key=|(index, name)| (*index, name.clone())
                    children=|(_, name)| {
                        view! {
                            <div class="file-item">
                                <span class="file-icon">"🖼"</span>
                                <span class="file-name">{name}</span>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
