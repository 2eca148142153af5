//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header(#[prop(into)] subtitle: Signal<String>) -> impl IntoView {
    view! {
        <header class="header">
            <h1>"AOI Inspector"</h1>
            <p class="subtitle">{move || subtitle.get()}</p>
        </header>
    }
}
