//! トースト表示領域

use leptos::prelude::*;
use crate::state::Toaster;

#[component]
pub fn ToastViewport() -> impl IntoView {
    let toaster = expect_context::<Toaster>();

    view! {
        <div class="toast-viewport">
            <For
                each=move || toaster.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=format!("toast toast-{}", toast.notice.level.as_str())
                            on:click=move |_| toaster.dismiss(id)
                        >
                            <p class="toast-title">{toast.notice.title}</p>
                            <p class="toast-description">{toast.notice.description}</p>
                        </div>
                    }
                }
            />
        </div>
    }
}
