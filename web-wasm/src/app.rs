//! メインアプリケーションコンポーネント
//!
//! `/` アップロード画面と `/inspection` 検査画面のルーティング。

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::toast::ToastViewport;
use crate::pages::{inspection::InspectionPage, upload::UploadPage};
use crate::state::{HandoffStore, Toaster};

#[component]
pub fn App() -> impl IntoView {
    // 画面間で共有するのは受け渡し口と通知のみ
    provide_context(HandoffStore::new());
    provide_context(Toaster::new());

    view! {
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <p class="text-muted">"Page not found"</p> }>
                    <Route path=path!("/") view=UploadPage />
                    <Route path=path!("/inspection") view=InspectionPage />
                </Routes>
            </main>
            <ToastViewport />
        </Router>
    }
}
