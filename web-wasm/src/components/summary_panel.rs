//! 完了時の集計

use aoi_common::Summary;
use leptos::prelude::*;

#[component]
pub fn SummaryPanel(summary: Summary) -> impl IntoView {
    view! {
        <div class="summary-panel">
            <div>
                <div class="summary-value text-success">{summary.passed}</div>
                <div class="summary-label">"Passed"</div>
            </div>
            <div>
                <div class="summary-value text-destructive">{summary.failed}</div>
                <div class="summary-label">"Failed"</div>
            </div>
            <div>
                <div class="summary-value">{summary.total}</div>
                <div class="summary-label">"Total"</div>
            </div>
        </div>
    }
}
