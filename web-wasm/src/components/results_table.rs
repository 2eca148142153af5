//! 検査結果テーブル
//!
//! 公開済み行 + 再生中のプレースホルダ行。

use aoi_common::view::ROW_ANIMATION_STAGGER_SECS;
use aoi_common::{Sequencer, TableRow, Verdict};
use leptos::prelude::*;

/// 描画用に所有権を持たせた行
#[derive(Debug, Clone, PartialEq)]
struct RowItem {
    key: String,
    cells: [String; 4],
    verdict: Option<Verdict>,
    delay_secs: f32,
}

fn row_items(sequencer: &Sequencer) -> Vec<RowItem> {
    sequencer
        .table_rows()
        .iter()
        .enumerate()
        .map(|(index, row)| match row {
            TableRow::Revealed(record) => RowItem {
                key: record.board_id.clone(),
                cells: row.cells(),
                verdict: Some(record.verdict),
                delay_secs: index as f32 * ROW_ANIMATION_STAGGER_SECS,
            },
            TableRow::Pending => RowItem {
                key: format!("pending-{}", index),
                cells: row.cells(),
                verdict: None,
                delay_secs: 0.0,
            },
        })
        .collect()
}

#[component]
pub fn ResultsTable(sequencer: RwSignal<Sequencer>) -> impl IntoView {
    view! {
        <div class="table-scroll">
            <table class="results-table">
                <thead>
                    <tr>
                        <th>"PCB ID"</th>
                        <th>"Status"</th>
                        <th>"Defect Type"</th>
                        <th>"Confidence"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || sequencer.with(row_items)
                        key=|row| row.key.clone()
                        children=|row| {
                            let [id, status, defect, confidence] = row.cells;
                            match row.verdict {
                                Some(verdict) => {
                                    let status_class = if verdict.is_pass() { "text-success" } else { "text-destructive" };
                                    view! {
                                        <tr
                                            class=format!("{} animate-fade-in-up", verdict.row_class())
                                            style=format!("animation-delay: {}s", row.delay_secs)
                                        >
                                            <td class="cell-id">{id}</td>
                                            <td><span class=status_class>{status}</span></td>
                                            <td>{defect}</td>
                                            <td>{confidence}</td>
                                        </tr>
                                    }
                                    .into_any()
                                }
                                None => view! {
                                    <tr class="row-pending">
                                        <td>{id}</td>
                                        <td>{status}</td>
                                        <td>{defect}</td>
                                        <td>{confidence}</td>
                                    </tr>
                                }
                                .into_any(),
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
