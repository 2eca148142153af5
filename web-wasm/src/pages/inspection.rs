//! 検査画面
//!
//! 表示時にシーケンサを新規作成して開始し、周期タイマーでtickする。
//! タイマーは完了時と画面破棄時に必ず解除する。

use aoi_common::{Phase, Sequencer};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::{
    conveyor_belt::ConveyorBelt, header::Header, results_table::ResultsTable,
    summary_panel::SummaryPanel,
};
use crate::state::HandoffStore;

#[component]
pub fn InspectionPage() -> impl IntoView {
    let navigate = use_navigate();

    // 受け渡しは1度だけ読み出す（再生データ自体は固定のデモ用）
    let uploaded = expect_context::<HandoffStore>()
        .take()
        .map(|handoff| handoff.len())
        .unwrap_or(0);

    let sequencer = RwSignal::new(Sequencer::reference());
    let timer = StoredValue::new(None::<IntervalHandle>);

    let mut phase = Phase::Idle;
    sequencer.update(|s| phase = s.start());

    if needs_timer(phase) {
        let period = sequencer.with_untracked(Sequencer::tick_period);
        let started = set_interval_with_handle(
            move || {
                let mut control = TimerControl::Keep;
                sequencer.update(|s| control = advance(s));
                if control == TimerControl::Stop {
                    stop_timer(timer);
                }
            },
            period,
        );
        match started {
            Ok(handle) => timer.set_value(Some(handle)),
            Err(err) => gloo::console::error!(format!("failed to start inspection timer: {:?}", err)),
        }
    }

    on_cleanup(move || stop_timer(timer));

    let subtitle = Signal::derive(move || {
        if sequencer.with(Sequencer::is_playing) {
            "Inspection in Progress...".to_string()
        } else {
            "Inspection Complete".to_string()
        }
    });
    let slots = Signal::derive(move || sequencer.with(Sequencer::belt_slots));
    let slot_count = sequencer.with_untracked(Sequencer::slot_count);
    let summary = move || sequencer.with(Sequencer::summary);

    view! {
        <div class="container">
            <div class="inspection-header">
                <button class="btn btn-secondary" on:click=move |_| navigate("/", Default::default())>
                    "← Back to Upload"
                </button>
                <Header subtitle=subtitle />
                <div class="spacer" />
            </div>

            <Show when=move || { uploaded > 0 }>
                <p class="text-muted uploaded-count">
                    {format!("{} uploaded image(s) queued", uploaded)}
                </p>
            </Show>

            <section class="industrial-card">
                <h2>"Inspection System"</h2>
                <ConveyorBelt slots=slots slot_count=slot_count />
            </section>

            <section class="industrial-card">
                <h2>"Inspection Results"</h2>
                <ResultsTable sequencer=sequencer />
                {move || summary().map(|summary| view! { <SummaryPanel summary=summary /> })}
            </section>
        </div>
    }
}

/// tick後にタイマーを続けるか
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerControl {
    Keep,
    Stop,
}

/// 開始直後のフェーズからタイマーが必要か判定（空データセットは即完了）
fn needs_timer(phase: Phase) -> bool {
    phase == Phase::Running
}

fn advance(sequencer: &mut Sequencer) -> TimerControl {
    sequencer.tick();
    if sequencer.is_complete() {
        TimerControl::Stop
    } else {
        TimerControl::Keep
    }
}

/// 解除できるタイマー
trait ClearTimer {
    fn cancel(self);
}

impl ClearTimer for IntervalHandle {
    fn cancel(self) {
        self.clear();
    }
}

/// 保持中のタイマーを取り出して解除する。2回目以降は何もしない
fn clear_slot<H: ClearTimer>(slot: &mut Option<H>) -> bool {
    match slot.take() {
        Some(handle) => {
            handle.cancel();
            true
        }
        None => false,
    }
}

fn stop_timer(timer: StoredValue<Option<IntervalHandle>>) {
    timer.try_update_value(clear_slot);
}
