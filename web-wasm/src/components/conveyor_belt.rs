//! コンベアベルト（装飾アニメーション + 判定フラッシュ）

use aoi_common::BeltSlot;
use leptos::prelude::*;

#[component]
pub fn ConveyorBelt(
    #[prop(into)] slots: Signal<Vec<BeltSlot>>,
    slot_count: usize,
) -> impl IntoView {
    // スロット数は固定。クラスのみ反応的に切り替える
    let items = (0..slot_count)
        .map(|index| {
            let initial = BeltSlot::new(index, None);
            let style = format!(
                "animation-delay: {}s; background-image: url({}); background-size: cover; background-position: center;",
                initial.animation_delay_secs,
                initial.image()
            );
            let class = move || {
                slots.with(|slots| {
                    slots
                        .get(index)
                        .map(BeltSlot::class)
                        .unwrap_or_else(|| initial.class())
                })
            };
            view! { <div class=class style=style /> }
        })
        .collect_view();

    view! {
        <div class="belt-frame">
            <div class="inspection-camera">"📷"</div>
            <div class="conveyor-belt">{items}</div>
            <div class="belt-supports">
                <div class="belt-support" />
                <div class="belt-support" />
            </div>
        </div>
    }
}
