use instaclean_booking::{SlotGroup, TimeSlot};
use leptos::prelude::*;

/// AM/PM tabs of hourly slot buttons. Purely presentational; the wizard owns
/// the selection.
#[component]
pub fn TimeSlotPicker(
    #[prop(into)] selected: Signal<Option<TimeSlot>>,
    #[prop(into)] group: Signal<SlotGroup>,
    #[prop(into)] on_select: Callback<TimeSlot>,
    #[prop(into)] on_group: Callback<SlotGroup>,
) -> impl IntoView {
    view! {
        <div class="slot-picker">
            <div class="tabs-list" role="tablist">
                {SlotGroup::ALL
                    .into_iter()
                    .map(|g| {
                        view! {
                            <button
                                type="button"
                                role="tab"
                                class="tab-trigger"
                                class:active=move || group.get() == g
                                on:click=move |_| on_group.run(g)
                            >
                                {g.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            {move || {
                group
                    .get()
                    .slots()
                    .into_iter()
                    .map(|slot| {
                        view! {
                            <button
                                type="button"
                                class="slot-btn"
                                class:selected=move || selected.get() == Some(slot)
                                on:click=move |_| on_select.run(slot)
                            >
                                {slot.clock()}
                            </button>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
