use chrono::NaiveDate;
use instaclean_booking::{
    Field, FieldValue, SlotGroup, StepInput, TimeSlot, ValidationErrors, Wizard,
};
use leptos::prelude::*;

use crate::components::field_error::FieldErrorText;
use crate::components::time_slot_picker::TimeSlotPicker;
use crate::form::{today, tomorrow};

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Step 3: pick a day and an hourly slot. The slot goes straight into the
/// wizard, the date waits in the form until "Next".
#[component]
pub fn ScheduleStep(
    wizard: RwSignal<Wizard>,
    form: RwSignal<StepInput>,
    errors: RwSignal<ValidationErrors>,
) -> impl IntoView {
    let min_date = tomorrow(today()).format(DATE_INPUT_FORMAT).to_string();
    let date_value = move || {
        form.with(|f| {
            f.get(Field::Date)
                .and_then(FieldValue::as_date)
                .map(|d| d.format(DATE_INPUT_FORMAT).to_string())
                .unwrap_or_default()
        })
    };

    let set_date = move |raw: String| {
        let value = match NaiveDate::parse_from_str(&raw, DATE_INPUT_FORMAT) {
            Ok(date) => FieldValue::Date(date),
            Err(_) => FieldValue::text(""),
        };
        form.update(|f| f.set(Field::Date, value));
    };

    let selected = Signal::derive(move || wizard.with(|w| w.picker().current()));
    let group = Signal::derive(move || wizard.with(|w| w.picker().active_group()));

    view! {
        <div class="form-item">
            <label for="booking-date">"Date"</label>
            <input
                id="booking-date"
                type="date"
                class="input"
                min=min_date
                prop:value=date_value
                on:change=move |ev| set_date(event_target_value(&ev))
            />
            <FieldErrorText errors=errors field=Field::Date.key() />
        </div>
        <div class="form-item">
            <label>"Time"</label>
            <TimeSlotPicker
                selected=selected
                group=group
                on_select=move |slot: TimeSlot| {
                    wizard.update(|w| w.select_time_slot(slot));
                    errors.update(|e| e.clear_field(Field::Time.key()));
                }
                on_group=move |g: SlotGroup| wizard.update(|w| w.show_slot_group(g))
            />
            <FieldErrorText errors=errors field=Field::Time.key() />
        </div>
    }
}
