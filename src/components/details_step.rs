use instaclean_booking::schema::{BusinessType, FloorType, ADD_ONS};
use instaclean_booking::{Field, FieldValue, ServiceType, StepInput, ValidationErrors};
use leptos::prelude::*;

use crate::components::counter_input::CounterInput;
use crate::components::field_error::FieldErrorText;
use crate::form::{count_of, flag_of, text_of, DEFAULT_FOOT_TRAFFIC};

/// Step 2. What it asks depends on the service type chosen in step 1.
#[component]
pub fn DetailsStep(
    service: Option<ServiceType>,
    form: RwSignal<StepInput>,
    errors: RwSignal<ValidationErrors>,
) -> impl IntoView {
    match service {
        Some(ServiceType::Home) | Some(ServiceType::Airbnb) => view! {
            <RoomCounters form=form errors=errors />
            <AddOnList form=form />
        }
        .into_any(),
        Some(ServiceType::Business) => view! {
            <SquareFootage form=form errors=errors />
            <CountField form=form errors=errors field=Field::WashroomStalls />
            <div class="select-row">
                <ChoiceField form=form errors=errors field=Field::BusinessType options=business_options() />
                <ChoiceField form=form errors=errors field=Field::FloorType options=floor_options() />
            </div>
            <FootTraffic form=form errors=errors />
        }
        .into_any(),
        Some(ServiceType::PostConstruction) => view! {
            <SquareFootage form=form errors=errors />
            <ChoiceField form=form errors=errors field=Field::FloorType options=floor_options() />
            <RoomCounters form=form errors=errors />
        }
        .into_any(),
        None => view! { <p class="step-hint">"Select a service type first."</p> }.into_any(),
    }
}

fn business_options() -> Vec<(&'static str, &'static str)> {
    BusinessType::KEYS
        .iter()
        .filter_map(|k| BusinessType::from_key(k).map(|b| (*k, b.label())))
        .collect()
}

fn floor_options() -> Vec<(&'static str, &'static str)> {
    FloorType::KEYS
        .iter()
        .filter_map(|k| FloorType::from_key(k).map(|f| (*k, f.label())))
        .collect()
}

fn set_field(form: RwSignal<StepInput>, field: Field, value: FieldValue) {
    form.update(|f| f.set(field, value));
}

#[component]
fn CountField(
    form: RwSignal<StepInput>,
    errors: RwSignal<ValidationErrors>,
    field: Field,
) -> impl IntoView {
    view! {
        <div class="form-item">
            <CounterInput
                label=field.label()
                value=Signal::derive(move || form.with(|f| count_of(f, field)))
                on_change=move |n: u32| set_field(form, field, FieldValue::Count(n))
            />
            <FieldErrorText errors=errors field=field.key() />
        </div>
    }
}

#[component]
fn RoomCounters(form: RwSignal<StepInput>, errors: RwSignal<ValidationErrors>) -> impl IntoView {
    view! {
        <CountField form=form errors=errors field=Field::Rooms />
        <CountField form=form errors=errors field=Field::Bathrooms />
    }
}

#[component]
fn AddOnList(form: RwSignal<StepInput>) -> impl IntoView {
    view! {
        <h3 class="section-heading">"Additional Services"</h3>
        <ul class="add-on-list">
            {ADD_ONS
                .iter()
                .map(|add_on| {
                    let field = add_on.field;
                    let id = field.key();
                    view! {
                        <li class="add-on-row">
                            <label class="add-on-label" for=id>
                                <input
                                    type="checkbox"
                                    id=id
                                    prop:checked=move || form.with(|f| flag_of(f, field))
                                    on:change=move |ev| {
                                        set_field(form, field, FieldValue::Flag(checkbox_checked(&ev)))
                                    }
                                />
                                {add_on.name}
                            </label>
                            <span class="add-on-time">{add_on.time_label()}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

#[component]
fn SquareFootage(form: RwSignal<StepInput>, errors: RwSignal<ValidationErrors>) -> impl IntoView {
    let field = Field::OfficeSquareFootage;
    view! {
        <div class="form-item">
            <label for="square-footage">"Approximate Square Footage"</label>
            <input
                id="square-footage"
                class="input"
                inputmode="numeric"
                placeholder="Square footage"
                prop:value=move || form.with(|f| text_of(f, field))
                on:input=move |ev| set_field(form, field, FieldValue::text(event_target_value(&ev)))
            />
            <FieldErrorText errors=errors field=field.key() />
        </div>
    }
}

#[component]
fn ChoiceField(
    form: RwSignal<StepInput>,
    errors: RwSignal<ValidationErrors>,
    field: Field,
    options: Vec<(&'static str, &'static str)>,
) -> impl IntoView {
    let id = field.key();
    view! {
        <div class="form-item">
            <label for=id>{field.label()}</label>
            <select
                id=id
                class="select"
                on:change=move |ev| set_field(form, field, FieldValue::text(event_target_value(&ev)))
            >
                {options
                    .into_iter()
                    .map(|(key, label)| {
                        view! {
                            <option
                                value=key
                                selected=move || form.with(|f| text_of(f, field) == key)
                            >
                                {label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <FieldErrorText errors=errors field=id />
        </div>
    }
}

#[component]
fn FootTraffic(form: RwSignal<StepInput>, errors: RwSignal<ValidationErrors>) -> impl IntoView {
    let field = Field::FootTraffic;
    let value = move || {
        form.with(|f| f.get(field).and_then(FieldValue::as_count))
            .unwrap_or(DEFAULT_FOOT_TRAFFIC)
    };

    view! {
        <div class="form-item">
            <label for="foot-traffic">
                "Foot Traffic "
                <span class="range-value">{value}</span>
            </label>
            <input
                id="foot-traffic"
                type="range"
                min="1"
                max="100"
                step="1"
                prop:value=move || value().to_string()
                on:input=move |ev| {
                    if let Ok(n) = event_target_value(&ev).parse::<u32>() {
                        set_field(form, field, FieldValue::Count(n));
                    }
                }
            />
            <p class="form-description">
                "Estimate the average number of people visiting your business per day."
            </p>
            <FieldErrorText errors=errors field=field.key() />
        </div>
    }
}

fn checkbox_checked(ev: &leptos::ev::Event) -> bool {
    use wasm_bindgen::JsCast;
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        .map(|e| e.checked())
        .unwrap_or(false)
}
