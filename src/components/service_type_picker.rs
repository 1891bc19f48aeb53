use instaclean_booking::{Field, FieldValue, ServiceType, StepInput, ValidationErrors};
use leptos::prelude::*;

use crate::components::field_error::FieldErrorText;
use crate::form::text_of;

#[component]
pub fn ServiceTypePicker(
    form: RwSignal<StepInput>,
    errors: RwSignal<ValidationErrors>,
) -> impl IntoView {
    let current = move || form.with(|f| text_of(f, Field::ServiceType));

    view! {
        <fieldset class="radio-group">
            <legend>"What kind of location is this?"</legend>
            {ServiceType::ALL
                .into_iter()
                .map(|service| {
                    let id = format!("service-{}", service.key());
                    let input_id = id.clone();
                    view! {
                        <label class="radio-item" for=id>
                            <input
                                type="radio"
                                id=input_id
                                name="service-type"
                                value=service.key()
                                prop:checked=move || current() == service.key()
                                on:change=move |_| {
                                    form.update(|f| {
                                        f.set(Field::ServiceType, FieldValue::text(service.key()))
                                    });
                                }
                            />
                            <span>{service.label()}</span>
                        </label>
                    }
                })
                .collect_view()}
            <FieldErrorText errors=errors field=Field::ServiceType.key() />
        </fieldset>
    }
}
