use instaclean_booking::{Address, Field, FieldValue, StepInput, ValidationErrors};
use leptos::prelude::*;

use crate::components::field_error::FieldErrorText;
use crate::form::address_of;

#[derive(Clone, Copy)]
enum Part {
    Apartment,
    Street,
    City,
    PostalCode,
}

impl Part {
    fn id(self) -> &'static str {
        match self {
            Part::Apartment => "address-apartment",
            Part::Street => "address-street",
            Part::City => "address-city",
            Part::PostalCode => "address-postal-code",
        }
    }

    fn error_key(self) -> &'static str {
        match self {
            Part::Apartment => "address.apartmentNumber",
            Part::Street => "address.street",
            Part::City => "address.city",
            Part::PostalCode => "address.postalCode",
        }
    }

    fn read(self, address: &Address) -> String {
        match self {
            Part::Apartment => address.apartment_number.clone().unwrap_or_default(),
            Part::Street => address.street.clone(),
            Part::City => address.city.clone(),
            Part::PostalCode => address.postal_code.clone(),
        }
    }

    fn write(self, address: &mut Address, value: String) {
        match self {
            Part::Apartment => address.apartment_number = Some(value),
            Part::Street => address.street = value,
            Part::City => address.city = value,
            Part::PostalCode => address.postal_code = value,
        }
    }
}

/// Step 4. Apartment is optional; the other three are required.
#[component]
pub fn AddressForm(form: RwSignal<StepInput>, errors: RwSignal<ValidationErrors>) -> impl IntoView {
    view! {
        <div class="address-grid">
            <AddressInput form=form errors=errors part=Part::Apartment label="Apt / Unit" placeholder="Optional" />
            <AddressInput form=form errors=errors part=Part::Street label="Street" placeholder="100 King St W" />
            <AddressInput form=form errors=errors part=Part::City label="City" placeholder="Toronto" />
            <AddressInput form=form errors=errors part=Part::PostalCode label="Postal Code" placeholder="M5X 1A9" />
        </div>
    }
}

#[component]
fn AddressInput(
    form: RwSignal<StepInput>,
    errors: RwSignal<ValidationErrors>,
    part: Part,
    label: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let set_part = move |value: String| {
        form.update(|f| {
            let mut address = address_of(f);
            part.write(&mut address, value);
            f.set(Field::Address, FieldValue::Address(address));
        });
    };

    view! {
        <div class="form-item">
            <label for=part.id()>{label}</label>
            <input
                id=part.id()
                class="input"
                placeholder=placeholder
                prop:value=move || form.with(|f| part.read(&address_of(f)))
                on:input=move |ev| set_part(event_target_value(&ev))
            />
            <FieldErrorText errors=errors field=part.error_key() />
        </div>
    }
}
