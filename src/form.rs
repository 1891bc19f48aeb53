//! Widget values for the quote form, kept apart from the wizard's draft.
//!
//! The form starts from the same defaults every time the modal opens; only
//! what passes a step's validation ends up in the draft.

use chrono::{Days, Local, NaiveDate};
use instaclean_booking::schema::ADD_ONS;
use instaclean_booking::{Address, Field, FieldValue, StepInput};

pub const DEFAULT_FOOT_TRAFFIC: u32 = 50;

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn tomorrow(today: NaiveDate) -> NaiveDate {
    today.checked_add_days(Days::new(1)).unwrap_or(today)
}

/// Initial widget values. Bookings start from tomorrow, so that is the
/// preselected date.
pub fn default_form(today: NaiveDate) -> StepInput {
    let mut form = StepInput::new()
        .with(Field::ServiceType, FieldValue::text("home"))
        .with(Field::Rooms, FieldValue::Count(1))
        .with(Field::Bathrooms, FieldValue::Count(1))
        .with(Field::OfficeSquareFootage, FieldValue::text(""))
        .with(Field::WashroomStalls, FieldValue::Count(1))
        .with(Field::BusinessType, FieldValue::text("office"))
        .with(Field::FloorType, FieldValue::text("carpeted"))
        .with(Field::FootTraffic, FieldValue::Count(DEFAULT_FOOT_TRAFFIC))
        .with(Field::Date, FieldValue::Date(tomorrow(today)))
        .with(Field::Address, FieldValue::Address(Address::default()));
    for add_on in ADD_ONS.iter() {
        form.set(add_on.field, FieldValue::Flag(false));
    }
    form
}

pub fn count_of(form: &StepInput, field: Field) -> u32 {
    form.get(field).and_then(FieldValue::as_count).unwrap_or(1)
}

pub fn text_of(form: &StepInput, field: Field) -> String {
    form.get(field)
        .and_then(FieldValue::as_text)
        .unwrap_or_default()
        .to_string()
}

pub fn flag_of(form: &StepInput, field: Field) -> bool {
    form.get(field).and_then(FieldValue::as_flag) == Some(true)
}

pub fn address_of(form: &StepInput) -> Address {
    form.get(Field::Address)
        .and_then(FieldValue::as_address)
        .cloned()
        .unwrap_or_default()
}
