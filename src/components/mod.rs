pub mod address_form;
pub mod backdrop;
pub mod book_button;
pub mod counter_input;
pub mod details_step;
pub mod field_error;
pub mod hero;
pub mod how_it_works;
pub mod modal;
pub mod navbar;
pub mod order_summary;
pub mod quote_modal;
pub mod schedule_step;
pub mod service_type_picker;
pub mod time_slot_picker;
