use instaclean_booking::ValidationErrors;
use leptos::prelude::*;

/// Inline message for one field, shown only while that field has an error.
#[component]
pub fn FieldErrorText(
    errors: RwSignal<ValidationErrors>,
    /// Wire key, e.g. "rooms" or "address.city"
    #[prop(into)]
    field: String,
) -> impl IntoView {
    move || {
        errors
            .with(|e| e.message_for(&field).map(str::to_string))
            .map(|message| view! { <p class="field-error">{message}</p> })
    }
}
