//! Quote wizard core for the instaclean landing page.
//!
//! Framework-free: the Leptos frontend renders this state and forwards user
//! input, so everything here is testable on the host.

pub mod catalog;
pub mod config;
pub mod counter;
pub mod draft;
mod error;
pub mod request;
pub mod schema;
pub mod steps;
pub mod time_slot;

pub use catalog::{CatalogClient, Category, Service};
pub use config::SiteConfig;
pub use counter::Counter;
pub use draft::Draft;
pub use error::{BookingError, FieldError, ValidationErrors};
pub use request::{BookingRequest, ServiceDetails};
pub use schema::{Address, Field, FieldValue, ServiceType};
pub use steps::{Advance, Step, StepInput, SubmitMode, Wizard};
pub use time_slot::{SlotGroup, TimeSlot, TimeSlotPicker};
