//! Typed booking built from a completed draft.

use chrono::NaiveDate;
use serde::Serialize;

use crate::draft::Draft;
use crate::error::ValidationErrors;
use crate::schema::{
    add_on, Address, BusinessType, Field, FloorType, ServiceType, ADD_ONS, SERVICE_TYPE_REQUIRED,
};
use crate::time_slot::TimeSlot;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeDetails {
    pub rooms: u32,
    pub bathrooms: u32,
    pub add_ons: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessDetails {
    pub office_square_footage: String,
    pub washroom_stalls: u32,
    pub business_type: BusinessType,
    pub floor_type: FloorType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foot_traffic: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostConstructionDetails {
    pub office_square_footage: String,
    pub floor_type: FloorType,
    pub rooms: u32,
    pub bathrooms: u32,
}

/// Service-specific part of a booking, one variant per service type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ServiceDetails {
    Home(HomeDetails),
    Business(BusinessDetails),
    Airbnb(HomeDetails),
    #[serde(rename = "post")]
    PostConstruction(PostConstructionDetails),
}

impl ServiceDetails {
    pub fn service_type(&self) -> ServiceType {
        match self {
            ServiceDetails::Home(_) => ServiceType::Home,
            ServiceDetails::Business(_) => ServiceType::Business,
            ServiceDetails::Airbnb(_) => ServiceType::Airbnb,
            ServiceDetails::PostConstruction(_) => ServiceType::PostConstruction,
        }
    }

    /// Extra minutes added by the selected add-ons.
    pub fn extra_minutes(&self) -> u32 {
        match self {
            ServiceDetails::Home(d) | ServiceDetails::Airbnb(d) => d
                .add_ons
                .iter()
                .filter_map(|f| add_on(*f))
                .map(|a| a.extra_minutes)
                .sum(),
            _ => 0,
        }
    }
}

/// The booking handed over when the wizard commits.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    #[serde(flatten)]
    pub details: ServiceDetails,
    pub date: NaiveDate,
    pub time: TimeSlot,
    pub address: Address,
    pub extra_minutes: u32,
}

impl BookingRequest {
    /// Project a draft onto the fields its service type needs. Fields left
    /// over from a different service type are ignored.
    pub fn from_draft(draft: &Draft) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let mut reader = Reader {
            draft,
            errors: &mut errors,
        };

        let details = match draft.service_type() {
            Some(ServiceType::Home) => Some(ServiceDetails::Home(reader.home())),
            Some(ServiceType::Airbnb) => Some(ServiceDetails::Airbnb(reader.home())),
            Some(ServiceType::Business) => Some(ServiceDetails::Business(BusinessDetails {
                office_square_footage: reader.text(Field::OfficeSquareFootage),
                washroom_stalls: reader.count(Field::WashroomStalls),
                business_type: reader.choice(Field::BusinessType, BusinessType::from_key),
                floor_type: reader.choice(Field::FloorType, FloorType::from_key),
                foot_traffic: draft.count(Field::FootTraffic),
            })),
            Some(ServiceType::PostConstruction) => {
                Some(ServiceDetails::PostConstruction(PostConstructionDetails {
                    office_square_footage: reader.text(Field::OfficeSquareFootage),
                    floor_type: reader.choice(Field::FloorType, FloorType::from_key),
                    rooms: reader.count(Field::Rooms),
                    bathrooms: reader.count(Field::Bathrooms),
                }))
            }
            None => {
                reader.errors.push(Field::ServiceType.key(), SERVICE_TYPE_REQUIRED);
                None
            }
        };

        let date = draft.get(Field::Date).and_then(|v| v.as_date());
        if date.is_none() {
            errors.push(Field::Date.key(), "Please pick a date");
        }
        let time = draft.text(Field::Time).and_then(TimeSlot::parse);
        if time.is_none() {
            errors.push(Field::Time.key(), "Please pick a time slot");
        }
        let address = draft.address().cloned();
        if address.is_none() {
            errors.push(Field::Address.key(), "Address is required");
        }

        match (details, date, time, address) {
            (Some(details), Some(date), Some(time), Some(address)) if errors.is_empty() => {
                let extra_minutes = details.extra_minutes();
                Ok(BookingRequest {
                    details,
                    date,
                    time,
                    address,
                    extra_minutes,
                })
            }
            _ => Err(errors),
        }
    }

    pub fn service_type(&self) -> ServiceType {
        self.details.service_type()
    }

    /// Label/value rows for the order summary.
    pub fn summary_lines(&self) -> Vec<(&'static str, String)> {
        let mut lines = vec![("Service", self.service_type().label().to_string())];

        match &self.details {
            ServiceDetails::Home(d) | ServiceDetails::Airbnb(d) => {
                lines.push(("Rooms", d.rooms.to_string()));
                lines.push(("Bathrooms", d.bathrooms.to_string()));
                let names: Vec<&str> = d
                    .add_ons
                    .iter()
                    .filter_map(|f| add_on(*f))
                    .map(|a| a.name)
                    .collect();
                let add_ons = if names.is_empty() {
                    "None".to_string()
                } else {
                    names.join(", ")
                };
                lines.push(("Additional services", add_ons));
            }
            ServiceDetails::Business(d) => {
                lines.push(("Square footage", d.office_square_footage.clone()));
                lines.push(("Washroom stalls", d.washroom_stalls.to_string()));
                lines.push(("Type of business", d.business_type.label().to_string()));
                lines.push(("Floor type", d.floor_type.label().to_string()));
                if let Some(traffic) = d.foot_traffic {
                    lines.push(("Foot traffic", format!("{} visitors/day", traffic)));
                }
            }
            ServiceDetails::PostConstruction(d) => {
                lines.push(("Square footage", d.office_square_footage.clone()));
                lines.push(("Floor type", d.floor_type.label().to_string()));
                lines.push(("Rooms", d.rooms.to_string()));
                lines.push(("Bathrooms", d.bathrooms.to_string()));
            }
        }

        lines.push(("Date", self.date.format("%B %-d, %Y").to_string()));
        lines.push(("Time", self.time.label()));
        lines.push((
            "Address",
            format!(
                "{}, {} {}",
                self.address.short_line(),
                self.address.city,
                self.address.postal_code
            ),
        ));
        if self.extra_minutes > 0 {
            lines.push(("Extra time", format!("+{} minutes", self.extra_minutes)));
        }
        lines
    }
}

struct Reader<'a> {
    draft: &'a Draft,
    errors: &'a mut ValidationErrors,
}

impl Reader<'_> {
    fn home(&mut self) -> HomeDetails {
        HomeDetails {
            rooms: self.count(Field::Rooms),
            bathrooms: self.count(Field::Bathrooms),
            add_ons: ADD_ONS
                .iter()
                .map(|a| a.field)
                .filter(|f| self.draft.flag(*f))
                .collect(),
        }
    }

    fn count(&mut self, field: Field) -> u32 {
        self.draft.count(field).unwrap_or_else(|| {
            self.errors.push(field.key(), format!("{} is required", field.label()));
            0
        })
    }

    fn text(&mut self, field: Field) -> String {
        match self.draft.text(field) {
            Some(s) => s.to_string(),
            None => {
                self.errors.push(field.key(), format!("{} is required", field.label()));
                String::new()
            }
        }
    }

    fn choice<T: Default>(&mut self, field: Field, parse: fn(&str) -> Option<T>) -> T {
        match self.draft.text(field).and_then(parse) {
            Some(v) => v,
            None => {
                self.errors.push(field.key(), format!("{} is required", field.label()));
                T::default()
            }
        }
    }
}
