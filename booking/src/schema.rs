//! Declarative description of every quote form field.
//!
//! Each [`Field`] carries a label and a [`Rule`]; [`validate_field`] applies
//! the rule to a submitted value and returns the normalized value to merge
//! into the draft.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::ValidationErrors;
use crate::time_slot::TimeSlot;

pub const SERVICE_TYPE_REQUIRED: &str = "You need to select what kind of service you need";

/// Every field the quote wizard can collect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    ServiceType,
    Rooms,
    Bathrooms,
    InsideFridge,
    InsideOven,
    InsideCabinet,
    InsideMicrowave,
    Laundry,
    DeepCleaning,
    CarpetCleaning,
    MovingOut,
    InteriorWindows,
    OfficeSquareFootage,
    WashroomStalls,
    BusinessType,
    FloorType,
    FootTraffic,
    Date,
    Time,
    Address,
}

impl Field {
    pub const ALL: [Field; 20] = [
        Field::ServiceType,
        Field::Rooms,
        Field::Bathrooms,
        Field::InsideFridge,
        Field::InsideOven,
        Field::InsideCabinet,
        Field::InsideMicrowave,
        Field::Laundry,
        Field::DeepCleaning,
        Field::CarpetCleaning,
        Field::MovingOut,
        Field::InteriorWindows,
        Field::OfficeSquareFootage,
        Field::WashroomStalls,
        Field::BusinessType,
        Field::FloorType,
        Field::FootTraffic,
        Field::Date,
        Field::Time,
        Field::Address,
    ];

    /// Wire key used in JSON and in error reports.
    pub fn key(self) -> &'static str {
        match self {
            Field::ServiceType => "type",
            Field::Rooms => "rooms",
            Field::Bathrooms => "bathrooms",
            Field::InsideFridge => "insideFridge",
            Field::InsideOven => "insideOven",
            Field::InsideCabinet => "insideCabinet",
            Field::InsideMicrowave => "insideMicrowave",
            Field::Laundry => "laundry",
            Field::DeepCleaning => "deepCleaning",
            Field::CarpetCleaning => "carpetCleaning",
            Field::MovingOut => "movingOut",
            Field::InteriorWindows => "interiorWindows",
            Field::OfficeSquareFootage => "officeSquareFootage",
            Field::WashroomStalls => "washroomStalls",
            Field::BusinessType => "businessType",
            Field::FloorType => "floorType",
            Field::FootTraffic => "footTraffic",
            Field::Date => "date",
            Field::Time => "time",
            Field::Address => "address",
        }
    }

    pub fn from_key(key: &str) -> Option<Field> {
        Field::ALL.iter().copied().find(|f| f.key() == key)
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::ServiceType => "Service type",
            Field::Rooms => "Rooms",
            Field::Bathrooms => "Bathrooms",
            Field::OfficeSquareFootage => "Square footage",
            Field::WashroomStalls => "Washroom stalls",
            Field::BusinessType => "Type of business",
            Field::FloorType => "Floor type",
            Field::FootTraffic => "Foot traffic",
            Field::Date => "Date",
            Field::Time => "Time",
            Field::Address => "Address",
            other => add_on(other).map(|a| a.name).unwrap_or("Add-on"),
        }
    }

    pub fn rule(self) -> Rule {
        match self {
            Field::ServiceType => Rule::OneOf(ServiceType::KEYS),
            Field::Rooms | Field::Bathrooms | Field::WashroomStalls => Rule::AtLeast(1),
            Field::OfficeSquareFootage => Rule::NonEmpty,
            Field::BusinessType => Rule::OneOf(BusinessType::KEYS),
            Field::FloorType => Rule::OneOf(FloorType::KEYS),
            Field::FootTraffic => Rule::Optional(&Rule::Between(1, 100)),
            Field::Date => Rule::AfterToday,
            Field::Time => Rule::Slot,
            Field::Address => Rule::Address,
            _ => Rule::Flag,
        }
    }
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

/// Validation rule attached to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Text that is non-empty after trimming.
    NonEmpty,
    /// Count with an inclusive lower bound.
    AtLeast(u32),
    /// Count within an inclusive range.
    Between(u32, u32),
    /// Text that must be one of the listed keys.
    OneOf(&'static [&'static str]),
    /// Boolean; absent means `false`.
    Flag,
    /// Calendar date strictly after today.
    AfterToday,
    /// One of the fixed time slots.
    Slot,
    /// Nested address record.
    Address,
    /// The inner rule applies only when a value is present.
    Optional(&'static Rule),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apartment_number: Option<String>,
    pub street: String,
    pub city: String,
    pub postal_code: String,
}

impl Address {
    /// "12 - 100 King St" style line shown in the wizard header.
    pub fn short_line(&self) -> String {
        match self.apartment_number.as_deref().map(str::trim) {
            Some(apt) if !apt.is_empty() => format!("{} - {}", apt, self.street),
            _ => self.street.clone(),
        }
    }

    fn normalized(&self) -> Address {
        Address {
            apartment_number: self
                .apartment_number
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            street: self.street.trim().to_string(),
            city: self.city.trim().to_string(),
            postal_code: self.postal_code.trim().to_string(),
        }
    }
}

/// Value held by a draft field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Count(u32),
    Text(String),
    Date(NaiveDate),
    Address(Address),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_count(&self) -> Option<u32> {
        match self {
            FieldValue::Count(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FieldValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_address(&self) -> Option<&Address> {
        match self {
            FieldValue::Address(a) => Some(a),
            _ => None,
        }
    }
}

/// Kind of location being cleaned. Decides which details step 2 collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    Home,
    Business,
    Airbnb,
    #[serde(rename = "post")]
    PostConstruction,
}

impl ServiceType {
    pub const ALL: [ServiceType; 4] = [
        ServiceType::Home,
        ServiceType::Business,
        ServiceType::Airbnb,
        ServiceType::PostConstruction,
    ];
    pub const KEYS: &'static [&'static str] = &["home", "business", "airbnb", "post"];

    pub fn key(self) -> &'static str {
        match self {
            ServiceType::Home => "home",
            ServiceType::Business => "business",
            ServiceType::Airbnb => "airbnb",
            ServiceType::PostConstruction => "post",
        }
    }

    pub fn from_key(key: &str) -> Option<ServiceType> {
        ServiceType::ALL.iter().copied().find(|s| s.key() == key)
    }

    pub fn label(self) -> &'static str {
        match self {
            ServiceType::Home => "Home",
            ServiceType::Business => "Business",
            ServiceType::Airbnb => "Airbnb",
            ServiceType::PostConstruction => "Post Construction",
        }
    }

    /// Fields the details step collects for this kind of location.
    pub fn detail_fields(self) -> &'static [Field] {
        match self {
            ServiceType::Home | ServiceType::Airbnb => HOME_DETAILS,
            ServiceType::Business => BUSINESS_DETAILS,
            ServiceType::PostConstruction => POST_CONSTRUCTION_DETAILS,
        }
    }
}

const HOME_DETAILS: &[Field] = &[
    Field::Rooms,
    Field::Bathrooms,
    Field::InsideFridge,
    Field::InsideOven,
    Field::InsideCabinet,
    Field::InsideMicrowave,
    Field::Laundry,
    Field::DeepCleaning,
    Field::CarpetCleaning,
    Field::MovingOut,
    Field::InteriorWindows,
];

const BUSINESS_DETAILS: &[Field] = &[
    Field::OfficeSquareFootage,
    Field::WashroomStalls,
    Field::BusinessType,
    Field::FloorType,
    Field::FootTraffic,
];

const POST_CONSTRUCTION_DETAILS: &[Field] = &[
    Field::OfficeSquareFootage,
    Field::FloorType,
    Field::Rooms,
    Field::Bathrooms,
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessType {
    #[default]
    Office,
    Retail,
    Restaurant,
}

impl BusinessType {
    pub const KEYS: &'static [&'static str] = &["office", "retail", "restaurant"];

    pub fn from_key(key: &str) -> Option<BusinessType> {
        match key {
            "office" => Some(BusinessType::Office),
            "retail" => Some(BusinessType::Retail),
            "restaurant" => Some(BusinessType::Restaurant),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BusinessType::Office => "Office",
            BusinessType::Retail => "Retail",
            BusinessType::Restaurant => "Restaurant",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FloorType {
    #[default]
    Carpeted,
    Hardwood,
    Tile,
}

impl FloorType {
    pub const KEYS: &'static [&'static str] = &["carpeted", "hardwood", "tile"];

    pub fn from_key(key: &str) -> Option<FloorType> {
        match key {
            "carpeted" => Some(FloorType::Carpeted),
            "hardwood" => Some(FloorType::Hardwood),
            "tile" => Some(FloorType::Tile),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FloorType::Carpeted => "Carpeted",
            FloorType::Hardwood => "Hardwood",
            FloorType::Tile => "Tile",
        }
    }
}

/// An optional extra on a home or Airbnb cleaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddOn {
    pub field: Field,
    pub name: &'static str,
    pub extra_minutes: u32,
}

impl AddOn {
    const fn new(field: Field, name: &'static str, extra_minutes: u32) -> Self {
        Self {
            field,
            name,
            extra_minutes,
        }
    }

    pub fn time_label(&self) -> String {
        format!("+{} minutes", self.extra_minutes)
    }
}

pub static ADD_ONS: [AddOn; 9] = [
    AddOn::new(Field::InsideFridge, "Inside Fridge", 30),
    AddOn::new(Field::InsideOven, "Inside Oven", 30),
    AddOn::new(Field::InsideCabinet, "Inside Cabinet", 30),
    AddOn::new(Field::InsideMicrowave, "Inside Microwave", 15),
    AddOn::new(Field::Laundry, "Laundry", 30),
    AddOn::new(Field::DeepCleaning, "Deep Cleaning", 45),
    AddOn::new(Field::CarpetCleaning, "Carpet Cleaning", 60),
    AddOn::new(Field::MovingOut, "Moving Out", 60),
    AddOn::new(Field::InteriorWindows, "Interior Windows", 30),
];

pub fn add_on(field: Field) -> Option<&'static AddOn> {
    ADD_ONS.iter().find(|a| a.field == field)
}

/// Check `value` against the rule for `field`.
///
/// Failures are appended to `errors`. On success returns the normalized value
/// to merge, or `None` when an optional field was left empty.
pub fn validate_field(
    field: Field,
    value: Option<&FieldValue>,
    today: NaiveDate,
    errors: &mut ValidationErrors,
) -> Option<FieldValue> {
    apply_rule(field, field.rule(), value, today, errors)
}

fn apply_rule(
    field: Field,
    rule: Rule,
    value: Option<&FieldValue>,
    today: NaiveDate,
    errors: &mut ValidationErrors,
) -> Option<FieldValue> {
    let key = field.key();
    let label = field.label();

    match rule {
        Rule::Optional(inner) => match value {
            None => None,
            Some(FieldValue::Text(s)) if s.trim().is_empty() => None,
            Some(v) => apply_rule(field, *inner, Some(v), today, errors),
        },
        Rule::Flag => match value {
            None => Some(FieldValue::Flag(false)),
            Some(FieldValue::Flag(b)) => Some(FieldValue::Flag(*b)),
            Some(_) => {
                errors.push(key, format!("{} has an unexpected value", label));
                None
            }
        },
        Rule::NonEmpty => match value.and_then(FieldValue::as_text).map(str::trim) {
            Some(s) if !s.is_empty() => Some(FieldValue::text(s)),
            _ => {
                errors.push(key, format!("{} is required", label));
                None
            }
        },
        Rule::AtLeast(min) => match value.and_then(FieldValue::as_count) {
            Some(n) if n >= min => Some(FieldValue::Count(n)),
            Some(_) => {
                errors.push(key, format!("{} must be at least {}", label, min));
                None
            }
            None => {
                errors.push(key, format!("{} is required", label));
                None
            }
        },
        Rule::Between(min, max) => match value.and_then(FieldValue::as_count) {
            Some(n) if (min..=max).contains(&n) => Some(FieldValue::Count(n)),
            _ => {
                errors.push(
                    key,
                    format!("{} must be between {} and {}", label, min, max),
                );
                None
            }
        },
        Rule::OneOf(allowed) => match value.and_then(FieldValue::as_text) {
            Some(s) if allowed.contains(&s) => Some(FieldValue::text(s)),
            _ if field == Field::ServiceType => {
                errors.push(key, SERVICE_TYPE_REQUIRED);
                None
            }
            _ => {
                errors.push(
                    key,
                    format!("{} must be one of: {}", label, allowed.join(", ")),
                );
                None
            }
        },
        Rule::AfterToday => match value.and_then(FieldValue::as_date) {
            Some(d) if d > today => Some(FieldValue::Date(d)),
            Some(_) => {
                errors.push(key, "Bookings start from tomorrow");
                None
            }
            None => {
                errors.push(key, "Please pick a date");
                None
            }
        },
        Rule::Slot => match value.and_then(FieldValue::as_text).map(TimeSlot::parse) {
            Some(Some(slot)) => Some(FieldValue::text(slot.label())),
            _ => {
                errors.push(key, "Please pick a time slot");
                None
            }
        },
        Rule::Address => {
            let address = value
                .and_then(FieldValue::as_address)
                .map(Address::normalized)
                .unwrap_or_default();
            let before = errors.len();
            if address.street.is_empty() {
                errors.push("address.street", "Street is required");
            }
            if address.city.is_empty() {
                errors.push("address.city", "City is required");
            }
            if address.postal_code.is_empty() {
                errors.push("address.postalCode", "Postal Code is required");
            }
            (errors.len() == before).then_some(FieldValue::Address(address))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    fn check(field: Field, value: Option<FieldValue>) -> (Option<FieldValue>, ValidationErrors) {
        let mut errors = ValidationErrors::new();
        let out = validate_field(field, value.as_ref(), today(), &mut errors);
        (out, errors)
    }

    #[test]
    fn test_every_field_key_round_trips() {
        for field in Field::ALL {
            assert_eq!(Field::from_key(field.key()), Some(field));
        }
        assert_eq!(Field::from_key("nope"), None);
    }

    #[test]
    fn test_service_type_required_message() {
        let (out, errors) = check(Field::ServiceType, None);
        assert!(out.is_none());
        assert_eq!(errors.message_for("type"), Some(SERVICE_TYPE_REQUIRED));

        let (out, errors) = check(Field::ServiceType, Some(FieldValue::text("castle")));
        assert!(out.is_none());
        assert!(errors.has("type"));
    }

    #[test]
    fn test_counts_have_floor_of_one() {
        let (out, errors) = check(Field::Rooms, Some(FieldValue::Count(0)));
        assert!(out.is_none());
        assert_eq!(
            errors.message_for("rooms"),
            Some("Rooms must be at least 1")
        );

        let (out, errors) = check(Field::Rooms, Some(FieldValue::Count(50)));
        assert_eq!(out, Some(FieldValue::Count(50)));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_flags_default_to_false() {
        let (out, errors) = check(Field::InsideFridge, None);
        assert_eq!(out, Some(FieldValue::Flag(false)));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_foot_traffic_is_optional_but_bounded() {
        let (out, errors) = check(Field::FootTraffic, None);
        assert!(out.is_none());
        assert!(errors.is_empty());

        let (_, errors) = check(Field::FootTraffic, Some(FieldValue::Count(101)));
        assert!(errors.has("footTraffic"));

        let (out, _) = check(Field::FootTraffic, Some(FieldValue::Count(50)));
        assert_eq!(out, Some(FieldValue::Count(50)));
    }

    #[test]
    fn test_business_type_enum_membership() {
        let expected = "Type of business must be one of: office, retail, restaurant";
        let (_, errors) = check(Field::BusinessType, Some(FieldValue::text("factory")));
        assert_eq!(errors.message_for("businessType"), Some(expected));
        let (out, _) = check(Field::BusinessType, Some(FieldValue::text("retail")));
        assert_eq!(out, Some(FieldValue::text("retail")));
    }

    #[test]
    fn test_date_must_be_after_today() {
        let (_, errors) = check(Field::Date, Some(FieldValue::Date(today())));
        assert_eq!(
            errors.message_for("date"),
            Some("Bookings start from tomorrow")
        );

        let tomorrow = today().succ_opt().unwrap();
        let (out, errors) = check(Field::Date, Some(FieldValue::Date(tomorrow)));
        assert_eq!(out, Some(FieldValue::Date(tomorrow)));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_time_must_be_known_slot() {
        let (_, errors) = check(Field::Time, Some(FieldValue::text("")));
        assert!(errors.has("time"));
        let (_, errors) = check(Field::Time, Some(FieldValue::text("03:00 AM")));
        assert!(errors.has("time"));
        let (out, _) = check(Field::Time, Some(FieldValue::text("09:00 AM")));
        assert_eq!(out, Some(FieldValue::text("09:00 AM")));
    }

    #[test]
    fn test_address_reports_each_missing_part() {
        let (out, errors) = check(Field::Address, None);
        assert!(out.is_none());
        assert_eq!(errors.len(), 3);
        assert_eq!(
            errors.message_for("address.street"),
            Some("Street is required")
        );
        assert_eq!(errors.message_for("address.city"), Some("City is required"));
        assert_eq!(
            errors.message_for("address.postalCode"),
            Some("Postal Code is required")
        );
    }

    #[test]
    fn test_address_apartment_is_optional_and_trimmed() {
        let address = Address {
            apartment_number: Some("  ".to_string()),
            street: " 100 King St ".to_string(),
            city: "Toronto".to_string(),
            postal_code: "M5H 1A1".to_string(),
        };
        let (out, errors) = check(Field::Address, Some(FieldValue::Address(address)));
        assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
        let stored = out.unwrap();
        let stored = stored.as_address().unwrap();
        assert_eq!(stored.apartment_number, None);
        assert_eq!(stored.street, "100 King St");
        assert_eq!(stored.short_line(), "100 King St");
    }

    #[test]
    fn test_detail_fields_follow_service_type() {
        let home = ServiceType::Home.detail_fields();
        let business = ServiceType::Business.detail_fields();
        let post = ServiceType::PostConstruction.detail_fields();

        assert!(home.contains(&Field::InsideFridge));
        assert_eq!(ServiceType::Airbnb.detail_fields(), home);
        assert!(business.contains(&Field::WashroomStalls));
        assert!(!business.contains(&Field::Rooms));
        assert!(post.contains(&Field::FloorType));
    }

    #[test]
    fn test_add_on_labels() {
        let microwave = add_on(Field::InsideMicrowave).unwrap();
        assert_eq!(microwave.time_label(), "+15 minutes");
        assert_eq!(Field::DeepCleaning.label(), "Deep Cleaning");
        assert!(add_on(Field::Rooms).is_none());
    }
}
