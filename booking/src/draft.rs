use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::schema::{Address, Field, FieldValue, ServiceType};

/// Values collected so far in one wizard session. Lives only as long as the
/// modal is open.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    values: BTreeMap<Field, FieldValue>,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> Option<&FieldValue> {
        self.values.get(&field)
    }

    pub fn set(&mut self, field: Field, value: FieldValue) {
        self.values.insert(field, value);
    }

    pub fn contains(&self, field: Field) -> bool {
        self.values.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Shallow merge: incoming values overwrite, untouched keys stay.
    pub fn merge(&mut self, values: impl IntoIterator<Item = (Field, FieldValue)>) {
        self.values.extend(values);
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldValue)> {
        self.values.iter().map(|(f, v)| (*f, v))
    }

    pub fn service_type(&self) -> Option<ServiceType> {
        self.text(Field::ServiceType)
            .and_then(ServiceType::from_key)
    }

    pub fn text(&self, field: Field) -> Option<&str> {
        self.get(field).and_then(FieldValue::as_text)
    }

    pub fn count(&self, field: Field) -> Option<u32> {
        self.get(field).and_then(FieldValue::as_count)
    }

    /// Unset flags read as `false`.
    pub fn flag(&self, field: Field) -> bool {
        self.get(field).and_then(FieldValue::as_flag) == Some(true)
    }

    pub fn address(&self) -> Option<&Address> {
        self.get(Field::Address).and_then(FieldValue::as_address)
    }
}

impl Serialize for Draft {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (field, value) in &self.values {
            map.serialize_entry(field.key(), value)?;
        }
        map.end()
    }
}
