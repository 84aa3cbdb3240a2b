//! Recursive conversion of normalized records into plain JSON mappings.
//!
//! Every record type declares its fields, in output order, through the
//! [`Record`] trait. A field value is one of four shapes ([`FieldValue`]):
//! another record, a scalar, a list or an already-plain mapping. [`flatten`]
//! walks that graph and turns every nested record into a nested JSON object,
//! leaving scalars, lists of scalars and mappings untouched. Recursion stops
//! at the first value that is not a record, so there is no depth limit.
//!
//! Field order is the declared order, not alphabetical; this relies on the
//! `preserve_order` feature of `serde_json`.

use serde_json::{Map, Value};

/// A value held by a record field.
pub enum FieldValue<'a> {
    Record(&'a dyn Record),
    Scalar(Value),
    List(Vec<FieldValue<'a>>),
    Mapping(Map<String, Value>),
}

impl<'a> FieldValue<'a> {
    pub fn scalar(value: impl Into<Value>) -> Self {
        FieldValue::Scalar(value.into())
    }

    /// A nested record, or JSON `null` when absent.
    pub fn optional<R: Record + 'a>(record: Option<&'a R>) -> Self {
        match record {
            Some(r) => FieldValue::Record(r),
            None => FieldValue::Scalar(Value::Null),
        }
    }

    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator<Item = FieldValue<'a>>,
    {
        FieldValue::List(items.into_iter().collect())
    }
}

/// A type with a declared, ordered list of named fields.
pub trait Record {
    fn fields(&self) -> Vec<(&str, FieldValue<'_>)>;
}

/// A plain mapping is a record whose fields are all scalars.
impl Record for Map<String, Value> {
    fn fields(&self) -> Vec<(&str, FieldValue<'_>)> {
        self.iter()
            .map(|(k, v)| (k.as_str(), FieldValue::Scalar(v.clone())))
            .collect()
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn fields(&self) -> Vec<(&str, FieldValue<'_>)> {
        (**self).fields()
    }
}

/// Flattens a record into an ordered mapping of field name to value.
pub fn flatten<R: Record + ?Sized>(record: &R) -> Map<String, Value> {
    record
        .fields()
        .into_iter()
        .map(|(name, value)| (name.to_string(), flatten_value(value)))
        .collect()
}

pub fn flatten_value(value: FieldValue<'_>) -> Value {
    match value {
        FieldValue::Record(record) => Value::Object(flatten(record)),
        FieldValue::Scalar(v) => v,
        FieldValue::List(items) => Value::Array(items.into_iter().map(flatten_value).collect()),
        FieldValue::Mapping(map) => Value::Object(map),
    }
}

/// Flattens a slice of records into a JSON array.
pub fn flatten_all<R: Record>(records: &[R]) -> Value {
    Value::Array(
        records
            .iter()
            .map(|r| Value::Object(flatten(r)))
            .collect(),
    )
}
