use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Number};

use crate::types::{FloatKind, TypeDescriptor};

/// Dynamically shaped value produced by synthesis.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Nil pointer, slice or map, or a kind without a zero value.
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    String(String),
    Time(DateTime<Utc>),
    Pointer(Box<Value>),
    /// Slice or array elements.
    List(Vec<Value>),
    /// Map entries in insertion order.
    Map(Vec<(Value, Value)>),
    /// Struct fields in declaration order.
    Struct(Vec<(String, Value)>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Whether the value equals the zero value of its kind.
    pub fn is_zero(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(value) => !value,
            Value::Int(value) => *value == 0,
            Value::Uint(value) => *value == 0,
            Value::Float(value) => *value == 0.0,
            Value::String(value) => value.is_empty(),
            Value::Time(value) => *value == DateTime::<Utc>::default(),
            Value::Pointer(_) => false,
            Value::List(items) => items.iter().all(Value::is_zero),
            Value::Map(entries) => entries.is_empty(),
            Value::Struct(fields) => fields.iter().all(|(_, value)| value.is_zero()),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(value) => Some(*value),
            Value::Uint(value) => i64::try_from(*value).ok(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(value) => Some(*value),
            Value::Int(value) => Some(*value as f64),
            Value::Uint(value) => Some(*value as f64),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Follows a pointer to its pointee.
    pub fn pointee(&self) -> Option<&Value> {
        match self {
            Value::Pointer(inner) => Some(inner.as_ref()),
            _ => None,
        }
    }

    /// Looks up a struct field by name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Struct(fields) => fields
                .iter()
                .find(|(field, _)| field == name)
                .map(|(_, value)| value),
            _ => None,
        }
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut Value> {
        match self {
            Value::Struct(fields) => fields
                .iter_mut()
                .find(|(field, _)| field == name)
                .map(|(_, value)| value),
            _ => None,
        }
    }

    /// Looks up a map entry by key.
    pub fn get(&self, key: &Value) -> Option<&Value> {
        match self {
            Value::Map(entries) => entries
                .iter()
                .find(|(candidate, _)| candidate == key)
                .map(|(_, value)| value),
            _ => None,
        }
    }

    /// Inserts a map entry, replacing an existing entry with an equal key.
    pub fn insert_entry(entries: &mut Vec<(Value, Value)>, key: Value, value: Value) {
        if let Some(slot) = entries.iter_mut().find(|(candidate, _)| *candidate == key) {
            slot.1 = value;
        } else {
            entries.push((key, value));
        }
    }

    /// JSON rendering; map keys are stringified.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(value) => serde_json::Value::Bool(*value),
            Value::Int(value) => serde_json::Value::from(*value),
            Value::Uint(value) => serde_json::Value::from(*value),
            Value::Float(value) => Number::from_f64(*value)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(value) => serde_json::Value::String(value.clone()),
            Value::Time(value) => {
                serde_json::Value::String(value.to_rfc3339_opts(SecondsFormat::Secs, true))
            }
            Value::Pointer(inner) => inner.to_json(),
            Value::List(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json).collect())
            }
            Value::Map(entries) => {
                let mut map = Map::new();
                for (key, value) in entries {
                    map.insert(key.key_string(), value.to_json());
                }
                serde_json::Value::Object(map)
            }
            Value::Struct(fields) => {
                let mut map = Map::new();
                for (name, value) in fields {
                    map.insert(name.clone(), value.to_json());
                }
                serde_json::Value::Object(map)
            }
        }
    }

    fn key_string(&self) -> String {
        match self {
            Value::String(value) => value.clone(),
            other => other.to_json().to_string(),
        }
    }
}

impl TypeDescriptor {
    /// Zero value for the type: nil for pointers, slices and maps.
    pub fn zero_value(&self) -> Value {
        match self {
            TypeDescriptor::Bool => Value::Bool(false),
            TypeDescriptor::Int { int } if int.is_signed() => Value::Int(0),
            TypeDescriptor::Int { .. } => Value::Uint(0),
            TypeDescriptor::Float { .. } => Value::Float(0.0),
            TypeDescriptor::String => Value::String(String::new()),
            TypeDescriptor::Time => Value::Time(DateTime::<Utc>::default()),
            TypeDescriptor::Pointer { .. }
            | TypeDescriptor::Slice { .. }
            | TypeDescriptor::Map { .. }
            | TypeDescriptor::Opaque { .. } => Value::Null,
            TypeDescriptor::Array { of, len } => {
                Value::List((0..*len).map(|_| of.zero_value()).collect())
            }
            TypeDescriptor::Struct(desc) => Value::Struct(
                desc.fields
                    .iter()
                    .map(|field| (field.name.clone(), field.ty.zero_value()))
                    .collect(),
            ),
            TypeDescriptor::Named { ty, .. } => ty.zero_value(),
        }
    }
}

/// Narrows an `f64` to the precision of the target float kind.
pub fn narrow_float(kind: FloatKind, value: f64) -> f64 {
    match kind {
        FloatKind::F32 => f64::from(value as f32),
        FloatKind::F64 => value,
    }
}
