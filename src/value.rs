//! Accessors for navigating a parsed [JsonValue] tree
//!
//! Objects retain every member in textual order, duplicates included. The keyed lookups here
//! resolve duplicates by taking the *last* member with a matching key, which is what most
//! consumers expect. Use [JsonValue::get_all] to see every duplicate.
use std::borrow::Cow;

use crate::pointer::{JsonPointer, JsonPointerComponent};
use crate::{JsonValue, Member};

impl<'a> JsonValue<'a> {
    /// Checks whether the value is [JsonValue::Null]
    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JsonValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(s) => Some(&**s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[JsonValue<'a>]> {
        match self {
            JsonValue::Array(values) => Some(values.as_slice()),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&[Member<'a>]> {
        match self {
            JsonValue::Object(members) => Some(members.as_slice()),
            _ => None,
        }
    }

    /// Number of elements or members for arrays and objects, [None] for anything else
    pub fn len(&self) -> Option<usize> {
        match self {
            JsonValue::Array(values) => Some(values.len()),
            JsonValue::Object(members) => Some(members.len()),
            _ => None,
        }
    }

    /// Look up a member by key. If the key occurs more than once the last occurrence wins.
    pub fn get(&self, key: &str) -> Option<&JsonValue<'a>> {
        self.as_object()?
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Every member value with the given key, in textual order
    pub fn get_all<'s>(&'s self, key: &'s str) -> impl Iterator<Item = &'s JsonValue<'a>> + 's {
        self.as_object()
            .unwrap_or(&[])
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Look up an array element by index
    pub fn get_index(&self, index: usize) -> Option<&JsonValue<'a>> {
        self.as_array()?.get(index)
    }

    /// Resolve an RFC 6901 pointer string such as `/b/1` against this value. Returns [None] if
    /// the pointer is malformed or doesn't resolve.
    pub fn pointer(&self, pointer: &str) -> Option<&JsonValue<'a>> {
        let pointer = JsonPointer::parse(pointer)?;
        self.resolve(&pointer)
    }

    /// Resolve a [JsonPointer] against this value
    pub fn resolve(&self, pointer: &JsonPointer) -> Option<&JsonValue<'a>> {
        let mut current = self;
        for component in pointer.components() {
            current = match (component, current) {
                (JsonPointerComponent::Root, _) => current,
                (JsonPointerComponent::Name(name), JsonValue::Object(_)) => current.get(name)?,
                (JsonPointerComponent::Name(name), JsonValue::Array(_)) => {
                    current.get_index(JsonPointer::parse_index(name)?)?
                }
                (JsonPointerComponent::Index(i), JsonValue::Array(_)) => current.get_index(*i)?,
                (JsonPointerComponent::Index(i), JsonValue::Object(_)) => {
                    current.get(&i.to_string())?
                }
                _ => return None,
            };
        }
        Some(current)
    }

    /// Detach the tree from the input it was parsed from, copying any borrowed strings
    pub fn into_owned(self) -> JsonValue<'static> {
        match self {
            JsonValue::Object(members) => JsonValue::Object(
                members
                    .into_iter()
                    .map(|(k, v)| (Cow::Owned(k.into_owned()), v.into_owned()))
                    .collect(),
            ),
            JsonValue::Array(values) => {
                JsonValue::Array(values.into_iter().map(JsonValue::into_owned).collect())
            }
            JsonValue::String(s) => JsonValue::String(Cow::Owned(s.into_owned())),
            JsonValue::Number(n) => JsonValue::Number(n),
            JsonValue::Boolean(b) => JsonValue::Boolean(b),
            JsonValue::Null => JsonValue::Null,
        }
    }
}
