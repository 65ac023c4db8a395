//! A representation of a JSON Pointer with associated operations, as per RFC 6901
//!
//! Pointers are used for addressing values within a parsed tree, see [crate::JsonValue::pointer].
use std::{borrow::Cow, fmt::Display};

/// Each pointer is a series of segments delineated by a separator char
const PATH_SEPARATOR: char = '/';
/// As per the RFC, we need to encode any tilde characters as ~0
const ENCODED_TILDE: &str = "~0";
/// As per the RFC, we need to encode any slash characters as ~1
const ENCODED_SLASH: &str = "~1";

/// Each pointer is made of one of three different component types
#[derive(Debug, Clone, PartialEq)]
pub enum JsonPointerComponent<'a> {
    /// Root element of a pointer
    Root,
    /// A named element within a pointer
    Name(Cow<'a, str>),
    /// An indexed element within a pointer
    Index(usize),
}

impl<'a> Display for JsonPointerComponent<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Root => write!(f, ""),
            Self::Name(s) => write!(
                f,
                "{}",
                &s.replace('~', ENCODED_TILDE).replace('/', ENCODED_SLASH)
            ),
            Self::Index(i) => write!(f, "{}", i),
        }
    }
}

/// A structure representing a complete pointer, comprising multiple [JsonPointerComponent]s
#[derive(Debug, Default, Clone, PartialEq)]
pub struct JsonPointer<'a> {
    /// The components that go together to make up the pointer
    components: Vec<JsonPointerComponent<'a>>,
}

impl<'a> JsonPointer<'a> {
    /// Parse a pointer from its string representation. The empty string is the whole document,
    /// anything else must start with a `/`. Returns [None] for malformed pointers, including
    /// `~` escapes other than `~0` and `~1`.
    pub fn parse(pointer: &'a str) -> Option<Self> {
        let mut parsed = JsonPointer::default();
        if pointer.is_empty() {
            return Some(parsed);
        }
        let mut segments = pointer.split(PATH_SEPARATOR);
        if !segments.next()?.is_empty() {
            return None;
        }
        for segment in segments {
            parsed.push_name(Self::decode_segment(segment)?);
        }
        Some(parsed)
    }

    /// Decode `~1` and `~0` escapes within a single segment
    fn decode_segment(segment: &'a str) -> Option<Cow<'a, str>> {
        if !segment.contains('~') {
            return Some(Cow::Borrowed(segment));
        }
        let mut decoded = String::with_capacity(segment.len());
        let mut chars = segment.chars();
        while let Some(c) = chars.next() {
            if c == '~' {
                match chars.next()? {
                    '0' => decoded.push('~'),
                    '1' => decoded.push('/'),
                    _ => return None,
                }
            } else {
                decoded.push(c);
            }
        }
        Some(Cow::Owned(decoded))
    }

    /// Interpret a segment as an array index. Leading zeros aren't allowed by the RFC.
    pub fn parse_index(segment: &str) -> Option<usize> {
        if segment.is_empty()
            || (segment.len() > 1 && segment.starts_with('0'))
            || !segment.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }
        segment.parse().ok()
    }

    /// Returns the number of [JsonPointerComponent]s within the pointer
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Checks whether the pointer is the empty pointer
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// The components of the pointer, in order
    pub fn components(&self) -> &[JsonPointerComponent<'a>] {
        &self.components
    }

    /// Push a new [JsonPointerComponent::Name] onto the end of the pointer
    pub fn push_name<S: Into<Cow<'a, str>>>(&mut self, name: S) {
        if self.is_empty() {
            self.components.push(JsonPointerComponent::Root)
        }
        self.components.push(JsonPointerComponent::Name(name.into()))
    }

    /// Push a new [JsonPointerComponent::Index] onto the end of the pointer
    pub fn push_index(&mut self, index: usize) {
        if self.is_empty() {
            self.components.push(JsonPointerComponent::Root)
        }
        self.components.push(JsonPointerComponent::Index(index))
    }

    /// Pop the last component off the back of the pointer
    pub fn pop(&mut self) -> Option<JsonPointerComponent<'a>> {
        let popped = self.components.pop();
        if self.components == [JsonPointerComponent::Root] {
            self.components.clear();
        }
        popped
    }

    /// Serialise the pointer into a string representation that's compliant with RFC 6901
    pub fn as_string(&self) -> String {
        self.components
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<String>>()
            .join("/")
    }
}

impl<'a> Display for JsonPointer<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
