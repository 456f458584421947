use crate::utils::error::PromptUiError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// The closed set of components the engine knows how to describe.
///
/// Variant order is the emission priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Button,
    Input,
    Card,
    Navbar,
    Form,
    Hero,
    Gallery,
    Testimonial,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 8] = [
        ComponentKind::Button,
        ComponentKind::Input,
        ComponentKind::Card,
        ComponentKind::Navbar,
        ComponentKind::Form,
        ComponentKind::Hero,
        ComponentKind::Gallery,
        ComponentKind::Testimonial,
    ];

    /// Lowercase name, also the keyword used when extracting properties.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Input => "input",
            Self::Card => "card",
            Self::Navbar => "navbar",
            Self::Form => "form",
            Self::Hero => "hero",
            Self::Gallery => "gallery",
            Self::Testimonial => "testimonial",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = PromptUiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        ComponentKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == lowered)
            .ok_or_else(|| PromptUiError::UnknownComponentKind {
                kind: s.to_string(),
            })
    }
}

/// Named property values for one component.
///
/// A name mapped to `None` is "not found": the renderer substitutes its own
/// default. An empty string is a real value and is kept as such.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyBag {
    values: BTreeMap<String, Option<String>>,
}

impl PropertyBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Option<String>) {
        self.values.insert(name.into(), value);
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, Some(value.into()));
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).and_then(|v| v.as_deref())
    }

    /// True when the name is present and carries a value (possibly empty).
    pub fn is_set(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentDescriptor {
    kind: ComponentKind,
    properties: PropertyBag,
}

impl ComponentDescriptor {
    pub fn new(kind: ComponentKind, properties: PropertyBag) -> Self {
        Self { kind, properties }
    }

    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    pub fn properties(&self) -> &PropertyBag {
        &self.properties
    }

    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name)
    }
}

/// A descriptor whose kind has not been checked against [`ComponentKind`].
///
/// Descriptor lists read back from JSON use this shape so an unrecognised
/// kind reaches the code emitter instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawComponent {
    pub kind: String,
    #[serde(default)]
    pub properties: PropertyBag,
}

impl RawComponent {
    pub fn known_kind(&self) -> Option<ComponentKind> {
        self.kind.parse().ok()
    }
}

impl From<&ComponentDescriptor> for RawComponent {
    fn from(descriptor: &ComponentDescriptor) -> Self {
        Self {
            kind: descriptor.kind.as_str().to_string(),
            properties: descriptor.properties.clone(),
        }
    }
}

impl From<ComponentDescriptor> for RawComponent {
    fn from(descriptor: ComponentDescriptor) -> Self {
        Self {
            kind: descriptor.kind.as_str().to_string(),
            properties: descriptor.properties,
        }
    }
}
