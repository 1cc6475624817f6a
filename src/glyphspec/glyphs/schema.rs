//! Glyph type schemas.
//!
//! A [`GlyphSchema`] is the declared attribute table of one glyph type. Derived
//! types are built by copying their parent's schema and adding or overriding
//! entries, so a schema always holds the full resolved attribute set.

use crate::attributes::AttributeSpec;
use crate::units::UnitDefaults;

#[derive(Debug, Clone)]
pub struct GlyphSchema {
    /// Type name (e.g. `Circle`)
    pub name: &'static str,

    /// Public type tag written as `type` in the glyph spec, when it differs from the name
    tag: Option<&'static str>,

    /// Name of the schema this one was extended from
    pub parent: Option<&'static str>,

    /// Default unit string per category
    pub units: UnitDefaults,

    attributes: Vec<AttributeSpec>,
}

impl GlyphSchema {
    /// A schema with no parent and no attributes.
    pub fn root(name: &'static str) -> Self {
        Self {
            name,
            tag: None,
            parent: None,
            units: UnitDefaults::default(),
            attributes: Vec::new(),
        }
    }

    /// Start a derived schema: same attributes and units, new name, no tag.
    pub fn extend(&self, name: &'static str) -> Self {
        Self {
            name,
            tag: None,
            parent: Some(self.name),
            units: self.units,
            attributes: self.attributes.clone(),
        }
    }

    pub fn tagged(mut self, tag: &'static str) -> Self {
        self.tag = Some(tag);
        self
    }

    pub fn with_units(mut self, units: UnitDefaults) -> Self {
        self.units = units;
        self
    }

    /// Declare an attribute. Redeclaring an inherited name replaces that entry
    /// in place and leaves every other entry untouched.
    pub fn attr(mut self, spec: AttributeSpec) -> Self {
        match self.attributes.iter_mut().find(|a| a.name == spec.name) {
            Some(existing) => *existing = spec,
            None => self.attributes.push(spec),
        }
        self
    }

    /// The `type` value of the glyph spec: the declared tag, else the type name.
    pub fn tag(&self) -> &'static str {
        self.tag.unwrap_or(self.name)
    }

    pub fn attribute(&self, name: &str) -> Option<&AttributeSpec> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// All declared attributes in declaration order, inherited ones first.
    pub fn attributes(&self) -> &[AttributeSpec] {
        &self.attributes
    }

    pub fn attribute_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.attributes.iter().map(|a| a.name)
    }
}
