//! # Attribute System
//!
//! Every glyph attribute has a *kind* that decides how it can be assigned and
//! how it appears in the glyph spec. The kind lives in the glyph type's schema;
//! instances only hold a [`Binding`] per attribute.
//!
//! - **Values**: what can be assigned ([`AttrValue`])
//! - **Specifications**: the schema entry for one attribute ([`AttributeSpec`])
//! - **Bindings**: per-instance state and its resolved read view ([`AttrState`])
//! - **Envelopes**: the wire form of one attribute ([`Envelope`])
//!
//! ## Attribute Kinds
//!
//! | Kind | Examples | Serialized as |
//! |------|----------|---------------|
//! | `FieldOrValue` | `x`, `size`, `radius` | `{units, field}` / `{units, value}` |
//! | `FieldOnly` | `image` | `{units, field}` |
//! | `ValueWrapped` | `line_color`, `fill_color` | `{value}` |
//! | `ValueRaw` | `text` | bare scalar, omitted when unset |
//! | `EnumSuppressed` | `direction` | bare scalar, omitted when default |
//!
//! ## Usage
//!
//! ```ignore
//! let spec = AttributeSpec::position("x");
//! let binding = spec.kind.assign("x", AttrValue::from(20))?;
//! let json = spec.kind.envelope("x", &binding, "data").into_json();
//! ```

mod binding;
mod envelope;
mod spec;
mod value;

pub use binding::{AttrState, Binding};
pub use envelope::Envelope;
pub use spec::{AttributeKind, AttributeSpec, FieldDefault};
pub use value::AttrValue;
