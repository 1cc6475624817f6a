//! # Glyph Type Hierarchy
//!
//! Every glyph type is a [`GlyphType`] variant backed by a process-wide
//! [`GlyphSchema`]. Schemas are built on first use and never change after that,
//! so every instance of a type shares one table by reference.
//!
//! ```text
//! BaseGlyph
//! ├── Marker (x, y, size, line_color, fill_color)
//! │   ├── Circle (+ radius)
//! │   ├── Square (+ angle)
//! │   └── Triangle, Cross, Xmarker, Diamond, ... (retagged only)
//! └── Line, MultiLine, Patch, Patches, Quad, Rect, Oval, Segment, Bezier,
//!     Quadratic, Ray, Text, Wedge, Arc, AnnularWedge, Annulus, ImageURI,
//!     ImageRGBA (each declares its own attributes)
//! ```
//!
//! `BaseGlyph` itself declares no bindable attributes; the plain attributes and
//! unit slots every glyph carries live on the instance (see `glyph`).

use once_cell::sync::Lazy;
use std::fmt;
use std::str::FromStr;

use crate::error::GlyphError;

mod markers;
mod schema;
mod shapes;

pub use schema::GlyphSchema;

pub(crate) static BASE_GLYPH: Lazy<GlyphSchema> = Lazy::new(|| GlyphSchema::root("BaseGlyph"));

macro_rules! glyph_types {
    ($($variant:ident => $schema:path),* $(,)?) => {
        /// A registered glyph type.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum GlyphType {
            $($variant),*
        }

        impl GlyphType {
            pub const ALL: &'static [GlyphType] = &[$(GlyphType::$variant),*];

            /// The type's resolved schema (inherited attributes included).
            pub fn schema(&self) -> &'static GlyphSchema {
                match self {
                    $(GlyphType::$variant => &*$schema),*
                }
            }
        }
    };
}

glyph_types! {
    BaseGlyph => BASE_GLYPH,
    Marker => markers::MARKER,
    Circle => markers::CIRCLE,
    Square => markers::SQUARE,
    Triangle => markers::TRIANGLE,
    Cross => markers::CROSS,
    Xmarker => markers::XMARKER,
    Diamond => markers::DIAMOND,
    InvertedTriangle => markers::INVERTED_TRIANGLE,
    SquareX => markers::SQUARE_X,
    Asterisk => markers::ASTERISK,
    DiamondCross => markers::DIAMOND_CROSS,
    CircleCross => markers::CIRCLE_CROSS,
    HexStar => markers::HEX_STAR,
    SquareCross => markers::SQUARE_CROSS,
    CircleX => markers::CIRCLE_X,
    Line => shapes::LINE,
    MultiLine => shapes::MULTI_LINE,
    Patch => shapes::PATCH,
    Patches => shapes::PATCHES,
    Quad => shapes::QUAD,
    Rect => shapes::RECT,
    Oval => shapes::OVAL,
    Segment => shapes::SEGMENT,
    Bezier => shapes::BEZIER,
    Quadratic => shapes::QUADRATIC,
    Ray => shapes::RAY,
    Text => shapes::TEXT,
    Wedge => shapes::WEDGE,
    Arc => shapes::ARC,
    AnnularWedge => shapes::ANNULAR_WEDGE,
    Annulus => shapes::ANNULUS,
    ImageURI => shapes::IMAGE_URI,
    ImageRGBA => shapes::IMAGE_RGBA,
}

impl GlyphType {
    /// Type name, e.g. `InvertedTriangle`.
    pub fn name(&self) -> &'static str {
        self.schema().name
    }

    /// Public tag written as `type`, e.g. `inverted_triangle`.
    pub fn tag(&self) -> &'static str {
        self.schema().tag()
    }

    /// Whether the type derives from `Marker`.
    pub fn is_marker(&self) -> bool {
        *self == GlyphType::Marker || self.schema().parent == Some(GlyphType::Marker.name())
    }
}

impl fmt::Display for GlyphType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts either the public tag (`circle`, `x`) or the type name (`Circle`).
impl FromStr for GlyphType {
    type Err = GlyphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GlyphType::ALL
            .iter()
            .copied()
            .find(|t| t.tag() == s)
            .or_else(|| GlyphType::ALL.iter().copied().find(|t| t.name() == s))
            .ok_or_else(|| GlyphError::UnknownGlyphType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn tags_are_unique() {
        let tags: HashSet<_> = GlyphType::ALL.iter().map(|t| t.tag()).collect();
        assert_eq!(tags.len(), GlyphType::ALL.len());
    }

    #[test]
    fn untagged_types_use_their_name() {
        assert_eq!(GlyphType::BaseGlyph.tag(), "BaseGlyph");
        assert_eq!(GlyphType::Marker.tag(), "Marker");
    }

    #[test]
    fn marker_tags() {
        let expected = [
            (GlyphType::Circle, "circle"),
            (GlyphType::Square, "square"),
            (GlyphType::Triangle, "triangle"),
            (GlyphType::Cross, "cross"),
            (GlyphType::Xmarker, "x"),
            (GlyphType::Diamond, "diamond"),
            (GlyphType::InvertedTriangle, "inverted_triangle"),
            (GlyphType::SquareX, "square_x"),
            (GlyphType::Asterisk, "asterisk"),
            (GlyphType::DiamondCross, "diamond_cross"),
            (GlyphType::CircleCross, "circle_cross"),
            (GlyphType::HexStar, "hexstar"),
            (GlyphType::SquareCross, "square_cross"),
            (GlyphType::CircleX, "circle_x"),
        ];
        for (glyph, tag) in expected {
            assert_eq!(glyph.tag(), tag);
            assert!(glyph.is_marker(), "{} should be a marker", glyph);
        }
    }

    #[test]
    fn shapes_are_not_markers() {
        assert!(!GlyphType::Wedge.is_marker());
        assert!(!GlyphType::BaseGlyph.is_marker());
        assert!(GlyphType::Marker.is_marker());
    }

    #[test]
    fn parse_by_tag_or_name() {
        assert_eq!("circle".parse::<GlyphType>().unwrap(), GlyphType::Circle);
        assert_eq!("Circle".parse::<GlyphType>().unwrap(), GlyphType::Circle);
        assert_eq!("x".parse::<GlyphType>().unwrap(), GlyphType::Xmarker);
        assert_eq!(
            "image_rgba".parse::<GlyphType>().unwrap(),
            GlyphType::ImageRGBA
        );
        assert!(matches!(
            "hexagon".parse::<GlyphType>(),
            Err(GlyphError::UnknownGlyphType(_))
        ));
    }

    #[test]
    fn base_glyph_has_no_bindable_attributes() {
        assert!(GlyphType::BaseGlyph.schema().attributes().is_empty());
    }
}
