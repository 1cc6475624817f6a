//! Marker glyphs: a point at (`x`, `y`) drawn with a screen-space `size`.

use once_cell::sync::Lazy;

use super::schema::GlyphSchema;
use super::BASE_GLYPH;
use crate::attributes::{AttributeSpec, FieldDefault};
use crate::units::{UnitCategory, UnitSlot};

pub(super) const DEFAULT_SIZE: i64 = 4;

pub(super) fn line_color() -> AttributeSpec {
    AttributeSpec::value_wrapped("line_color", "black")
}

pub(super) fn fill_color() -> AttributeSpec {
    AttributeSpec::value_wrapped("fill_color", "gray")
}

pub(super) fn angle() -> AttributeSpec {
    AttributeSpec::position("angle").governed_by(UnitSlot::Angle)
}

pub(super) static MARKER: Lazy<GlyphSchema> = Lazy::new(|| {
    BASE_GLYPH
        .extend("Marker")
        .attr(AttributeSpec::position("x"))
        .attr(AttributeSpec::position("y"))
        .attr(
            AttributeSpec::field_or_value(
                "size",
                UnitCategory::Size,
                FieldDefault::number(DEFAULT_SIZE),
            )
            .governed_by(UnitSlot::Length),
        )
        .attr(line_color())
        .attr(fill_color())
});

pub(super) static CIRCLE: Lazy<GlyphSchema> = Lazy::new(|| {
    MARKER.extend("Circle").tagged("circle").attr(
        AttributeSpec::field_or_value(
            "radius",
            UnitCategory::Size,
            FieldDefault::number(DEFAULT_SIZE),
        )
        .governed_by(UnitSlot::Radius),
    )
});

pub(super) static SQUARE: Lazy<GlyphSchema> =
    Lazy::new(|| MARKER.extend("Square").tagged("square").attr(angle()));

macro_rules! plain_marker {
    ($($ident:ident => ($name:literal, $tag:literal)),* $(,)?) => {
        $(
            pub(super) static $ident: Lazy<GlyphSchema> =
                Lazy::new(|| MARKER.extend($name).tagged($tag));
        )*
    };
}

plain_marker! {
    TRIANGLE => ("Triangle", "triangle"),
    CROSS => ("Cross", "cross"),
    XMARKER => ("Xmarker", "x"),
    DIAMOND => ("Diamond", "diamond"),
    INVERTED_TRIANGLE => ("InvertedTriangle", "inverted_triangle"),
    SQUARE_X => ("SquareX", "square_x"),
    ASTERISK => ("Asterisk", "asterisk"),
    DIAMOND_CROSS => ("DiamondCross", "diamond_cross"),
    CIRCLE_CROSS => ("CircleCross", "circle_cross"),
    HEX_STAR => ("HexStar", "hexstar"),
    SQUARE_CROSS => ("SquareCross", "square_cross"),
    CIRCLE_X => ("CircleX", "circle_x"),
}
