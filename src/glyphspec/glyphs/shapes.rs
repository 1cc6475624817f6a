//! Non-marker glyphs. Each extends `BaseGlyph` directly and declares its own
//! coordinate attributes.

use once_cell::sync::Lazy;

use super::markers::{angle, fill_color, line_color};
use super::schema::GlyphSchema;
use super::BASE_GLYPH;
use crate::attributes::{AttributeSpec, FieldDefault};
use crate::units::{UnitCategory, UnitDefaults, UnitSlot};

const DIRECTIONS: &[&str] = &["clock", "anticlock"];

/// Radii of the wedge family are measured in data space.
const DATA_RADII: UnitDefaults = UnitDefaults::new("data", "data", "deg");

fn positions(schema: GlyphSchema, names: &[&'static str]) -> GlyphSchema {
    names
        .iter()
        .fold(schema, |schema, name| schema.attr(AttributeSpec::position(*name)))
}

fn extent(name: &'static str) -> AttributeSpec {
    AttributeSpec::position(name).governed_by(UnitSlot::Length)
}

fn radius(name: &'static str) -> AttributeSpec {
    AttributeSpec::field_or_value(name, UnitCategory::Size, FieldDefault::Null)
        .governed_by(UnitSlot::Radius)
}

fn angle_span(schema: GlyphSchema) -> GlyphSchema {
    schema
        .attr(AttributeSpec::position("start_angle").governed_by(UnitSlot::StartAngle))
        .attr(AttributeSpec::position("end_angle").governed_by(UnitSlot::EndAngle))
        .attr(AttributeSpec::enum_suppressed(
            "direction",
            "clock",
            DIRECTIONS,
        ))
}

pub(super) static LINE: Lazy<GlyphSchema> = Lazy::new(|| {
    positions(BASE_GLYPH.extend("Line").tagged("line"), &["x", "y"]).attr(line_color())
});

pub(super) static MULTI_LINE: Lazy<GlyphSchema> = Lazy::new(|| {
    positions(BASE_GLYPH.extend("MultiLine").tagged("multi_line"), &["xs", "ys"])
        .attr(line_color())
});

pub(super) static PATCH: Lazy<GlyphSchema> = Lazy::new(|| {
    positions(BASE_GLYPH.extend("Patch").tagged("patch"), &["x", "y"])
        .attr(line_color())
        .attr(fill_color())
});

pub(super) static PATCHES: Lazy<GlyphSchema> = Lazy::new(|| {
    positions(BASE_GLYPH.extend("Patches").tagged("patches"), &["xs", "ys"])
        .attr(line_color())
        .attr(fill_color())
});

pub(super) static QUAD: Lazy<GlyphSchema> = Lazy::new(|| {
    positions(
        BASE_GLYPH.extend("Quad").tagged("quad"),
        &["left", "right", "bottom", "top"],
    )
    .attr(line_color())
    .attr(fill_color())
});

fn rect_like(name: &'static str, tag: &'static str) -> GlyphSchema {
    positions(BASE_GLYPH.extend(name).tagged(tag), &["x", "y"])
        .attr(extent("width"))
        .attr(extent("height"))
        .attr(angle())
        .attr(line_color())
        .attr(fill_color())
}

pub(super) static RECT: Lazy<GlyphSchema> = Lazy::new(|| rect_like("Rect", "rect"));

pub(super) static OVAL: Lazy<GlyphSchema> = Lazy::new(|| rect_like("Oval", "oval"));

pub(super) static SEGMENT: Lazy<GlyphSchema> = Lazy::new(|| {
    positions(
        BASE_GLYPH.extend("Segment").tagged("segment"),
        &["x0", "y0", "x1", "y1"],
    )
    .attr(line_color())
});

pub(super) static BEZIER: Lazy<GlyphSchema> = Lazy::new(|| {
    positions(
        BASE_GLYPH.extend("Bezier").tagged("bezier"),
        &["x0", "y0", "x1", "y1", "cx0", "cy0", "cx1", "cy1"],
    )
    .attr(line_color())
});

pub(super) static QUADRATIC: Lazy<GlyphSchema> = Lazy::new(|| {
    positions(
        BASE_GLYPH.extend("Quadratic").tagged("quadratic"),
        &["x0", "y0", "x1", "y1", "cx", "cy"],
    )
    .attr(line_color())
    .attr(fill_color())
});

pub(super) static RAY: Lazy<GlyphSchema> = Lazy::new(|| {
    positions(BASE_GLYPH.extend("Ray").tagged("ray"), &["x", "y"])
        .attr(angle())
        .attr(extent("length"))
        .attr(line_color())
});

pub(super) static TEXT: Lazy<GlyphSchema> = Lazy::new(|| {
    positions(BASE_GLYPH.extend("Text").tagged("text"), &["x", "y"])
        .attr(angle())
        .attr(AttributeSpec::value_raw("text"))
});

pub(super) static WEDGE: Lazy<GlyphSchema> = Lazy::new(|| {
    let base = positions(BASE_GLYPH.extend("Wedge").tagged("wedge"), &["x", "y"])
        .with_units(DATA_RADII)
        .attr(radius("radius"));
    angle_span(base).attr(line_color()).attr(fill_color())
});

pub(super) static ARC: Lazy<GlyphSchema> = Lazy::new(|| {
    let base = positions(BASE_GLYPH.extend("Arc").tagged("arc"), &["x", "y"])
        .with_units(DATA_RADII)
        .attr(radius("radius"));
    angle_span(base).attr(line_color())
});

pub(super) static ANNULAR_WEDGE: Lazy<GlyphSchema> = Lazy::new(|| {
    let base = positions(
        BASE_GLYPH.extend("AnnularWedge").tagged("annular_wedge"),
        &["x", "y"],
    )
    .with_units(DATA_RADII)
    .attr(radius("inner_radius"))
    .attr(radius("outer_radius"));
    angle_span(base).attr(line_color()).attr(fill_color())
});

pub(super) static ANNULUS: Lazy<GlyphSchema> = Lazy::new(|| {
    positions(BASE_GLYPH.extend("Annulus").tagged("annulus"), &["x", "y"])
        .with_units(DATA_RADII)
        .attr(radius("inner_radius"))
        .attr(radius("outer_radius"))
        .attr(line_color())
        .attr(fill_color())
});

pub(super) static IMAGE_URI: Lazy<GlyphSchema> = Lazy::new(|| {
    positions(BASE_GLYPH.extend("ImageURI").tagged("image_uri"), &["x", "y"]).attr(angle())
});

pub(super) static IMAGE_RGBA: Lazy<GlyphSchema> = Lazy::new(|| {
    BASE_GLYPH
        .extend("ImageRGBA")
        .tagged("image_rgba")
        .attr(AttributeSpec::field_only("image", UnitCategory::Position))
        .attr(extent("width"))
        .attr(extent("height"))
        .attr(AttributeSpec::position("x"))
        .attr(AttributeSpec::position("y"))
        .attr(extent("dw"))
        .attr(extent("dh"))
});
