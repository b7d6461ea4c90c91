//! Cairo-based rendering functions for strokes, shapes and text.

use super::color::Color;
use super::font::FontDescriptor;
use super::surface::StrokeStyle;
use crate::util::Point;

/// Wipes the whole context to transparent.
pub fn clear_surface(ctx: &cairo::Context) -> Result<(), cairo::Error> {
    ctx.save()?;
    ctx.set_operator(cairo::Operator::Clear);
    ctx.paint()?;
    ctx.restore()
}

fn apply_style(ctx: &cairo::Context, style: &StrokeStyle) {
    let color = style.color;
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(style.width);
    ctx.set_line_cap(style.cap.into());
}

/// Render a single straight segment.
///
/// A zero-length segment with round caps leaves a dot of the stroke width,
/// which is how a click without a drag marks the canvas.
pub fn render_segment(
    ctx: &cairo::Context,
    from: Point,
    to: Point,
    style: &StrokeStyle,
) -> Result<(), cairo::Error> {
    apply_style(ctx, style);
    ctx.set_line_join(cairo::LineJoin::Round);

    ctx.move_to(from.x, from.y);
    ctx.line_to(to.x, to.y);
    ctx.stroke()
}

/// Render a full circle outline.
pub fn render_circle(
    ctx: &cairo::Context,
    center: Point,
    radius: f64,
    style: &StrokeStyle,
) -> Result<(), cairo::Error> {
    apply_style(ctx, style);

    ctx.new_path();
    ctx.arc(
        center.x,
        center.y,
        radius.max(0.0),
        0.0,
        2.0 * std::f64::consts::PI,
    );
    ctx.stroke()
}

/// Render a rectangle outline.
///
/// Cairo accepts negative extents and draws towards the opposite side, so
/// the signed drag size is passed through unchanged.
pub fn render_rect(
    ctx: &cairo::Context,
    corner: Point,
    width: f64,
    height: f64,
    style: &StrokeStyle,
) -> Result<(), cairo::Error> {
    apply_style(ctx, style);
    ctx.set_line_join(cairo::LineJoin::Miter);

    ctx.new_path();
    ctx.rectangle(corner.x, corner.y, width, height);
    ctx.stroke()
}

/// Renders text with its layout's top-left corner at `origin` using Pango.
///
/// Text containing newline characters is laid out across multiple lines.
pub fn render_text(
    ctx: &cairo::Context,
    origin: Point,
    text: &str,
    color: Color,
    font: &FontDescriptor,
) -> Result<(), cairo::Error> {
    ctx.save()?;
    ctx.set_antialias(cairo::Antialias::Best);

    let layout = pangocairo::functions::create_layout(ctx);
    let font_desc = pango::FontDescription::from_string(&font.to_pango_string());
    layout.set_font_description(Some(&font_desc));
    layout.set_text(text);

    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.move_to(origin.x, origin.y);
    pangocairo::functions::show_layout(ctx, &layout);

    ctx.restore()
}
