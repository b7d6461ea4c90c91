//! Cairo image surface backing the drawing canvas.

use super::color::Color;
use super::font::FontDescriptor;
use super::render;
use super::surface::{CanvasSurface, StrokeStyle};
use crate::error::CanvasError;
use crate::util::Point;

/// Largest side length a canvas may be resized to.
pub const MAX_SIDE: u32 = 8192;

/// In-memory ARGB32 raster implementing [`CanvasSurface`].
pub struct CairoSurface {
    surface: cairo::ImageSurface,
    side: u32,
}

impl CairoSurface {
    /// Creates a cleared `side` x `side` surface.
    pub fn new(side: u32) -> Result<Self, CanvasError> {
        Ok(Self {
            surface: create_image_surface(side)?,
            side,
        })
    }

    fn context(&self) -> Result<cairo::Context, CanvasError> {
        Ok(cairo::Context::new(&self.surface)?)
    }

    /// Reads one pixel as straight (non-premultiplied) RGBA bytes.
    ///
    /// Returns `None` for coordinates outside the canvas.
    pub fn pixel_rgba(&mut self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.side || y >= self.side {
            return None;
        }

        self.surface.flush();
        let stride = self.surface.stride() as usize;
        let data = self.surface.data().ok()?;
        let offset = y as usize * stride + x as usize * 4;
        let bytes: [u8; 4] = data.get(offset..offset + 4)?.try_into().ok()?;

        // ARGB32 is a native-endian u32 with premultiplied color channels
        let argb = u32::from_ne_bytes(bytes);
        let a = (argb >> 24) as u8;
        let unpremultiply = |c: u32| -> u8 {
            if a == 0 {
                0
            } else {
                ((c & 0xff) * 255 / a as u32).min(255) as u8
            }
        };
        Some([
            unpremultiply(argb >> 16),
            unpremultiply(argb >> 8),
            unpremultiply(argb),
            a,
        ])
    }
}

fn create_image_surface(side: u32) -> Result<cairo::ImageSurface, CanvasError> {
    if side == 0 || side > MAX_SIDE {
        return Err(CanvasError::InvalidSize(format!(
            "{side} is outside 1..={MAX_SIDE}"
        )));
    }
    Ok(cairo::ImageSurface::create(
        cairo::Format::ARgb32,
        side as i32,
        side as i32,
    )?)
}

impl CanvasSurface for CairoSurface {
    fn side(&self) -> u32 {
        self.side
    }

    fn clear(&mut self) -> Result<(), CanvasError> {
        let ctx = self.context()?;
        render::clear_surface(&ctx)?;
        Ok(())
    }

    fn resize(&mut self, side: u32) -> Result<(), CanvasError> {
        self.surface = create_image_surface(side)?;
        self.side = side;
        self.clear()
    }

    fn stroke_line(
        &mut self,
        from: Point,
        to: Point,
        style: &StrokeStyle,
    ) -> Result<(), CanvasError> {
        let ctx = self.context()?;
        render::render_segment(&ctx, from, to, style)?;
        Ok(())
    }

    fn stroke_circle(
        &mut self,
        center: Point,
        radius: f64,
        style: &StrokeStyle,
    ) -> Result<(), CanvasError> {
        let ctx = self.context()?;
        render::render_circle(&ctx, center, radius, style)?;
        Ok(())
    }

    fn stroke_rect(
        &mut self,
        corner: Point,
        width: f64,
        height: f64,
        style: &StrokeStyle,
    ) -> Result<(), CanvasError> {
        let ctx = self.context()?;
        render::render_rect(&ctx, corner, width, height, style)?;
        Ok(())
    }

    fn draw_text(
        &mut self,
        origin: Point,
        text: &str,
        color: Color,
        font: &FontDescriptor,
    ) -> Result<(), CanvasError> {
        let ctx = self.context()?;
        render::render_text(&ctx, origin, text, color, font)?;
        Ok(())
    }

    fn export_png(&self) -> Result<Vec<u8>, CanvasError> {
        let mut buffer = Vec::new();
        self.surface.write_to_png(&mut buffer)?;
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, RED, WHITE};

    const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

    #[test]
    fn test_new_surface_is_square_and_transparent() {
        let mut surface = CairoSurface::new(32).unwrap();
        assert_eq!(surface.side(), 32);
        assert_eq!(surface.pixel_rgba(0, 0), Some([0, 0, 0, 0]));
        assert_eq!(surface.pixel_rgba(31, 31), Some([0, 0, 0, 0]));
        assert_eq!(surface.pixel_rgba(32, 0), None);
    }

    #[test]
    fn test_zero_and_oversized_sides_are_rejected() {
        assert!(matches!(
            CairoSurface::new(0),
            Err(CanvasError::InvalidSize(_))
        ));
        let mut surface = CairoSurface::new(16).unwrap();
        assert!(surface.resize(MAX_SIDE + 1).is_err());
        assert_eq!(surface.side(), 16);
    }

    #[test]
    fn test_horizontal_segment_covers_its_width() {
        let mut surface = CairoSurface::new(40).unwrap();
        surface
            .stroke_line(
                Point::new(10.0, 20.0),
                Point::new(30.0, 20.0),
                &StrokeStyle::round(6.0, BLACK),
            )
            .unwrap();

        assert_eq!(surface.pixel_rgba(20, 20), Some([0, 0, 0, 255]));
        assert_eq!(surface.pixel_rgba(20, 18), Some([0, 0, 0, 255]));
        assert_eq!(surface.pixel_rgba(20, 26), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_resize_discards_content() {
        let mut surface = CairoSurface::new(20).unwrap();
        surface
            .stroke_line(
                Point::new(0.0, 5.0),
                Point::new(20.0, 5.0),
                &StrokeStyle::round(4.0, RED),
            )
            .unwrap();
        assert_eq!(surface.pixel_rgba(10, 5), Some([255, 0, 0, 255]));

        surface.resize(25).unwrap();
        assert_eq!(surface.side(), 25);
        assert_eq!(surface.pixel_rgba(10, 5), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_clear_wipes_to_transparent() {
        let mut surface = CairoSurface::new(20).unwrap();
        surface
            .stroke_rect(
                Point::new(2.0, 2.0),
                10.0,
                10.0,
                &StrokeStyle::round(4.0, WHITE),
            )
            .unwrap();
        assert_eq!(surface.pixel_rgba(2, 6), Some([255, 255, 255, 255]));

        surface.clear().unwrap();
        assert_eq!(surface.pixel_rgba(2, 6), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_negative_rect_draws_towards_origin() {
        let mut surface = CairoSurface::new(40).unwrap();
        surface
            .stroke_rect(
                Point::new(30.0, 30.0),
                -20.0,
                -20.0,
                &StrokeStyle::round(2.0, BLACK),
            )
            .unwrap();
        // Left edge of the rectangle sits at x = 10
        assert_eq!(surface.pixel_rgba(10, 20).map(|p| p[3]), Some(255));
        assert_eq!(surface.pixel_rgba(20, 20), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_export_of_blank_canvas_is_png() {
        let surface = CairoSurface::new(8).unwrap();
        let png = surface.export_png().unwrap();
        assert!(png.len() > PNG_SIGNATURE.len());
        assert_eq!(&png[0..8], &PNG_SIGNATURE);
    }
}
