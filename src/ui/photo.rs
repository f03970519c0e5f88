// Photo widget.
// Draws an RGB image with upper-half-block cells, scaled to cover the area.

use image::RgbImage;
use ratatui::{prelude::*, widgets::Widget};

/// Two vertical pixels per cell: foreground on top, background below.
const HALF_BLOCK: &str = "▀";

/// Renders an image filling its whole area, center-cropped.
pub struct PhotoWidget<'a> {
    image: &'a RgbImage,
}

impl<'a> PhotoWidget<'a> {
    pub fn new(image: &'a RgbImage) -> Self {
        Self { image }
    }

    fn color_at(&self, dst: (u32, u32), at: (u32, u32)) -> Color {
        let (x, y) = cover_sample(self.image.dimensions(), dst, at);
        let [r, g, b] = self.image.get_pixel(x, y).0;
        Color::Rgb(r, g, b)
    }
}

impl Widget for PhotoWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (width, height) = self.image.dimensions();
        if width == 0 || height == 0 || area.is_empty() {
            return;
        }

        let dst = (u32::from(area.width), u32::from(area.height) * 2);
        for row in 0..area.height {
            for col in 0..area.width {
                let x = u32::from(col);
                let y = u32::from(row) * 2;
                let top = self.color_at(dst, (x, y));
                let bottom = self.color_at(dst, (x, y + 1));
                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_symbol(HALF_BLOCK).set_fg(top).set_bg(bottom);
                }
            }
        }
    }
}

/// Map a destination pixel to a source pixel so the source covers the
/// destination grid: scaled until both axes fill it, then center-cropped.
/// All dimensions must be non-zero.
pub fn cover_sample(src: (u32, u32), dst: (u32, u32), at: (u32, u32)) -> (u32, u32) {
    let (src_w, src_h) = (f64::from(src.0), f64::from(src.1));
    let (dst_w, dst_h) = (f64::from(dst.0), f64::from(dst.1));

    // Source pixels per destination pixel along the limiting axis
    let step = f64::min(src_w / dst_w, src_h / dst_h);
    let offset_x = (src_w - dst_w * step) / 2.0;
    let offset_y = (src_h - dst_h * step) / 2.0;

    let x = offset_x + (f64::from(at.0) + 0.5) * step;
    let y = offset_y + (f64::from(at.1) + 0.5) * step;
    ((x as u32).min(src.0 - 1), (y as u32).min(src.1 - 1))
}
