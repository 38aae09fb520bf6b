pub mod bresenham;
pub mod transform;

use std::path::Path;
use glam::Vec2;
use thiserror::Error;
use bresenham::{BresenhamCircleDrawer, LineRasterizer, LineStripRasterizer};
use transform::Transform;

/// Index into a [`Framebuffer`] palette.
pub type ColorIndex = u8;

pub mod palette {
    use super::ColorIndex;

    pub const BLACK: ColorIndex = 0;
    pub const WHITE: ColorIndex = 1;
    pub const RED: ColorIndex = 2;
    pub const BLUE: ColorIndex = 3;

    pub const DEFAULT: &[[u8; 3]] = &[
        [0, 0, 0],
        [255, 255, 255],
        [230, 41, 55],
        [0, 121, 241]
    ];
}

pub trait SizedSurface {
    fn get_width(&self) -> usize;
    fn get_height(&self) -> usize;
}

pub trait BufferProviderMut<T> {
    fn get_buffer_mut(&mut self) -> &mut [T];
}

/// Drawing primitives a game needs from whatever presents its frames.
pub trait Canvas {
    fn clear(&mut self, color: ColorIndex);
    fn draw_line(&mut self, from: Vec2, to: Vec2, color: ColorIndex);
    fn draw_circle(&mut self, center: Vec2, radius: f32, color: ColorIndex);
    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: ColorIndex);

    /// Closed outline of a local-space polygon placed by `transform`.
    fn draw_polygon(&mut self, points: &[Vec2], transform: Transform, color: ColorIndex) {
        for (ix, &point) in points.iter().enumerate() {
            let next = points[(ix + 1) % points.len()];
            self.draw_line(transform.apply(point), transform.apply(next), color);
        }
    }
}

#[derive(Error, Debug)]
pub enum FrameExportError {
    #[error("failed to encode frame: {0}")]
    Encoding(#[from] image::ImageError),
    #[error("frame of {width}x{height} does not fit an image")]
    BadDimensions { width: usize, height: usize }
}

/// Text placed on a frame. Glyphs are not rasterized; callers read the lines back.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLine {
    pub x: i32,
    pub y: i32,
    pub color: ColorIndex,
    pub text: String
}

/// Palettized software surface.
#[derive(Clone)]
pub struct Framebuffer {
    width: u16,
    height: u16,
    buffer: Vec<ColorIndex>,
    palette: Vec<[u8; 3]>,
    text_lines: Vec<TextLine>
}

impl Framebuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            buffer: vec![palette::BLACK; width as usize * height as usize],
            palette: palette::DEFAULT.to_vec(),
            text_lines: Vec::new()
        }
    }

    pub fn set_palette(&mut self, index: ColorIndex, new_value: [u8; 3]) {
        let index = index as usize;
        if index >= self.palette.len() {
            self.palette.resize(index + 1, [0, 0, 0]);
        }
        self.palette[index] = new_value;
    }

    pub fn get_pixel(&self, x: i32, y: i32) -> Option<ColorIndex> {
        if !(0..self.width as i32).contains(&x) || !(0..self.height as i32).contains(&y) {
            return None;
        }
        Some(self.buffer[x as usize + y as usize * self.width as usize])
    }

    pub fn put_pixel(&mut self, x: i32, y: i32, color: ColorIndex) {
        if (0..self.width as i32).contains(&x) && (0..self.height as i32).contains(&y) {
            self.buffer[x as usize + y as usize * self.width as usize] = color;
        }
    }

    pub fn count_pixels(&self, color: ColorIndex) -> usize {
        self.buffer.iter().filter(|&&it| it == color).count()
    }

    pub fn text_lines(&self) -> &[TextLine] {
        &self.text_lines
    }

    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.buffer
            .iter()
            .flat_map(|&ix| self.palette.get(ix as usize).copied().unwrap_or([0, 0, 0]))
            .collect()
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), FrameExportError> {
        let (width, height) = (self.width as usize, self.height as usize);
        let image = image::RgbImage::from_raw(self.width as u32, self.height as u32, self.to_rgb_bytes())
            .ok_or(FrameExportError::BadDimensions { width, height })?;
        image.save_with_format(path, image::ImageFormat::Png)?;
        Ok(())
    }
}

impl SizedSurface for Framebuffer {
    fn get_width(&self) -> usize { self.width as _ }

    fn get_height(&self) -> usize { self.height as _ }
}

impl BufferProviderMut<ColorIndex> for Framebuffer {
    fn get_buffer_mut(&mut self) -> &mut [ColorIndex] {
        &mut self.buffer
    }
}

impl Canvas for Framebuffer {
    fn clear(&mut self, color: ColorIndex) {
        for px in self.buffer.iter_mut() {
            *px = color;
        }
        self.text_lines.clear();
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, color: ColorIndex) {
        LineRasterizer::create(self)
            .from((from.x.floor() as i32, from.y.floor() as i32))
            .to((to.x.floor() as i32, to.y.floor() as i32))
            .rasterize(color);
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: ColorIndex) {
        BresenhamCircleDrawer::create(self)
            .with_position((center.x.floor() as i32, center.y.floor() as i32))
            .with_radius(radius.round() as i32)
            .draw(color);
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: ColorIndex) {
        self.text_lines.push(TextLine { x, y, color, text: text.to_owned() });
    }

    fn draw_polygon(&mut self, points: &[Vec2], transform: Transform, color: ColorIndex) {
        LineStripRasterizer::create(self)
            .with_transform(transform)
            .with_color(color)
            .rasterize_slice(true, points);
    }
}

#[cfg(test)]
mod tests {
    use glam::vec2;
    use super::*;

    #[test]
    fn line_endpoints_are_plotted() {
        let mut frame = Framebuffer::new(16, 16);
        frame.draw_line(vec2(1.0, 1.0), vec2(12.0, 7.0), palette::WHITE);
        assert_eq!(frame.get_pixel(1, 1), Some(palette::WHITE));
        assert_eq!(frame.get_pixel(12, 7), Some(palette::WHITE));
        assert_eq!(frame.count_pixels(palette::WHITE), 12);
    }

    #[test]
    fn drawing_is_clipped_to_the_surface() {
        let mut frame = Framebuffer::new(8, 8);
        frame.draw_line(vec2(-20.0, 3.0), vec2(20.0, 3.0), palette::RED);
        frame.draw_circle(vec2(0.0, 0.0), 30.0, palette::BLUE);
        assert_eq!(frame.count_pixels(palette::RED), 8);
        assert_eq!(frame.get_pixel(8, 3), None);
    }

    #[test]
    fn circle_is_symmetric() {
        let mut frame = Framebuffer::new(32, 32);
        frame.draw_circle(vec2(16.0, 16.0), 5.0, palette::WHITE);
        assert_eq!(frame.get_pixel(21, 16), Some(palette::WHITE));
        assert_eq!(frame.get_pixel(11, 16), Some(palette::WHITE));
        assert_eq!(frame.get_pixel(16, 21), Some(palette::WHITE));
        assert_eq!(frame.get_pixel(16, 11), Some(palette::WHITE));
        assert_eq!(frame.get_pixel(16, 16), Some(palette::BLACK));
    }

    #[test]
    fn clear_drops_text_and_pixels() {
        let mut frame = Framebuffer::new(4, 4);
        frame.put_pixel(1, 1, palette::WHITE);
        frame.draw_text(0, 0, "Health: 100", palette::WHITE);
        assert_eq!(frame.text_lines().len(), 1);
        frame.clear(palette::BLACK);
        assert!(frame.text_lines().is_empty());
        assert_eq!(frame.count_pixels(palette::BLACK), 16);
    }

    #[test]
    fn polygon_outline_matches_line_by_line_drawing() {
        let square = [vec2(-3.0, -3.0), vec2(3.0, -3.0), vec2(3.0, 3.0), vec2(-3.0, 3.0)];
        let transform = Transform::from_translation(vec2(8.0, 8.0));

        let mut strip = Framebuffer::new(16, 16);
        strip.draw_polygon(&square, transform, palette::WHITE);

        let mut lines = Framebuffer::new(16, 16);
        for ix in 0..square.len() {
            let next = square[(ix + 1) % square.len()];
            lines.draw_line(transform.apply(square[ix]), transform.apply(next), palette::WHITE);
        }

        assert_eq!(strip.count_pixels(palette::WHITE), 24);
        assert_eq!(strip.to_rgb_bytes(), lines.to_rgb_bytes());
        assert_eq!(strip.get_pixel(8, 8), Some(palette::BLACK));
    }

    #[test]
    fn rgb_bytes_follow_the_palette() {
        let mut frame = Framebuffer::new(2, 1);
        frame.set_palette(7, [1, 2, 3]);
        frame.put_pixel(1, 0, 7);
        assert_eq!(frame.to_rgb_bytes(), vec![0, 0, 0, 1, 2, 3]);
    }
}
