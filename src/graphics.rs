use pixels::{Pixels, PixelsBuilder, SurfaceTexture};
use winit::window::Window;

use crate::font::FontRenderer;
use crate::game::Game;
use crate::game_state::ScreenState;
use crate::shape::{BoundingBox, Rgba, Shape};

const BACKGROUND: Rgba = [32, 32, 32, 255];
const TEXT_COLOR: [u8; 3] = [230, 230, 230];
const TITLE_COLOR: [u8; 3] = [255, 255, 0];

pub struct GraphicsRenderer {
    pixels: Pixels,
    width: u32,
    height: u32,
    font: Option<FontRenderer>,
    font_size: f32,
}

impl GraphicsRenderer {
    pub fn new(
        window: &Window,
        width: u32,
        height: u32,
        font: Option<FontRenderer>,
        font_size: f32,
    ) -> Result<Self, pixels::Error> {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, window);
        let pixels = PixelsBuilder::new(width, height, surface_texture)
            .enable_vsync(true)
            .build()?;

        Ok(Self {
            pixels,
            width,
            height,
            font,
            font_size,
        })
    }

    /// Maps a physical window position into frame-buffer pixels, clamping
    /// positions outside the buffer to its edge.
    pub fn window_pos_to_buffer(&self, x: f64, y: f64) -> (f32, f32) {
        let (px, py) = self
            .pixels
            .window_pos_to_pixel((x as f32, y as f32))
            .unwrap_or_else(|pos| self.pixels.clamp_pixel_pos(pos));
        (px as f32, py as f32)
    }

    pub fn render(&mut self, game: &Game) {
        let (width, height) = (self.width, self.height);
        let frame = self.pixels.frame_mut();
        clear(frame, BACKGROUND);

        match game.screen() {
            ScreenState::Play => {
                let grid = game.grid();
                // hover boxes sit under the tiles and show as a border
                for shape in grid.hover_boxes() {
                    draw_shape(frame, width, height, shape);
                }
                for tile in grid.tiles() {
                    draw_shape(frame, width, height, tile.shape());
                }
            }
            ScreenState::Start | ScreenState::Over => {
                if let Some(font) = &self.font {
                    draw_centered_lines(frame, font, &game.screen_lines(), width, height, self.font_size);
                }
            }
        }
    }

    pub fn present(&mut self) -> Result<(), pixels::Error> {
        self.pixels.render()
    }
}

fn clear(frame: &mut [u8], color: Rgba) {
    for pixel in frame.chunks_exact_mut(4) {
        pixel.copy_from_slice(&color);
    }
}

fn draw_shape(frame: &mut [u8], width: u32, height: u32, shape: &Shape) {
    match shape {
        Shape::Rect(_) => fill_box(frame, width, height, &shape.bounding_box(), shape.color()),
    }
}

/// Fills a y-up box into the y-down frame buffer. Pixels whose centre lies in
/// the box are covered.
fn fill_box(frame: &mut [u8], width: u32, height: u32, bb: &BoundingBox, color: Rgba) {
    let to_px = |v: f32, max: u32| (v.round().max(0.0) as u32).min(max);

    let x0 = to_px(bb.left, width);
    let x1 = to_px(bb.right, width);
    let y0 = to_px(height as f32 - bb.top, height);
    let y1 = to_px(height as f32 - bb.bottom, height);

    for py in y0..y1 {
        let row = (py * width) as usize;
        for px in x0..x1 {
            let index = (row + px as usize) * 4;
            if index + 3 < frame.len() {
                frame[index..index + 4].copy_from_slice(&color);
            }
        }
    }
}

fn draw_centered_lines(
    frame: &mut [u8],
    font: &FontRenderer,
    lines: &[String],
    width: u32,
    height: u32,
    font_size: f32,
) {
    let line_height = font.line_height(font_size);
    let block_height = line_height * lines.len() as f32;
    let mut y = (height as f32 - block_height) / 2.0;

    for (i, line) in lines.iter().enumerate() {
        let x = (width as f32 - font.text_width(line, font_size)).max(0.0) / 2.0;
        let color = if i == 0 { TITLE_COLOR } else { TEXT_COLOR };
        font.draw_text(frame, line, (x, y), color, width as usize, font_size);
        y += line_height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{Rect, RED};

    const W: u32 = 20;
    const H: u32 = 10;

    fn pixel(frame: &[u8], x: u32, y: u32) -> &[u8] {
        let i = ((y * W + x) * 4) as usize;
        &frame[i..i + 4]
    }

    #[test]
    fn clear_paints_every_pixel() {
        let mut frame = vec![0u8; (W * H * 4) as usize];
        clear(&mut frame, BACKGROUND);
        assert!(frame.chunks_exact(4).all(|p| p == BACKGROUND));
    }

    #[test]
    fn rect_is_flipped_into_buffer_rows() {
        let mut frame = vec![0u8; (W * H * 4) as usize];
        // 4x2 box hugging the bottom-left corner in y-up space
        let shape = Shape::Rect(Rect::new((2.0, 1.0), (4.0, 2.0), RED));
        draw_shape(&mut frame, W, H, &shape);

        assert_eq!(pixel(&frame, 0, H - 1), RED);
        assert_eq!(pixel(&frame, 3, H - 2), RED);
        assert_eq!(pixel(&frame, 4, H - 1), [0, 0, 0, 0]);
        assert_eq!(pixel(&frame, 0, H - 3), [0, 0, 0, 0]);
        let painted = frame.chunks_exact(4).filter(|p| *p == RED).count();
        assert_eq!(painted, 8);
    }

    #[test]
    fn boxes_outside_the_buffer_are_clipped() {
        let mut frame = vec![0u8; (W * H * 4) as usize];
        let shape = Shape::Rect(Rect::new((W as f32, H as f32), (10.0, 10.0), RED));
        draw_shape(&mut frame, W, H, &shape);
        let painted = frame.chunks_exact(4).filter(|p| *p == RED).count();
        assert_eq!(painted, 25);
    }
}
