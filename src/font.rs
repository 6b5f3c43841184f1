//! Font rendering with ab_glyph.
//!
//! Glyphs are rasterised straight into an RGBA frame buffer and alpha blended
//! over whatever is already there.

use ab_glyph::{point, Font, FontVec, PxScale, ScaleFont};
use std::path::{Path, PathBuf};

use crate::error::GameError;

/// Monospace fonts tried when no font is configured.
const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
    "/usr/share/fonts/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
    "/usr/share/fonts/liberation-mono/LiberationMono-Regular.ttf",
    "/System/Library/Fonts/Menlo.ttc",
    "/System/Library/Fonts/Monaco.ttf",
    "C:\\Windows\\Fonts\\consola.ttf",
    "C:\\Windows\\Fonts\\cour.ttf",
];

pub struct FontRenderer {
    font: FontVec,
    path: PathBuf,
}

impl FontRenderer {
    pub fn load(path: &Path) -> Result<Self, GameError> {
        let data = std::fs::read(path).map_err(|source| GameError::FontRead {
            path: path.to_path_buf(),
            source,
        })?;
        let font = FontVec::try_from_vec(data).map_err(|source| GameError::FontParse {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            font,
            path: path.to_path_buf(),
        })
    }

    /// Loads the configured font, or the first system font that parses.
    /// Returns `None` when nothing usable is found.
    pub fn discover(configured: Option<&Path>) -> Option<Self> {
        if let Some(path) = configured {
            match Self::load(path) {
                Ok(font) => return Some(font),
                Err(err) => log::warn!("{}", err),
            }
        }

        let found = SYSTEM_FONTS
            .iter()
            .map(Path::new)
            .filter(|path| path.exists())
            .find_map(|path| match Self::load(path) {
                Ok(font) => Some(font),
                Err(err) => {
                    log::debug!("Skipping font: {}", err);
                    None
                }
            });

        match &found {
            Some(font) => log::info!("Using font {}", font.path.display()),
            None => log::warn!("No usable font found, screen text will not be drawn"),
        }
        found
    }

    pub fn line_height(&self, px: f32) -> f32 {
        let scaled = self.font.as_scaled(PxScale::from(px));
        scaled.height() + scaled.line_gap()
    }

    pub fn text_width(&self, text: &str, px: f32) -> f32 {
        let scaled = self.font.as_scaled(PxScale::from(px));
        text.chars().map(|ch| scaled.h_advance(scaled.glyph_id(ch))).sum()
    }

    /// Draws `text` left-aligned with its top-left corner at `(x, y)`, y-down.
    pub fn draw_text(
        &self,
        frame: &mut [u8],
        text: &str,
        (x, y): (f32, f32),
        color: [u8; 3],
        frame_width: usize,
        px: f32,
    ) {
        let scaled = self.font.as_scaled(PxScale::from(px));
        let frame_height = frame.len() / (frame_width * 4);
        let baseline = y + scaled.ascent();
        let mut caret = x;

        for ch in text.chars() {
            let mut glyph = scaled.scaled_glyph(ch);
            glyph.position = point(caret, baseline);
            caret += scaled.h_advance(glyph.id);

            let Some(outlined) = self.font.outline_glyph(glyph) else {
                continue;
            };
            let bounds = outlined.px_bounds();

            outlined.draw(|gx, gy, coverage| {
                let fx = bounds.min.x as i32 + gx as i32;
                let fy = bounds.min.y as i32 + gy as i32;
                if fx < 0 || fy < 0 || fx as usize >= frame_width || fy as usize >= frame_height {
                    return;
                }

                let alpha = (coverage.clamp(0.0, 1.0) * 255.0) as u16;
                if alpha == 0 {
                    return;
                }
                let idx = (fy as usize * frame_width + fx as usize) * 4;
                let inv_alpha = 255 - alpha;
                for channel in 0..3 {
                    let blended = (frame[idx + channel] as u16 * inv_alpha + color[channel] as u16 * alpha) / 255;
                    frame[idx + channel] = blended as u8;
                }
                frame[idx + 3] = 255;
            });
        }
    }
}
