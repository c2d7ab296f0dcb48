/// Player picture loading.
///
/// The picture is optional. When it cannot be read the game logs a warning
/// and draws a placeholder figure instead.

use std::path::Path;

use image::imageops::FilterType;
use image::GenericImageView;
use log::warn;

use crate::entities::{PLAYER_HEIGHT, PLAYER_WIDTH};
use crate::error::SpriteError;

/// Pixels with less alpha than this are treated as transparent.
const ALPHA_CUTOFF: u8 = 128;

pub type Rgb = (u8, u8, u8);

#[derive(Clone, Debug, PartialEq)]
pub enum PlayerSprite {
    /// Picture scaled to the player's logical size, row-major,
    /// `None` where transparent.
    Image { width: u32, height: u32, pixels: Vec<Option<Rgb>> },
    /// Pink block with a face.
    Placeholder,
}

impl PlayerSprite {
    pub fn load(path: &Path) -> Result<Self, SpriteError> {
        let img = image::open(path).map_err(|source| SpriteError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        if img.width() == 0 || img.height() == 0 {
            return Err(SpriteError::Empty(path.to_path_buf()));
        }

        let (width, height) = (PLAYER_WIDTH as u32, PLAYER_HEIGHT as u32);
        let rgba = img.resize_exact(width, height, FilterType::Triangle).to_rgba8();
        let pixels = rgba
            .pixels()
            .map(|p| {
                let [r, g, b, a] = p.0;
                (a >= ALPHA_CUTOFF).then_some((r, g, b))
            })
            .collect();

        Ok(PlayerSprite::Image { width, height, pixels })
    }

    /// Never fails: a missing or broken picture yields the placeholder.
    pub fn load_or_placeholder(path: &Path) -> Self {
        match Self::load(path) {
            Ok(sprite) => sprite,
            Err(e) => {
                warn!("{e}; drawing the placeholder instead");
                PlayerSprite::Placeholder
            }
        }
    }

    /// Colour at a point inside the player's box, in logical pixels
    /// relative to its top-left corner.
    pub fn sample(&self, dx: i32, dy: i32) -> Option<Rgb> {
        match self {
            PlayerSprite::Image { width, height, pixels } => {
                if dx < 0 || dy < 0 || dx >= *width as i32 || dy >= *height as i32 {
                    return None;
                }
                pixels[(dy as u32 * width + dx as u32) as usize]
            }
            PlayerSprite::Placeholder => placeholder_pixel(dx, dy),
        }
    }
}

const PINK: Rgb = (255, 192, 203);
const BLACK: Rgb = (0, 0, 0);

fn placeholder_pixel(dx: i32, dy: i32) -> Option<Rgb> {
    if dx < 0 || dy < 0 || dx >= PLAYER_WIDTH || dy >= PLAYER_HEIGHT {
        return None;
    }
    let eye = (8..=10).contains(&dy) && ((13..=16).contains(&dx) || (19..=22).contains(&dx));
    let smile = (16..=18).contains(&dy) && (12..=22).contains(&dx);
    if eye || smile {
        Some(BLACK)
    } else {
        Some(PINK)
    }
}
