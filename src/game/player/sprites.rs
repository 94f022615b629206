// Player sprite sheet layout

use super::action::PlayerAction;
use crate::engine::assets::{AssetError, TextureHandle};
use crate::engine::render::TextureRegion;

/// Frame regions for every player action, cut from one sheet
///
/// Row `r` of the sheet holds the frames of the action with
/// `sheet_row() == r`, laid out left to right. Wide actions use frames
/// `width_scale()` times the base width.
#[derive(Debug, Clone)]
pub struct PlayerSprites {
    sheet: TextureHandle,
    frames: [Vec<TextureRegion>; 7],
}

impl PlayerSprites {
    /// Slice a sheet of `sheet_width` x `sheet_height` pixels
    ///
    /// Fails if the sheet cannot hold every frame of every action.
    pub fn from_sheet(
        sheet: TextureHandle,
        sheet_width: u32,
        sheet_height: u32,
        frame_width: u32,
        frame_height: u32,
    ) -> Result<Self, AssetError> {
        if frame_width == 0 || frame_height == 0 {
            return Err(AssetError::InvalidFrameSize {
                width: frame_width,
                height: frame_height,
            });
        }

        let needed_width = PlayerAction::ALL
            .iter()
            .map(|&action| Self::scaled_width(action, frame_width) * action.frame_count() as u32)
            .max()
            .unwrap_or(0);
        let needed_height = frame_height * PlayerAction::ALL.len() as u32;

        if sheet_width < needed_width || sheet_height < needed_height {
            return Err(AssetError::SheetTooSmall {
                needed_width,
                needed_height,
                width: sheet_width,
                height: sheet_height,
            });
        }

        let frames = std::array::from_fn(|row| {
            let action = PlayerAction::ALL[row];
            let width = Self::scaled_width(action, frame_width);
            (0..action.frame_count() as u32)
                .map(|col| TextureRegion {
                    x: col * width,
                    y: row as u32 * frame_height,
                    width,
                    height: frame_height,
                })
                .collect()
        });

        Ok(Self { sheet, frames })
    }

    fn scaled_width(action: PlayerAction, frame_width: u32) -> u32 {
        (frame_width as f32 * action.width_scale()).round() as u32
    }

    pub fn sheet(&self) -> TextureHandle {
        self.sheet
    }

    pub fn frames(&self, action: PlayerAction) -> &[TextureRegion] {
        &self.frames[action.sheet_row()]
    }
}
