// Asset handles
//
// Assets are decoded by the host application and injected into entities as
// typed handles. This module only defines the handles and the errors raised
// when an injected asset does not fit what an entity needs.

mod handle;

pub use handle::{AssetHandle, AssetId, SoundAsset, SoundHandle, TextureAsset, TextureHandle};

/// Asset validation errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AssetError {
    #[error("Invalid frame size: {width}x{height}")]
    InvalidFrameSize { width: u32, height: u32 },

    #[error(
        "Sprite sheet too small: need {needed_width}x{needed_height}, got {width}x{height}"
    )]
    SheetTooSmall {
        needed_width: u32,
        needed_height: u32,
        width: u32,
        height: u32,
    },
}
