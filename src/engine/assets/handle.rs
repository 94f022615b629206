// Type-safe asset handle system

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Unique identifier for an asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetId(pub(crate) u64);

impl AssetId {
    /// Derive an asset ID from its path
    pub fn from_path(path: &str) -> Self {
        let mut hasher = DefaultHasher::new();
        path.hash(&mut hasher);
        Self(hasher.finish())
    }

    /// Get the raw u64 value
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

/// Handle to an asset that was loaded by the host application
///
/// The entity core only stores and hands back handles; decoding and
/// playback stay on the host side. `T` keeps textures and sounds apart.
#[derive(Debug)]
pub struct AssetHandle<T> {
    id: AssetId,
    _phantom: PhantomData<T>,
}

impl<T> AssetHandle<T> {
    pub fn new(id: AssetId) -> Self {
        Self {
            id,
            _phantom: PhantomData,
        }
    }

    /// Handle for the asset stored at `path`
    pub fn from_path(path: &str) -> Self {
        Self::new(AssetId::from_path(path))
    }

    pub fn id(&self) -> AssetId {
        self.id
    }
}

// Manual impls: derives would require `T: Clone` etc. on the marker types
impl<T> Clone for AssetHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for AssetHandle<T> {}

impl<T> PartialEq for AssetHandle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for AssetHandle<T> {}

// Marker types for different asset types
#[derive(Debug)]
pub struct TextureAsset;
#[derive(Debug)]
pub struct SoundAsset;

pub type TextureHandle = AssetHandle<TextureAsset>;
pub type SoundHandle = AssetHandle<SoundAsset>;
