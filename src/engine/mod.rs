// Engine modules: time, assets, audio, rendering, physics

pub mod assets;
pub mod audio;
pub mod clock;
pub mod physics;
pub mod render;
