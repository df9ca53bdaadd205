//! System interactions (audio output)

mod audio;

pub use audio::BackgroundMusic;
