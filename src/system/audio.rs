//! Looping background music via rodio.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use rodio::{Decoder, OutputStream, Sink, Source};
use tracing::{info, warn};

#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("Failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to decode audio: {0}")]
    Decode(#[from] rodio::decoder::DecoderError),

    #[error("Audio output unavailable: {0}")]
    Device(String),
}

/// A track looping forever on the default output device.
///
/// Playback stops when this value is dropped, so the application state owns it.
pub struct BackgroundMusic {
    /// Audio output stream (must be kept alive)
    _stream: OutputStream,
    sink: Sink,
}

impl std::fmt::Debug for BackgroundMusic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackgroundMusic")
            .field("paused", &self.sink.is_paused())
            .field("volume", &self.sink.volume())
            .finish()
    }
}

impl BackgroundMusic {
    /// Open `path`, decode it and start looping it at `volume` (1.0 = unchanged).
    pub fn start(path: &Path, volume: f32) -> Result<Self, AudioError> {
        // Decode before touching the device so a missing file fails fast.
        let file = File::open(path).map_err(|source| AudioError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let source = Decoder::new(BufReader::new(file))?;

        let (stream, stream_handle) = OutputStream::try_default()
            .map_err(|e| AudioError::Device(format!("Failed to open audio output: {e}")))?;
        let sink = Sink::try_new(&stream_handle)
            .map_err(|e| AudioError::Device(format!("Failed to create audio sink: {e}")))?;

        sink.set_volume(volume);
        sink.append(source.repeat_infinite());

        info!(path = %path.display(), volume, "Background music started");
        Ok(Self {
            _stream: stream,
            sink,
        })
    }

    /// Best-effort start: failures are logged and yield `None`.
    pub fn try_start(path: &Path, volume: f32) -> Option<Self> {
        match Self::start(path, volume) {
            Ok(music) => Some(music),
            Err(e) => {
                warn!(error = %e, "Background music disabled");
                None
            }
        }
    }
}
