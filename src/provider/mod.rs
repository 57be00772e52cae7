// provider/mod.rs
//
// Collaborator seams: async provider traits for the external speech-to-text
// and speaker-diarization engines, plus the shared audio handle and error
// types. No engine implementation lives in this crate; callers plug in
// their own backend behind these traits.
//
// Module structure:
// - transcription.rs: TranscriptionProvider trait
// - diarization.rs: DiarizationProvider trait

pub mod diarization;
pub mod transcription;

pub use diarization::DiarizationProvider;
pub use transcription::TranscriptionProvider;

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Handle to an audio recording both providers read from
///
/// Decoding is the provider's job; this crate only passes the handle
/// through.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioSource {
    /// Path to the audio file on disk
    pub path: PathBuf,
    /// Sample rate in Hz, if already known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_rate: Option<u32>,
}

impl AudioSource {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            sample_rate: None,
        }
    }
}

/// Error types for provider operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ProviderError {
    /// Provider not initialized (model not loaded, server not running)
    NotInitialized,
    /// Audio file missing, unreadable, or not decodable
    AudioUnreadable(String),
    /// The engine ran but failed to produce a result
    EngineFailed(String),
    /// Generic error
    Other(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::NotInitialized => write!(f, "Provider not initialized"),
            ProviderError::AudioUnreadable(msg) => write!(f, "Audio unreadable: {}", msg),
            ProviderError::EngineFailed(msg) => write!(f, "Engine failed: {}", msg),
            ProviderError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ProviderError {}
