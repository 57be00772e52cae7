// provider/diarization.rs
//
// Diarization provider trait (speaker-turn collaborator).

use async_trait::async_trait;

use super::{AudioSource, ProviderError};
use crate::align::SpeakerTurn;

/// Common interface for speaker-diarization backends
///
/// Returned turns may overlap or leave gaps, and several turns may carry
/// the same speaker label. An empty result is not an error; downstream it
/// simply leaves every transcript segment unlabeled.
#[async_trait]
pub trait DiarizationProvider: Send + Sync {
    /// Get the provider name (e.g., "pyannote", "sortformer")
    fn provider_name(&self) -> &'static str;

    /// Identify speaker turns in the audio, optionally hinting how many
    /// distinct speakers to expect
    async fn diarize(
        &self,
        audio: &AudioSource,
        num_speakers: Option<usize>,
    ) -> Result<Vec<SpeakerTurn>, ProviderError>;
}
