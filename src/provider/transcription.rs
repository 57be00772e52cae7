// provider/transcription.rs
//
// Transcription provider trait (speech-to-text collaborator).

use async_trait::async_trait;

use super::{AudioSource, ProviderError};
use crate::align::TranscriptSegment;

/// Common interface for speech-to-text backends
///
/// Implementations are expected to return segments in chronological order
/// with valid intervals (non-negative, start <= end). An empty result is
/// legitimate for silent audio.
#[async_trait]
pub trait TranscriptionProvider: Send + Sync {
    /// Get the provider name (e.g., "whisper", "parakeet")
    fn provider_name(&self) -> &'static str;

    /// Transcribe the audio, optionally hinting the spoken language
    /// (ISO 639-1 code, e.g. "es")
    async fn transcribe(
        &self,
        audio: &AudioSource,
        language: Option<&str>,
    ) -> Result<Vec<TranscriptSegment>, ProviderError>;
}
