// pipeline.rs
//
// End-to-end transcription pipeline: run both providers over one recording,
// align their timelines, and optionally group the result into bands.

use anyhow::Result;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::align::{assign_speakers, group_into_bands, Band, LabeledSegment, DEFAULT_BAND_SECONDS};
use crate::provider::{AudioSource, DiarizationProvider, TranscriptionProvider};

/// Options for a pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscribeOptions {
    /// Language hint for the transcription provider (ISO 639-1 code)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Expected speaker count hint for the diarization provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_speakers: Option<usize>,
    /// Whether to group the labeled transcript into time bands
    pub banding: bool,
    /// Band duration in seconds, used only when `banding` is set
    pub band_seconds: f64,
}

impl Default for TranscribeOptions {
    fn default() -> Self {
        Self {
            language: None,
            num_speakers: None,
            banding: false,
            band_seconds: DEFAULT_BAND_SECONDS,
        }
    }
}

/// Final transcript handed to rendering consumers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TranscriptDocument {
    /// Flat speaker-labeled segment sequence
    Flat(Vec<LabeledSegment>),
    /// Segments regrouped into display bands
    Banded(Vec<Band>),
}

impl TranscriptDocument {
    /// Total number of labeled segments, regardless of grouping
    pub fn segment_count(&self) -> usize {
        match self {
            TranscriptDocument::Flat(segments) => segments.len(),
            TranscriptDocument::Banded(bands) => {
                bands.iter().map(|band| band.segments.len()).sum()
            }
        }
    }
}

/// Run transcription and diarization over one recording and align the two
/// timelines into a speaker-labeled transcript.
pub async fn run_pipeline(
    transcriber: &dyn TranscriptionProvider,
    diarizer: &dyn DiarizationProvider,
    audio: &AudioSource,
    options: &TranscribeOptions,
) -> Result<TranscriptDocument> {
    info!(
        "Transcribing {} with provider '{}'",
        audio.path.display(),
        transcriber.provider_name()
    );
    let segments = transcriber
        .transcribe(audio, options.language.as_deref())
        .await?;
    info!("Transcription complete: {} segments", segments.len());

    info!(
        "Running diarization with provider '{}' (expected speakers: {:?})",
        diarizer.provider_name(),
        options.num_speakers
    );
    let turns = diarizer.diarize(audio, options.num_speakers).await?;
    if turns.is_empty() {
        warn!("Diarization returned no speaker turns; transcript will be unlabeled");
    } else {
        info!("Diarization complete: {} speaker turns", turns.len());
    }

    let labeled = assign_speakers(&segments, &turns);

    if options.banding {
        let bands = group_into_bands(labeled, options.band_seconds)?;
        debug!("Banding enabled: {} bands", bands.len());
        Ok(TranscriptDocument::Banded(bands))
    } else {
        Ok(TranscriptDocument::Flat(labeled))
    }
}
