//! Speaker-labeled transcript alignment for local meeting recordings.
//!
//! Takes two independently produced annotations of the same audio timeline
//! (time-stamped transcript segments from a speech-to-text provider, and
//! time-stamped speaker turns from a diarization provider) and assigns each
//! segment to the speaker turn it shares the most time with. Long transcripts
//! can optionally be regrouped into fixed-duration display bands.
//!
//! The engines themselves are external: callers plug a backend into the
//! [`provider::TranscriptionProvider`] and [`provider::DiarizationProvider`]
//! traits and hand both to [`pipeline::run_pipeline`]. The alignment core in
//! [`align`] is pure and usable on its own.

pub mod align;
pub mod output;
pub mod pipeline;
pub mod provider;

// Re-export the main public API
pub use align::{
    assign_speakers, group_into_bands, AlignError, Band, LabeledSegment, SpeakerTurn,
    TimeInterval, TranscriptSegment, DEFAULT_BAND_SECONDS,
};
pub use output::{render_transcript, write_transcript_json_to_file, write_transcript_to_file};
pub use pipeline::{run_pipeline, TranscribeOptions, TranscriptDocument};
pub use provider::{AudioSource, DiarizationProvider, ProviderError, TranscriptionProvider};
