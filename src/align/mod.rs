// align/mod.rs
//
// Temporal alignment core: assigns diarization speaker turns to transcript
// segments by maximal time overlap, and optionally groups the labeled
// result into fixed-duration display bands.
//
// Module structure:
// - types.rs: TimeInterval, TranscriptSegment, SpeakerTurn, LabeledSegment, Band
// - error.rs: AlignError taxonomy
// - assigner.rs: Overlap assignment (per-segment, pure)
// - bands.rs: Greedy band grouping (single ordered pass)

pub mod assigner;
pub mod bands;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use assigner::assign_speakers;
pub use bands::{group_into_bands, DEFAULT_BAND_SECONDS};
pub use error::AlignError;
pub use types::{Band, LabeledSegment, SpeakerTurn, TimeInterval, TranscriptSegment};
