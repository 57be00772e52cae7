// align/types.rs
//
// Value types shared by the overlap assigner and the band grouper.
// All timestamps are seconds from recording start, matching what the
// transcription and diarization providers emit.

use serde::{Deserialize, Serialize};

use super::error::AlignError;

/// A closed time interval over the recording timeline
///
/// Both endpoints are non-negative seconds with `start <= end`. Construction
/// validates the invariant; malformed intervals from a provider are a
/// contract violation and are rejected rather than clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeInterval {
    /// Start time in seconds
    pub start: f64,
    /// End time in seconds
    pub end: f64,
}

impl TimeInterval {
    /// Create a validated interval
    pub fn new(start: f64, end: f64) -> Result<Self, AlignError> {
        if !start.is_finite() || !end.is_finite() || start < 0.0 || end < start {
            return Err(AlignError::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    /// Duration in seconds
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Shared duration with another interval, zero if disjoint
    pub fn overlap(&self, other: &TimeInterval) -> f64 {
        (self.end.min(other.end) - self.start.max(other.start)).max(0.0)
    }
}

/// A time-stamped piece of transcribed text from the transcription provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    pub interval: TimeInterval,
    pub text: String,
}

impl TranscriptSegment {
    pub fn new(interval: TimeInterval, text: impl Into<String>) -> Self {
        Self {
            interval,
            text: text.into(),
        }
    }
}

/// A contiguous stretch of speech the diarization provider attributes to
/// one speaker
///
/// Multiple turns may carry the same speaker label. Turns are not guaranteed
/// non-overlapping or contiguous.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeakerTurn {
    pub interval: TimeInterval,
    /// Opaque speaker label (e.g., "SPEAKER_00")
    pub speaker: String,
}

impl SpeakerTurn {
    pub fn new(interval: TimeInterval, speaker: impl Into<String>) -> Self {
        Self {
            interval,
            speaker: speaker.into(),
        }
    }
}

/// A transcript segment with its assigned speaker
///
/// `speaker` is `None` exactly when no diarization turn overlapped the
/// segment at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledSegment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speaker: Option<String>,
    pub text: String,
    /// Seconds from recording start
    pub start: f64,
    /// Seconds from recording start
    pub end: f64,
}

/// A contiguous run of labeled segments grouped for display under one
/// time-range heading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Band {
    /// Member segments, in input order. Never empty.
    pub segments: Vec<LabeledSegment>,
    /// Whole minute of the first member's start (rounded down)
    pub start_minute: u64,
    /// Whole minute of the last member's end (rounded up)
    pub end_minute: u64,
}

impl Band {
    /// Build a band from a non-empty run of segments, deriving the display
    /// minute range from the first start and last end.
    pub(crate) fn from_segments(segments: Vec<LabeledSegment>) -> Self {
        debug_assert!(!segments.is_empty());
        let start_minute = (segments[0].start / 60.0).floor() as u64;
        let end_minute = (segments[segments.len() - 1].end / 60.0).ceil() as u64;
        Self {
            segments,
            start_minute,
            end_minute,
        }
    }
}
