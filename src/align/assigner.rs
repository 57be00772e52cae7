// align/assigner.rs
//
// Overlap assigner: labels each transcript segment with the speaker whose
// diarization turn shares the most time with it.

use log::debug;

use super::types::{LabeledSegment, SpeakerTurn, TranscriptSegment};

/// Assign a speaker to every transcript segment by maximal time overlap.
///
/// Output is 1:1 with `segments` and preserves their order. A segment that
/// overlaps no turn at all comes back with `speaker: None`; an empty turn
/// list therefore yields an entirely unlabeled transcript, not an error.
///
/// Each segment is scored against every turn, O(segments x turns). Both
/// collections are bounded by audio duration and speech density, so the
/// quadratic scan stays cheap; long-audio callers would want a sweep-line
/// join instead.
///
/// Ties are broken in favor of the turn that appears first in `turns`.
/// When diarization emits overlapping turns for different speakers (it can,
/// during overlapping speech), this input-order tie-break decides the label,
/// so results depend on the provider's turn ordering. Known limitation.
pub fn assign_speakers(
    segments: &[TranscriptSegment],
    turns: &[SpeakerTurn],
) -> Vec<LabeledSegment> {
    let labeled: Vec<LabeledSegment> = segments
        .iter()
        .map(|segment| label_segment(segment, turns))
        .collect();

    let unlabeled = labeled.iter().filter(|s| s.speaker.is_none()).count();
    if unlabeled > 0 {
        debug!(
            "Speaker assignment left {} of {} segments unlabeled",
            unlabeled,
            labeled.len()
        );
    }

    labeled
}

/// Label one segment against the full turn list
fn label_segment(segment: &TranscriptSegment, turns: &[SpeakerTurn]) -> LabeledSegment {
    let mut best_speaker: Option<&str> = None;
    let mut best_overlap = 0.0_f64;

    for turn in turns {
        let overlap = segment.interval.overlap(&turn.interval);
        // Strictly greater: the first turn with the maximal overlap wins,
        // and a zero-overlap turn can never displace None.
        if overlap > best_overlap {
            best_overlap = overlap;
            best_speaker = Some(turn.speaker.as_str());
        }
    }

    LabeledSegment {
        speaker: best_speaker.map(str::to_string),
        text: segment.text.clone(),
        start: segment.interval.start,
        end: segment.interval.end,
    }
}
