// output/text.rs
//
// Plain-text transcript rendering.

use std::fmt::Write;

use crate::align::LabeledSegment;
use crate::pipeline::TranscriptDocument;

/// Display label for segments no diarization turn overlapped
pub const UNKNOWN_SPEAKER: &str = "Unknown";

/// Render a transcript document as plain text, one segment per line.
///
/// Flat form:
/// ```text
/// SPEAKER_00: hello everyone
/// SPEAKER_01: hi
/// ```
///
/// Banded form prefixes each band with its minute-range heading:
/// ```text
/// --- Band 1: minute 0 to 10 ---
/// SPEAKER_00: hello everyone
/// ```
pub fn render_transcript(document: &TranscriptDocument) -> String {
    let mut out = String::new();
    match document {
        TranscriptDocument::Flat(segments) => {
            for segment in segments {
                push_segment_line(&mut out, segment);
            }
        }
        TranscriptDocument::Banded(bands) => {
            for (index, band) in bands.iter().enumerate() {
                let _ = writeln!(
                    out,
                    "\n--- Band {}: minute {} to {} ---",
                    index + 1,
                    band.start_minute,
                    band.end_minute
                );
                for segment in &band.segments {
                    push_segment_line(&mut out, segment);
                }
            }
        }
    }
    out
}

fn push_segment_line(out: &mut String, segment: &LabeledSegment) {
    let speaker = segment.speaker.as_deref().unwrap_or(UNKNOWN_SPEAKER);
    let _ = writeln!(out, "{}: {}", speaker, segment.text.trim());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::Band;

    fn labeled(speaker: Option<&str>, text: &str, start: f64, end: f64) -> LabeledSegment {
        LabeledSegment {
            speaker: speaker.map(str::to_string),
            text: text.to_string(),
            start,
            end,
        }
    }

    #[test]
    fn test_flat_rendering() {
        let document = TranscriptDocument::Flat(vec![
            labeled(Some("SPEAKER_00"), " hello everyone", 0.0, 5.0),
            labeled(Some("SPEAKER_01"), "hi", 6.0, 7.0),
        ]);

        let text = render_transcript(&document);
        assert_eq!(text, "SPEAKER_00: hello everyone\nSPEAKER_01: hi\n");
    }

    #[test]
    fn test_unlabeled_segment_renders_unknown() {
        let document = TranscriptDocument::Flat(vec![labeled(None, "noise", 0.0, 1.0)]);

        let text = render_transcript(&document);
        assert_eq!(text, "Unknown: noise\n");
    }

    #[test]
    fn test_banded_rendering_includes_headings() {
        let document = TranscriptDocument::Banded(vec![
            Band {
                segments: vec![labeled(Some("SPEAKER_00"), "first", 0.0, 30.0)],
                start_minute: 0,
                end_minute: 1,
            },
            Band {
                segments: vec![labeled(Some("SPEAKER_01"), "later", 700.0, 760.0)],
                start_minute: 11,
                end_minute: 13,
            },
        ]);

        let text = render_transcript(&document);
        assert!(text.contains("--- Band 1: minute 0 to 1 ---"));
        assert!(text.contains("--- Band 2: minute 11 to 13 ---"));
        assert!(text.contains("SPEAKER_00: first\n"));
        assert!(text.contains("SPEAKER_01: later\n"));
    }

    #[test]
    fn test_empty_document_renders_empty_string() {
        let document = TranscriptDocument::Flat(vec![]);
        assert_eq!(render_transcript(&document), "");
    }
}
