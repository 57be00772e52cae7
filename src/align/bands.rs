// align/bands.rs
//
// Band grouper: partitions a labeled transcript into contiguous display
// bands of bounded duration for long-recording readability.

use log::debug;

use super::error::AlignError;
use super::types::{Band, LabeledSegment};

/// Default band duration in seconds (10 minutes)
pub const DEFAULT_BAND_SECONDS: f64 = 600.0;

/// Group labeled segments into contiguous time bands.
///
/// Single left-to-right pass with a running anchor: a new band opens when
/// the next segment starts at least `band_seconds` after the current band's
/// anchor. The anchor is the first segment's start of the current band, not
/// a multiple of `band_seconds`, so a dense run of segments is never split
/// mid-stream and a band may span more than `band_seconds`. Boundaries only
/// ever fall between segments.
///
/// Every input segment lands in exactly one band and relative order is
/// preserved. Empty input produces no bands.
pub fn group_into_bands(
    labeled: Vec<LabeledSegment>,
    band_seconds: f64,
) -> Result<Vec<Band>, AlignError> {
    // NaN fails the comparison too; a NaN anchor check would never close a band.
    if !(band_seconds > 0.0) || !band_seconds.is_finite() {
        return Err(AlignError::InvalidBandDuration(band_seconds));
    }

    let total = labeled.len();
    let mut bands: Vec<Band> = Vec::new();
    let mut current: Vec<LabeledSegment> = Vec::new();
    let mut band_start = 0.0_f64;

    for segment in labeled {
        if !current.is_empty() && segment.start - band_start >= band_seconds {
            bands.push(Band::from_segments(std::mem::take(&mut current)));
            band_start = segment.start;
        }
        current.push(segment);
    }
    if !current.is_empty() {
        bands.push(Band::from_segments(current));
    }

    debug!(
        "Grouped {} segments into {} bands ({}s threshold)",
        total,
        bands.len(),
        band_seconds
    );

    Ok(bands)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labeled(start: f64, end: f64, text: &str) -> LabeledSegment {
        LabeledSegment {
            speaker: Some("SPEAKER_00".to_string()),
            text: text.to_string(),
            start,
            end,
        }
    }

    #[test]
    fn test_rejects_invalid_band_duration() {
        assert_eq!(
            group_into_bands(vec![], 0.0),
            Err(AlignError::InvalidBandDuration(0.0))
        );
        assert!(group_into_bands(vec![], -5.0).is_err());
        assert!(group_into_bands(vec![], f64::NAN).is_err());
        assert!(group_into_bands(vec![], f64::INFINITY).is_err());
    }

    #[test]
    fn test_empty_input_yields_no_bands() {
        let bands = group_into_bands(vec![], DEFAULT_BAND_SECONDS).unwrap();
        assert!(bands.is_empty());
    }

    #[test]
    fn test_bands_are_anchored_to_band_start() {
        // Starts 0, 300, 650, 1200 with a 600s threshold: 650 is >= 600 past
        // the first anchor (0) and opens band two; 1200 is only 550 past the
        // new anchor (650) and stays.
        let segments = vec![
            labeled(0.0, 10.0, "a"),
            labeled(300.0, 310.0, "b"),
            labeled(650.0, 660.0, "c"),
            labeled(1200.0, 1210.0, "d"),
        ];

        let bands = group_into_bands(segments, 600.0).unwrap();
        assert_eq!(bands.len(), 2);

        let first: Vec<&str> = bands[0].segments.iter().map(|s| s.text.as_str()).collect();
        let second: Vec<&str> = bands[1].segments.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(first, vec!["a", "b"]);
        assert_eq!(second, vec!["c", "d"]);
    }

    #[test]
    fn test_dense_run_can_exceed_band_duration() {
        // A fixed grid at 600s would split these; the anchor-relative pass
        // keeps 590 with 0, then re-anchors at 1180.
        let segments = vec![
            labeled(0.0, 10.0, "a"),
            labeled(590.0, 600.0, "b"),
            labeled(1180.0, 1190.0, "c"),
        ];

        let bands = group_into_bands(segments, 600.0).unwrap();
        assert_eq!(bands.len(), 2);
        assert_eq!(bands[0].segments.len(), 2);
        assert_eq!(bands[1].segments[0].text, "c");
    }

    #[test]
    fn test_concatenated_bands_reproduce_input() {
        let segments: Vec<LabeledSegment> = (0..12)
            .map(|i| labeled(i as f64 * 200.0, i as f64 * 200.0 + 50.0, "s"))
            .collect();
        let original = segments.clone();

        let bands = group_into_bands(segments, 600.0).unwrap();
        let rejoined: Vec<LabeledSegment> = bands
            .into_iter()
            .flat_map(|band| band.segments)
            .collect();
        assert_eq!(rejoined, original);
    }

    #[test]
    fn test_minute_range_per_band() {
        let segments = vec![labeled(0.0, 300.0, "a"), labeled(300.0, 430.0, "b")];

        let bands = group_into_bands(segments, DEFAULT_BAND_SECONDS).unwrap();
        assert_eq!(bands.len(), 1);
        assert_eq!(bands[0].start_minute, 0);
        // ceil(430 / 60) = 8
        assert_eq!(bands[0].end_minute, 8);
    }

    #[test]
    fn test_exact_threshold_opens_new_band() {
        // 600 - 0 >= 600, so the boundary segment starts a new band.
        let segments = vec![labeled(0.0, 10.0, "a"), labeled(600.0, 610.0, "b")];

        let bands = group_into_bands(segments, 600.0).unwrap();
        assert_eq!(bands.len(), 2);
    }
}
