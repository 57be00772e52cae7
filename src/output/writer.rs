// output/writer.rs
//
// Transcript file writing.

use anyhow::Result;
use chrono::Utc;
use log::info;
use std::path::{Path, PathBuf};

use super::text::render_transcript;
use super::utils::sanitize_filename;
use crate::pipeline::TranscriptDocument;

/// Resolve the folder to write into, creating a per-meeting subfolder when
/// a meeting name is given.
fn resolve_output_folder(output_path: &Path, meeting_name: Option<&str>) -> Result<PathBuf> {
    if let Some(name) = meeting_name {
        let meeting_folder = output_path.join(sanitize_filename(name));
        if !meeting_folder.exists() {
            std::fs::create_dir_all(&meeting_folder)?;
        }
        Ok(meeting_folder)
    } else {
        Ok(output_path.to_path_buf())
    }
}

/// Write a transcript document to a timestamped plain-text file.
///
/// Returns the path of the written file.
pub fn write_transcript_to_file(
    document: &TranscriptDocument,
    output_path: &Path,
    meeting_name: Option<&str>,
) -> Result<String> {
    let timestamp = Utc::now().format("%Y-%m-%d_%H-%M-%S").to_string();
    let folder = resolve_output_folder(output_path, meeting_name)?;

    let file_path = folder.join(format!("transcript_{}.txt", timestamp));
    std::fs::write(&file_path, render_transcript(document))?;

    info!("Wrote transcript to {}", file_path.display());
    Ok(file_path.to_string_lossy().to_string())
}

/// Write a structured transcript with timestamps to a JSON file.
///
/// Returns the path of the written file.
pub fn write_transcript_json_to_file(
    document: &TranscriptDocument,
    output_path: &Path,
    meeting_name: Option<&str>,
    audio_filename: &str,
) -> Result<String> {
    use serde_json::json;

    let timestamp = Utc::now().format("%Y-%m-%d_%H-%M-%S").to_string();
    let folder = resolve_output_folder(output_path, meeting_name)?;

    let file_path = folder.join(format!("transcript_{}.json", timestamp));

    let transcript_json = json!({
        "version": "1.0",
        "audio_file": audio_filename,
        "created_at": Utc::now().to_rfc3339(),
        "meeting_name": meeting_name,
        "segment_count": document.segment_count(),
        "transcript": document,
    });

    let json_string = serde_json::to_string_pretty(&transcript_json)?;
    std::fs::write(&file_path, json_string)?;

    info!("Wrote transcript JSON to {}", file_path.display());
    Ok(file_path.to_string_lossy().to_string())
}
