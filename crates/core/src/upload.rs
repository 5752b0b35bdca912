//! Client-side upload filtering and prompt synthesis.

use std::path::Path;

/// File extensions offered for upload. The backend does its own checks.
pub const ACCEPTED_EXTENSIONS: [&str; 5] = ["pdf", "docx", "png", "jpg", "jpeg"];

/// Whether `path` has an accepted extension, ignoring case.
pub fn is_accepted(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            ACCEPTED_EXTENSIONS
                .iter()
                .any(|accepted| accepted.eq_ignore_ascii_case(ext))
        })
}

/// The user-visible message recorded for an upload.
pub fn upload_notice(file_name: &str) -> String {
    format!("Uploaded file: {file_name}\n\n[System: Document content attached]")
}

/// The chat prompt carrying the extracted document text verbatim.
pub fn upload_prompt(file_name: &str, content: &str) -> String {
    format!(
        "I've uploaded a file named {file_name}. Here is its content: {content}. \
         Please summarize it and tell me how you can help me with it."
    )
}
