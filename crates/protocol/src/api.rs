//! Endpoint paths, relative to the backend base URL.

/// Multipart document upload, field `file`.
pub const UPLOAD: &str = "/upload";
/// Stateless chat turn.
pub const CHAT: &str = "/chat";
/// Create a general advisor session.
pub const SESSION_GENERAL: &str = "/chatbot/session/general";
/// Create a resume session, multipart field `resume_file`.
pub const SESSION_RESUME: &str = "/chatbot/session";
/// Send a message within a session.
pub const MESSAGE: &str = "/chatbot/message";
/// Score a resume against a job description.
pub const MATCH: &str = "/match";
/// Ask a question about a resume.
pub const QA: &str = "/qa";

/// Multipart field carrying a plain upload.
pub const FIELD_FILE: &str = "file";
/// Multipart field carrying a resume.
pub const FIELD_RESUME: &str = "resume_file";
/// Multipart field carrying a job description.
pub const FIELD_JOB_DESCRIPTION: &str = "job_description";
/// Multipart field carrying a question.
pub const FIELD_QUESTION: &str = "question";

/// `GET` the history of a session.
pub fn history(session_id: &str) -> String {
    format!("/chatbot/history/{session_id}")
}

/// `DELETE` a session.
pub fn session(session_id: &str) -> String {
    format!("/chatbot/session/{session_id}")
}

/// `GET` session metadata.
pub fn session_info(session_id: &str) -> String {
    format!("/chatbot/session/{session_id}/info")
}
