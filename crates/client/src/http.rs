//! reqwest-backed transport.
//!
//! `HttpTransport` wraps a `reqwest::Client` and the backend base URL. Every
//! call is a single attempt with no timeout; errors are classified by
//! [`HttpTransport::read`] into the [`Error`] taxonomy.

use crate::{
    error::{Error, Result},
    transport::{Extracted, Reply, SessionStart, Transport, Upload},
};
use ncore::Message;
use protocol::{
    Ack, ChatRequest, ChatResponse, ErrorBody, HistoryResponse, MatchResponse, MessageRequest,
    MessageResponse, QaResponse, SessionInfo, SessionResponse, UploadResponse, api,
};
use reqwest::{
    Client, Method, RequestBuilder, Response,
    header::{self, HeaderMap, HeaderValue},
    multipart::{Form, Part},
};
use serde::{Serialize, de::DeserializeOwned};

/// HTTP transport for the chat and resume-analysis backend.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    headers: HeaderMap,
    base_url: String,
}

impl HttpTransport {
    /// Create a transport against `base_url`; a trailing slash is ignored.
    pub fn new(client: Client, base_url: &str) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        Self {
            client,
            headers,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the backend's history for a session.
    pub async fn history(&self, session_id: &str) -> Result<Vec<Message>> {
        let response: HistoryResponse = self
            .call(self.request(Method::GET, &api::history(session_id)))
            .await?;
        Ok(into_messages(response.conversation_history))
    }

    /// Drop a session on the backend.
    pub async fn delete_session(&self, session_id: &str) -> Result<String> {
        let ack: Ack = self
            .call(self.request(Method::DELETE, &api::session(session_id)))
            .await?;
        Ok(ack.message)
    }

    /// Fetch session metadata.
    pub async fn session_info(&self, session_id: &str) -> Result<SessionInfo> {
        self.call(self.request(Method::GET, &api::session_info(session_id)))
            .await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{path}", self.base_url);
        tracing::debug!("{method} {url}");
        self.client.request(method, url).headers(self.headers.clone())
    }

    async fn post_json<R: DeserializeOwned>(&self, path: &str, body: &impl Serialize) -> Result<R> {
        if let Ok(body) = serde_json::to_string(body) {
            tracing::trace!("request: {body}");
        }
        self.call(self.request(Method::POST, path).json(body)).await
    }

    async fn post_form<R: DeserializeOwned>(&self, path: &str, form: Form) -> Result<R> {
        self.call(self.request(Method::POST, path).multipart(form))
            .await
    }

    async fn call<R: DeserializeOwned>(&self, request: RequestBuilder) -> Result<R> {
        let response = request.send().await.inspect_err(|e| {
            tracing::warn!("request failed: {e}");
        })?;
        Self::read(response).await
    }

    /// Classify a response: non-2xx becomes [`Error::Backend`] when the body
    /// names an error, [`Error::Status`] otherwise; an unparsable 2xx body
    /// becomes [`Error::Malformed`].
    async fn read<R: DeserializeOwned>(response: Response) -> Result<R> {
        let status = response.status();
        let text = response.text().await?;
        tracing::trace!("response ({status}): {text}");

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&text)
                .ok()
                .and_then(ErrorBody::message);
            return Err(match message {
                Some(message) => Error::Backend(message),
                None => Error::Status(status.as_u16()),
            });
        }

        serde_json::from_str(&text).map_err(|e| Error::Malformed(e.to_string()))
    }
}

fn part(upload: Upload) -> Part {
    Part::bytes(upload.bytes).file_name(upload.file_name)
}

fn into_messages(entries: Vec<protocol::HistoryEntry>) -> Vec<Message> {
    entries.into_iter().map(Into::into).collect()
}

impl Transport for HttpTransport {
    async fn chat(&self, message: &str, history: &[Message]) -> Result<String> {
        let body = ChatRequest::new(message, history);
        let response: ChatResponse = self.post_json(api::CHAT, &body).await?;
        match response {
            ChatResponse {
                response: Some(text),
                ..
            } => Ok(text),
            ChatResponse {
                error: Some(error), ..
            } => Err(Error::Backend(error)),
            _ => Err(Error::Missing("response")),
        }
    }

    async fn upload(&self, file: Upload) -> Result<Extracted> {
        let requested = file.file_name.clone();
        let form = Form::new().part(api::FIELD_FILE, part(file));
        let response: UploadResponse = self.post_form(api::UPLOAD, form).await?;
        match response {
            UploadResponse {
                content: Some(content),
                filename,
                ..
            } if !content.is_empty() => Ok(Extracted {
                file_name: filename.unwrap_or(requested),
                content,
            }),
            UploadResponse {
                error: Some(error), ..
            } => Err(Error::Backend(error)),
            _ => Err(Error::Missing("content")),
        }
    }

    async fn create_general_session(&self) -> Result<SessionStart> {
        let response: SessionResponse = self
            .call(self.request(Method::POST, api::SESSION_GENERAL))
            .await?;
        Ok(SessionStart {
            session_id: response.session_id,
            history: into_messages(response.conversation_history),
            suggestions: response.suggestions,
        })
    }

    async fn create_resume_session(&self, resume: Upload) -> Result<SessionStart> {
        let form = Form::new().part(api::FIELD_RESUME, part(resume));
        let response: SessionResponse = self.post_form(api::SESSION_RESUME, form).await?;
        Ok(SessionStart {
            session_id: response.session_id,
            history: into_messages(response.conversation_history),
            suggestions: response.suggestions,
        })
    }

    async fn send_message(&self, session_id: &str, message: &str) -> Result<Reply> {
        let body = MessageRequest {
            session_id: session_id.to_owned(),
            message: message.to_owned(),
        };
        let response: MessageResponse = self.post_json(api::MESSAGE, &body).await?;
        Ok(Reply {
            answer: response.answer,
            confidence: response.confidence,
            suggestions: response.suggestions,
            history: into_messages(response.conversation_history),
        })
    }

    async fn match_resume(&self, resume: Upload, job_description: &str) -> Result<f64> {
        let form = Form::new()
            .part(api::FIELD_RESUME, part(resume))
            .text(api::FIELD_JOB_DESCRIPTION, job_description.to_owned());
        let response: MatchResponse = self.post_form(api::MATCH, form).await?;
        Ok(response.match_score)
    }

    async fn ask(&self, resume: Upload, question: &str) -> Result<String> {
        let form = Form::new()
            .part(api::FIELD_RESUME, part(resume))
            .text(api::FIELD_QUESTION, question.to_owned());
        let response: QaResponse = self.post_form(api::QA, form).await?;
        Ok(response.answer)
    }
}
