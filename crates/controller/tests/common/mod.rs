//! Scripted transport and recording frontend shared by the controller tests.

#![allow(dead_code)]

use client::{Error, Extracted, Reply, Result, SessionStart, Transport, Upload};
use ncore::{ChatState, Message};
use nova_controller::Frontend;
use std::{
    collections::VecDeque,
    path::PathBuf,
    sync::{Arc, Mutex},
};

/// Replies handed out in order, one per call.
#[derive(Default)]
struct Script {
    chat: VecDeque<Result<String>>,
    upload: VecDeque<Result<Extracted>>,
    session: VecDeque<Result<SessionStart>>,
    message: VecDeque<Result<Reply>>,
    score: VecDeque<Result<f64>>,
    answer: VecDeque<Result<String>>,
}

/// Everything the controller sent.
#[derive(Default, Debug)]
pub struct Calls {
    /// `(message, history)` per chat turn.
    pub chats: Vec<(String, Vec<Message>)>,
    /// File names per upload, session or tool run.
    pub files: Vec<String>,
    /// `(session id, message)` per session message.
    pub messages: Vec<(String, String)>,
    /// Job descriptions and questions passed to the tools.
    pub prompts: Vec<String>,
}

/// A transport answering from a script. Clones share the script.
#[derive(Clone, Default)]
pub struct FakeTransport {
    script: Arc<Mutex<Script>>,
    calls: Arc<Mutex<Calls>>,
}

fn next<T>(queue: &mut VecDeque<Result<T>>) -> Result<T> {
    queue
        .pop_front()
        .unwrap_or_else(|| Err(Error::Network("nothing scripted".to_owned())))
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chat(self, reply: Result<String>) -> Self {
        self.script.lock().unwrap().chat.push_back(reply);
        self
    }

    pub fn upload(self, reply: Result<Extracted>) -> Self {
        self.script.lock().unwrap().upload.push_back(reply);
        self
    }

    pub fn session(self, reply: Result<SessionStart>) -> Self {
        self.script.lock().unwrap().session.push_back(reply);
        self
    }

    pub fn message(self, reply: Result<Reply>) -> Self {
        self.script.lock().unwrap().message.push_back(reply);
        self
    }

    pub fn score(self, reply: Result<f64>) -> Self {
        self.script.lock().unwrap().score.push_back(reply);
        self
    }

    pub fn answer(self, reply: Result<String>) -> Self {
        self.script.lock().unwrap().answer.push_back(reply);
        self
    }

    pub fn calls(&self) -> std::sync::MutexGuard<'_, Calls> {
        self.calls.lock().unwrap()
    }
}

impl Transport for FakeTransport {
    async fn chat(&self, message: &str, history: &[Message]) -> Result<String> {
        self.calls
            .lock()
            .unwrap()
            .chats
            .push((message.to_owned(), history.to_vec()));
        next(&mut self.script.lock().unwrap().chat)
    }

    async fn upload(&self, file: Upload) -> Result<Extracted> {
        self.calls.lock().unwrap().files.push(file.file_name);
        next(&mut self.script.lock().unwrap().upload)
    }

    async fn create_general_session(&self) -> Result<SessionStart> {
        next(&mut self.script.lock().unwrap().session)
    }

    async fn create_resume_session(&self, resume: Upload) -> Result<SessionStart> {
        self.calls.lock().unwrap().files.push(resume.file_name);
        next(&mut self.script.lock().unwrap().session)
    }

    async fn send_message(&self, session_id: &str, message: &str) -> Result<Reply> {
        self.calls
            .lock()
            .unwrap()
            .messages
            .push((session_id.to_owned(), message.to_owned()));
        next(&mut self.script.lock().unwrap().message)
    }

    async fn match_resume(&self, resume: Upload, job_description: &str) -> Result<f64> {
        {
            let mut calls = self.calls.lock().unwrap();
            calls.files.push(resume.file_name);
            calls.prompts.push(job_description.to_owned());
        }
        next(&mut self.script.lock().unwrap().score)
    }

    async fn ask(&self, resume: Upload, question: &str) -> Result<String> {
        {
            let mut calls = self.calls.lock().unwrap();
            calls.files.push(resume.file_name);
            calls.prompts.push(question.to_owned());
        }
        next(&mut self.script.lock().unwrap().answer)
    }
}

/// A frontend that remembers what it was shown.
#[derive(Default)]
pub struct Recorder {
    pub renders: Vec<ChatState>,
    pub alerts: Vec<String>,
    pub prompts: Vec<String>,
    pub answer: bool,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A recorder that answers every confirmation with `answer`.
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            ..Self::default()
        }
    }
}

impl Frontend for Recorder {
    fn render(&mut self, state: &ChatState) {
        self.renders.push(state.clone());
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_owned());
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        self.prompts.push(prompt.to_owned());
        self.answer
    }
}

/// A session with a welcome message and suggestions.
pub fn session(id: &str) -> SessionStart {
    SessionStart {
        session_id: id.to_owned(),
        history: vec![Message::assistant("Welcome! How can I help with your career?")],
        suggestions: vec!["Review my resume".to_owned(), "Prepare for interviews".to_owned()],
    }
}

/// A reply with the given answer and confidence.
pub fn reply(answer: &str, confidence: Option<f32>) -> Reply {
    Reply {
        answer: answer.to_owned(),
        confidence,
        suggestions: vec!["Tell me more".to_owned()],
        history: vec![Message::assistant("server copy")],
    }
}

/// Write a file named `name` into a fresh temp dir.
pub fn file(name: &str, contents: &[u8]) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    (dir, path)
}
