//! Tests for the single-screen assistant controller.

mod common;

use client::{Error, Extracted};
use common::{FakeTransport, Recorder, file};
use ncore::{Role, WELCOME_SUGGESTIONS};
use nova_controller::{
    AssistantController, SendOutcome,
    assistant::{CONNECTION_ERROR, UNSUPPORTED_FILE, UPLOAD_ERROR, UPLOAD_FAILED},
};

fn controller(transport: &FakeTransport) -> AssistantController<FakeTransport, Recorder> {
    AssistantController::new(transport.clone(), Recorder::new())
}

#[tokio::test]
async fn send_appends_user_then_reply() {
    let transport = FakeTransport::new().chat(Ok("Hello there".to_owned()));
    let mut ctl = controller(&transport);

    ctl.set_input("  hi  ");
    assert_eq!(ctl.send().await, SendOutcome::Replied);

    let messages = ctl.state().conversation.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, Role::User);
    assert_eq!(messages[0].content, "hi");
    assert_eq!(messages[1].role, Role::Assistant);
    assert_eq!(messages[1].content, "Hello there");
    assert!(ctl.state().ui.input.is_empty());
    assert!(!ctl.state().ui.loading);

    let calls = transport.calls();
    assert_eq!(calls.chats.len(), 1);
    assert_eq!(calls.chats[0].0, "hi");
    assert!(calls.chats[0].1.is_empty());
}

#[tokio::test]
async fn loading_is_shown_while_the_request_runs() {
    let transport = FakeTransport::new().chat(Ok("ok".to_owned()));
    let mut ctl = controller(&transport);

    ctl.set_input("hi");
    ctl.send().await;

    let renders = &ctl.frontend().renders;
    let first = renders.first().unwrap();
    assert!(first.ui.loading);
    assert_eq!(first.conversation.len(), 1);
    assert!(!renders.last().unwrap().ui.loading);
}

#[tokio::test]
async fn history_excludes_the_message_being_sent() {
    let transport = FakeTransport::new()
        .chat(Ok("first".to_owned()))
        .chat(Ok("second".to_owned()));
    let mut ctl = controller(&transport);

    ctl.set_input("one");
    ctl.send().await;
    ctl.set_input("two");
    ctl.send().await;

    let calls = transport.calls();
    let (message, history) = &calls.chats[1];
    assert_eq!(message, "two");
    let contents: Vec<_> = history.iter().map(|m| m.content.as_str()).collect();
    assert_eq!(contents, ["one", "first"]);
}

#[tokio::test]
async fn blank_input_is_skipped() {
    let transport = FakeTransport::new();
    let mut ctl = controller(&transport);

    ctl.set_input("   \n\t");
    assert_eq!(ctl.send().await, SendOutcome::Skipped);
    assert!(ctl.state().conversation.is_empty());
    assert!(transport.calls().chats.is_empty());
}

#[tokio::test]
async fn network_failure_appends_one_connection_error() {
    let transport =
        FakeTransport::new().chat(Err(Error::Network("connection refused".to_owned())));
    let mut ctl = controller(&transport);

    ctl.set_input("hello");
    assert_eq!(ctl.send().await, SendOutcome::Failed);

    let messages = ctl.state().conversation.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].content, "hello");
    assert_eq!(messages[1].role, Role::Assistant);
    assert_eq!(messages[1].content, CONNECTION_ERROR);
    assert!(!ctl.state().ui.loading);
}

#[tokio::test]
async fn backend_failure_quotes_the_error() {
    let transport = FakeTransport::new()
        .chat(Err(Error::Backend("quota exceeded".to_owned())))
        .chat(Err(Error::Missing("response")));
    let mut ctl = controller(&transport);

    ctl.set_input("a");
    ctl.send().await;
    ctl.set_input("b");
    ctl.send().await;

    let messages = ctl.state().conversation.messages();
    assert_eq!(
        messages[1].content,
        "Sorry, I encountered an error: quota exceeded"
    );
    assert_eq!(
        messages[3].content,
        "Sorry, I encountered an error: Unknown error"
    );
}

#[tokio::test]
async fn suggestion_click_sends_and_clears_input() {
    let transport = FakeTransport::new().chat(Ok("Quantum things are small.".to_owned()));
    let mut ctl = controller(&transport);
    assert_eq!(ctl.state().chips(), WELCOME_SUGGESTIONS.to_vec());

    let outcome = ctl
        .click_suggestion("Explain quantum mechanics simply")
        .await;

    assert_eq!(outcome, SendOutcome::Replied);
    assert_eq!(
        transport.calls().chats[0].0,
        "Explain quantum mechanics simply"
    );
    let first = &ctl.state().conversation.messages()[0];
    assert_eq!(first.role, Role::User);
    assert_eq!(first.content, "Explain quantum mechanics simply");
    assert!(ctl.state().ui.input.is_empty());
    assert!(ctl.state().chips().is_empty());
}

#[tokio::test]
async fn upload_then_chat_adds_exactly_two_messages() {
    let transport = FakeTransport::new()
        .upload(Ok(Extracted {
            file_name: "cv.pdf".to_owned(),
            content: "Ten years of Rust".to_owned(),
        }))
        .chat(Ok("This is a resume.".to_owned()));
    let mut ctl = controller(&transport);
    let (_dir, path) = file("cv.pdf", b"%PDF");

    assert!(ctl.upload(&path).await);

    let messages = ctl.state().conversation.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(
        messages[0].content,
        "Uploaded file: cv.pdf\n\n[System: Document content attached]"
    );
    assert_eq!(messages[1].content, "This is a resume.");

    let calls = transport.calls();
    assert_eq!(calls.files, ["cv.pdf"]);
    let (prompt, history) = &calls.chats[0];
    assert!(prompt.starts_with("I've uploaded a file named cv.pdf. Here is its content: Ten years of Rust."));
    assert!(history.is_empty());
}

#[tokio::test]
async fn rejected_extension_never_reaches_the_backend() {
    let transport = FakeTransport::new();
    let mut ctl = controller(&transport);
    let (_dir, path) = file("notes.txt", b"hello");

    assert!(!ctl.upload(&path).await);
    assert_eq!(ctl.frontend().alerts, [UNSUPPORTED_FILE]);
    assert!(transport.calls().files.is_empty());
}

#[tokio::test]
async fn upload_errors_are_alerted() {
    let transport = FakeTransport::new()
        .upload(Err(Error::Backend("Unsupported file format".to_owned())))
        .upload(Err(Error::Missing("content")))
        .upload(Err(Error::Malformed("expected value at line 1 column 1".to_owned())))
        .upload(Err(Error::Network("reset".to_owned())));
    let mut ctl = controller(&transport);
    let (_dir, path) = file("scan.PNG", b"\x89PNG");

    for _ in 0..4 {
        assert!(!ctl.upload(&path).await);
    }

    assert_eq!(
        ctl.frontend().alerts,
        ["Unsupported file format", UPLOAD_FAILED, UPLOAD_ERROR, UPLOAD_ERROR]
    );
    assert!(ctl.state().conversation.is_empty());
    assert!(!ctl.state().ui.loading);
}

#[tokio::test]
async fn clear_and_fullscreen() {
    let transport = FakeTransport::new().chat(Ok("ok".to_owned()));
    let mut ctl = controller(&transport);
    ctl.set_input("hi");
    ctl.send().await;

    ctl.toggle_fullscreen();
    assert!(ctl.state().ui.fullscreen);
    ctl.clear();
    assert!(ctl.state().conversation.is_empty());
    assert!(ctl.state().ui.fullscreen);
    ctl.toggle_fullscreen();
    assert!(!ctl.state().ui.fullscreen);
}
