//! Interactive REPLs for the assistant and the dashboard, with persistent
//! line history.

use crate::terminal::{Mode, TermFrontend};
use anyhow::Result;
use client::Transport;
use controller::{AdvisorController, AssistantController};
use ncore::{ChatState, Panel};
use rustyline::error::ReadlineError;
use std::path::{Path, PathBuf};

/// One line typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input<'a> {
    /// `/quit`
    Quit,
    /// `/clear`
    Clear,
    /// `/full`
    Fullscreen,
    /// `/new`
    New,
    /// `/back`
    Back,
    /// `/start`
    Start,
    /// `/pick <n>`, 1-based.
    Pick(usize),
    /// `/upload <path>`
    Upload(&'a str),
    /// `/file <path>`
    File(&'a str),
    /// `/match <job description>`
    Match(&'a str),
    /// `/qa <question>`
    Qa(&'a str),
    /// A slash command that was not understood.
    Unknown(&'a str),
    /// Anything else.
    Text(&'a str),
}

/// Parse a prompt line.
pub fn parse(line: &str) -> Input<'_> {
    let line = line.trim();
    let Some(command) = line.strip_prefix('/') else {
        return Input::Text(line);
    };
    let (name, arg) = command
        .split_once(char::is_whitespace)
        .map(|(name, arg)| (name, arg.trim()))
        .unwrap_or((command, ""));
    match (name, arg) {
        ("quit" | "exit", _) => Input::Quit,
        ("clear", _) => Input::Clear,
        ("full", _) => Input::Fullscreen,
        ("new", _) => Input::New,
        ("back", _) => Input::Back,
        ("start", _) => Input::Start,
        ("pick", n) => n
            .parse()
            .ok()
            .filter(|n| *n > 0)
            .map_or(Input::Unknown(line), Input::Pick),
        ("upload", path) if !path.is_empty() => Input::Upload(path),
        ("file", path) if !path.is_empty() => Input::File(path),
        ("match", job) if !job.is_empty() => Input::Match(job),
        ("qa", question) if !question.is_empty() => Input::Qa(question),
        _ => Input::Unknown(line),
    }
}

/// The chip numbered `n` on screen.
fn chip(state: &ChatState, n: usize) -> Option<String> {
    state.chips().get(n - 1).map(|s| (*s).to_owned())
}

/// Line editor with history at `~/.config/nova/history`.
struct Editor {
    editor: rustyline::DefaultEditor,
    history_path: Option<PathBuf>,
}

impl Editor {
    fn new(keep_history: bool) -> Result<Self> {
        let mut editor = rustyline::DefaultEditor::new()?;
        let history_path = keep_history.then(history_file_path);
        if let Some(ref path) = history_path {
            let _ = editor.load_history(path);
        }
        Ok(Self {
            editor,
            history_path,
        })
    }

    /// Next non-empty line, or `None` on Ctrl+D.
    fn read(&mut self) -> Result<Option<String>> {
        loop {
            match self.editor.readline("> ") {
                Ok(line) => {
                    let line = line.trim().to_owned();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = self.editor.add_history_entry(&line);
                    return Ok(Some(line));
                }
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => return Ok(None),
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn save(&mut self) {
        if let Some(ref path) = self.history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = self.editor.save_history(path);
        }
    }
}

/// Resolve the history file path at `~/.config/nova/history`.
fn history_file_path() -> PathBuf {
    crate::prefs::config_dir().join("history")
}

const CHAT_HELP: &str = "/upload <path>  /pick <n>  /clear  /full  /quit";
const ADVISOR_HELP: &str =
    "advisor | resume | toolkit   /file <path>  /start  /match <job>  /qa <question>  /pick <n>  /back  /new  /full  /quit";

/// Assistant REPL.
pub struct ChatRepl<T: Transport> {
    controller: AssistantController<T, TermFrontend>,
    editor: Editor,
}

impl<T: Transport> ChatRepl<T> {
    /// Create a new REPL over `transport`.
    pub fn new(transport: T, keep_history: bool) -> Result<Self> {
        Ok(Self {
            controller: AssistantController::new(transport, TermFrontend::new(Mode::Screen)),
            editor: Editor::new(keep_history)?,
        })
    }

    /// Run the interactive REPL loop.
    pub async fn run(&mut self) -> Result<()> {
        self.controller.render();
        println!("{CHAT_HELP}");

        while let Some(line) = self.editor.read()? {
            let ctl = &mut self.controller;
            match parse(&line) {
                Input::Quit => break,
                Input::Clear => ctl.clear(),
                Input::Fullscreen => ctl.toggle_fullscreen(),
                Input::Upload(path) => {
                    ctl.upload(Path::new(path)).await;
                }
                Input::Pick(n) => match chip(ctl.state(), n) {
                    Some(text) => {
                        ctl.click_suggestion(&text).await;
                    }
                    None => println!("No suggestion {n}"),
                },
                Input::Text(text) => {
                    ctl.set_input(text);
                    ctl.send().await;
                }
                _ => println!("{CHAT_HELP}"),
            }
        }

        self.editor.save();
        Ok(())
    }
}

/// Dashboard REPL.
pub struct AdvisorRepl<T: Transport> {
    controller: AdvisorController<T, TermFrontend>,
    editor: Editor,
    /// Resume used by the toolkit commands.
    resume: Option<PathBuf>,
}

impl<T: Transport> AdvisorRepl<T> {
    /// Create a new REPL over `transport`.
    pub fn new(transport: T, keep_history: bool) -> Result<Self> {
        Ok(Self {
            controller: AdvisorController::new(transport, TermFrontend::new(Mode::Screen)),
            editor: Editor::new(keep_history)?,
            resume: None,
        })
    }

    /// Run the interactive REPL loop.
    pub async fn run(&mut self) -> Result<()> {
        self.controller.render();
        println!("{ADVISOR_HELP}");

        while let Some(line) = self.editor.read()? {
            let input = parse(&line);
            if input == Input::Quit {
                break;
            }
            self.handle(input).await;
        }

        self.editor.save();
        Ok(())
    }

    async fn handle(&mut self, input: Input<'_>) {
        let ctl = &mut self.controller;
        let panel = ctl.state().panel.clone();
        match (input, &panel) {
            (Input::Text("advisor"), Panel::Dashboard) => {
                ctl.open_advisor().await;
            }
            (Input::Text("resume"), Panel::Dashboard) => {
                ctl.open_resume_upload();
            }
            (Input::Text("toolkit"), Panel::Dashboard) => {
                self.resume = None;
                ctl.open_toolkit();
            }
            (Input::File(path), Panel::Toolkit) => {
                self.resume = Some(PathBuf::from(path));
                println!("Resume: {path}");
            }
            (Input::File(path), _) => {
                ctl.select_file(Some(PathBuf::from(path)));
            }
            (Input::Start, _) => {
                ctl.start_resume_chat().await;
            }
            (Input::Match(job), Panel::Toolkit) => {
                ctl.run_match(self.resume.as_deref(), job).await;
            }
            (Input::Qa(question), Panel::Toolkit) => {
                ctl.run_qa(self.resume.as_deref(), question).await;
            }
            (Input::Back, _) => {
                ctl.back();
            }
            (Input::New, _) => {
                ctl.new_chat();
            }
            (Input::Fullscreen, _) => ctl.toggle_fullscreen(),
            (Input::Pick(n), _) => match chip(ctl.state(), n) {
                Some(text) => {
                    ctl.click_suggestion(&text).await;
                }
                None => println!("No suggestion {n}"),
            },
            (Input::Text(text), Panel::AdvisorChat | Panel::ResumeChat) => {
                ctl.set_input(text);
                ctl.send().await;
            }
            _ => println!("{ADVISOR_HELP}"),
        }
    }
}
