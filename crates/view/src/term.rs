//! Paints a [`View`] onto a terminal with `console` styling.

use crate::tree::{Bubble, Node, View};
use console::style;
use ncore::{Role, StepStatus, Verdict};
use std::io::{self, Write};

const BAR_WIDTH: usize = 30;

/// Write `view` to `out`.
pub fn paint(view: &View, out: &mut impl Write) -> io::Result<()> {
    for node in &view.nodes {
        paint_node(node, out)?;
    }
    out.flush()
}

fn paint_node(node: &Node, out: &mut impl Write) -> io::Result<()> {
    match node {
        Node::Header { title, subtitle } => {
            writeln!(out, "{}", style(title).bold().magenta())?;
            writeln!(out, "{}", style(subtitle).dim())?;
            writeln!(out, "{}", style("─".repeat(BAR_WIDTH + 10)).dim())
        }
        Node::Welcome { title, body } => {
            writeln!(out)?;
            writeln!(out, "  {}", style(title).bold())?;
            writeln!(out, "  {}", style(body).dim())?;
            writeln!(out)
        }
        Node::Bubble(bubble) => paint_bubble(bubble, out),
        Node::Typing => writeln!(out, "{}", style("  ● ● ●").dim()),
        Node::Overlay(status) => writeln!(out, "\n  {}", style(status).cyan().bold()),
        Node::Chips(chips) => {
            for (i, chip) in chips.iter().enumerate() {
                writeln!(out, "  {} {chip}", style(format!("[{}]", i + 1)).cyan())?;
            }
            Ok(())
        }
        Node::Menu(items) => {
            for item in items {
                writeln!(
                    out,
                    "  {:<8} {}  {}",
                    style(item.command).cyan().bold(),
                    style(item.title).bold(),
                    style(item.description).dim()
                )?;
            }
            Ok(())
        }
        Node::UploadPrompt { file } => match file {
            Some(name) => writeln!(
                out,
                "  {} {name}\n  Type /start to begin.",
                style("✓").green()
            ),
            None => writeln!(
                out,
                "  Choose a resume with /file <path> (.pdf, .docx, .png, .jpg, .jpeg)"
            ),
        },
        Node::Progress { steps, percent } => {
            let filled = BAR_WIDTH * usize::from(*percent) / 100;
            writeln!(
                out,
                "  [{}{}] {percent}%",
                style("█".repeat(filled)).cyan(),
                " ".repeat(BAR_WIDTH - filled)
            )?;
            for (name, status) in steps {
                let line = match status {
                    StepStatus::Completed => style(format!("✓ {name}")).green(),
                    StepStatus::Active => style(format!("▸ {name}")).cyan().bold(),
                    StepStatus::Pending => style(format!("  {name}")).dim(),
                };
                writeln!(out, "  {line}")?;
            }
            Ok(())
        }
        Node::MatchResult { score, verdict } => {
            let score = match verdict {
                Verdict::Excellent | Verdict::Good => style(format!("{score}%")).green(),
                Verdict::Fair => style(format!("{score}%")).yellow(),
                Verdict::Poor => style(format!("{score}%")).red(),
            };
            writeln!(out, "\n  Match score: {}", score.bold())?;
            writeln!(out, "  {}", verdict.message())
        }
        Node::Answer(answer) => {
            writeln!(out, "\n  {}", style("Answer").bold())?;
            for line in answer.lines() {
                writeln!(out, "  {line}")?;
            }
            Ok(())
        }
    }
}

fn paint_bubble(bubble: &Bubble, out: &mut impl Write) -> io::Result<()> {
    let name = match bubble.role {
        Role::User => style("You").blue().bold(),
        Role::Assistant => style("Nova").magenta().bold(),
    };
    writeln!(out, "\n{name} {}", style(&bubble.time).dim())?;
    for line in bubble.content.lines() {
        writeln!(out, "  {line}")?;
    }
    if let Some(caveat) = bubble.caveat {
        writeln!(out, "  {}", style(caveat).yellow().italic())?;
    }
    Ok(())
}
