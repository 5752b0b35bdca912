//! Session commands: info, history, delete.

use crate::cmd::SessionCommand;
use anyhow::Result;
use client::HttpTransport;
use console::style;
use view::{Node, View};

impl SessionCommand {
    /// Dispatch session subcommands.
    pub async fn run(&self, transport: &HttpTransport) -> Result<()> {
        match self {
            Self::Info { id } => info(transport, id).await,
            Self::History { id } => history(transport, id).await,
            Self::Delete { id } => {
                let message = transport.delete_session(id).await?;
                println!("{message}");
                Ok(())
            }
        }
    }
}

async fn info(transport: &HttpTransport, id: &str) -> Result<()> {
    let info = transport.session_info(id).await?;
    println!("{}  {}", style("session").dim(), info.session_id);
    println!("{}  {}", style("agent").dim(), info.agent_type);
    println!("{}  {}", style("messages").dim(), info.message_count);
    println!(
        "{}  {}",
        style("resume").dim(),
        if info.has_resume { "yes" } else { "no" }
    );
    Ok(())
}

async fn history(transport: &HttpTransport, id: &str) -> Result<()> {
    let messages = transport.history(id).await?;
    if messages.is_empty() {
        println!("No messages.");
        return Ok(());
    }
    let thread = View {
        fullscreen: true,
        nodes: messages
            .iter()
            .map(|m| Node::Bubble(view::bubble(m)))
            .collect(),
    };
    view::paint(&thread, &mut std::io::stdout())?;
    Ok(())
}
