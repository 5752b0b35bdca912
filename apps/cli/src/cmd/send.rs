//! One-shot message command.

use anyhow::Result;
use clap::Args;
use client::Transport;

/// Send a one-shot message to the assistant.
#[derive(Args, Debug)]
pub struct Send {
    /// Message content.
    pub content: String,
}

impl Send {
    /// Send the message with no history and print the reply.
    pub async fn run(self, transport: &impl Transport) -> Result<()> {
        let content = self.content.trim();
        if content.is_empty() {
            anyhow::bail!("message is empty");
        }
        let reply = transport.chat(content, &[]).await?;
        println!("{reply}");
        Ok(())
    }
}
