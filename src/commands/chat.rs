//! AI chat handlers
//!
//! A one-shot question returns the assistant's reply; without a question a
//! readline loop keeps a transcript until the user leaves.

use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use super::AppContext;
use crate::error::Result;
use crate::views::chat::{render_message, ChatTranscript};

/// Ask a single question
///
/// Backend failures never surface as errors here: the reply becomes the
/// fallback message instead.
pub async fn ask(ctx: &AppContext, query: &str) -> Result<String> {
    let query = query.trim();
    if query.is_empty() {
        return Ok(String::new());
    }
    let mut transcript = ChatTranscript::new();
    transcript.push_user(query);
    let reply = ctx.api.chat(query).await;
    Ok(transcript.record_reply(reply).to_string())
}

/// Start an interactive chat session
///
/// Blank lines are ignored; `/exit`, `/quit`, Ctrl-C or Ctrl-D end the
/// session.
pub async fn run_chat(ctx: &AppContext) -> Result<String> {
    tracing::info!("Starting interactive chat");

    let mut rl = DefaultEditor::new()?;
    let mut transcript = ChatTranscript::new();

    if let Some(greeting) = transcript.messages().first() {
        println!("{}\n", render_message(greeting));
    }
    println!("{}", "Type /exit to leave.".dimmed());

    loop {
        match rl.readline("you> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                if matches!(trimmed, "/exit" | "/quit") {
                    break;
                }

                rl.add_history_entry(trimmed)?;
                transcript.push_user(trimmed);

                let reply = ctx.api.chat(trimmed).await;
                let text = transcript.record_reply(reply);
                println!("{} {}\n", "assistant>".green().bold(), text);
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                tracing::error!("Readline error: {:?}", err);
                break;
            }
        }
    }

    Ok("Goodbye!".to_string())
}
