use anyhow::Result;
use colored::Colorize;
use move_landing::chat::{ChatSession, Responder};
use move_landing::config;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Duration;

/// Execute the chat command
///
/// With `--message`, prints the single reply. Otherwise reads lines from
/// stdin until EOF or `exit`.
pub async fn execute(config_path: &Path, message: Option<String>) -> Result<()> {
    let cfg = config::load_config(config_path)?;
    let responder = Responder::new(cfg.pricing.currency()?);
    let mut session = ChatSession::new(responder, Duration::from_millis(cfg.chat.reply_delay_ms));

    if let Some(greeting) = session.messages().first() {
        println!("{} {}", "Move:".cyan().bold(), greeting.content);
    }

    if let Some(message) = message {
        reply_once(&mut session, &message).await;
        return Ok(());
    }

    let stdin = io::stdin();
    loop {
        print!("{} ", "You:".green().bold());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
            break;
        }

        reply_once(&mut session, line).await;
    }

    Ok(())
}

async fn reply_once(session: &mut ChatSession, input: &str) {
    match session.send_with_delay(input).await {
        Some((topic, reply)) => {
            tracing::debug!(topic = topic.as_str(), "Chat reply");
            println!("{} {}", "Move:".cyan().bold(), reply.content);
        }
        None => println!("{}", "(empty message ignored)".dimmed()),
    }
}
