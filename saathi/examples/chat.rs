//! Interactive terminal chat against a live gateway.
//!
//! Run with:
//!
//! ```sh
//! SAATHI_URL=https://<project>.supabase.co SAATHI_KEY=... \
//!     cargo run --example chat -p saathi
//! ```
//!
//! Type `/hi` or `/en` to switch languages.

use std::io::{self, BufRead, Write};
use std::sync::{Arc, Mutex};

use saathi::prelude::*;

/// Prints each new fragment of the assistant answer as it arrives.
struct Printer {
    printed: Mutex<usize>,
}

impl SessionObserver for Printer {
    fn session_changed(&self, snapshot: &SessionSnapshot) {
        let Some(turn) = snapshot.turns.last() else {
            return;
        };
        if turn.role != Role::Assistant {
            return;
        }
        let mut printed = self.printed.lock().unwrap();
        if turn.content.len() < *printed {
            *printed = 0;
        }
        if turn.content.len() > *printed {
            print!("{}", &turn.content[*printed..]);
            let _ = io::stdout().flush();
            *printed = turn.content.len();
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let base_url = std::env::var("SAATHI_URL")?;
    let api_key = std::env::var("SAATHI_KEY")?;

    let session = ChatSession::new(Gateway::new(base_url, api_key));
    session.add_observer(Arc::new(Printer {
        printed: Mutex::new(0),
    }));

    println!("{}", session.snapshot().turns[0].content);

    let stdin = io::stdin();
    loop {
        print!("\n> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        match line.trim() {
            "/hi" => {
                session.set_language(Language::Hi);
                println!("{}", session.snapshot().turns[0].content);
                continue;
            }
            "/en" => {
                session.set_language(Language::En);
                println!("{}", session.snapshot().turns[0].content);
                continue;
            }
            _ => {}
        }
        if let SendOutcome::Failed(_) = session.send(&line).await
            && let Some(notice) = session.clear_notice()
        {
            eprintln!("\n[{}] {}", notice.title, notice.body);
        }
        println!();
    }
    Ok(())
}
