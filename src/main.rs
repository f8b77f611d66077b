//! Linkshelf — a console client for a bookmark-manager web service.
//!
//! Startup loads the bookmark collection and renders it; an interactive loop
//! then dispatches list/add/delete commands until quit.

use std::io::{self, BufRead, Write};

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use linkshelf::client::BookmarkClient;
use linkshelf::commands::{parse_command, usage, Command};
use linkshelf::services::api_client::HttpBookmarkApi;
use linkshelf::services::prompt::ConsolePrompt;
use linkshelf::services::settings::{SettingsEngine, SettingsEngineTrait};

#[derive(Parser, Debug)]
#[command(name = "linkshelf", version, about = "Console client for a bookmark-manager web service")]
struct Args {
    /// Base URL of the bookmark service (overrides the settings file).
    #[arg(long)]
    server_url: Option<String>,

    /// Path to the settings file.
    #[arg(long)]
    config: Option<String>,
}

fn prompt_line(label: &str) -> io::Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;
    let mut value = String::new();
    io::stdin().lock().read_line(&mut value)?;
    Ok(value.trim_end_matches(['\r', '\n']).to_string())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "linkshelf=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let mut settings_engine = SettingsEngine::new(args.config);
    let mut settings = match settings_engine.load() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    if let Some(url) = args.server_url {
        settings.server_url = url;
        settings_engine.set_server_url(&settings.server_url);
    }

    tracing::info!(server_url = %settings.server_url, "starting linkshelf v{}", env!("CARGO_PKG_VERSION"));

    let api = match HttpBookmarkApi::new(&settings.server_url, settings.request_timeout_ms) {
        Ok(api) => api,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    let mut client = BookmarkClient::new(api, ConsolePrompt::new());

    // List on load: the console equivalent of the page-load trigger.
    client.load().await;
    println!("{}", client.view().render_text());
    println!();
    println!("{}", usage());

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(e) => {
                eprintln!("input error: {}", e);
                break;
            }
        }
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Ok(Command::List) => println!("{}", client.view().render_text()),
            Ok(Command::Add) => {
                let title = prompt_line("Title").unwrap_or_default();
                let url = prompt_line("URL").unwrap_or_default();
                let tags = prompt_line("Tags").unwrap_or_default();
                client.fill_form(&title, &url, &tags);
                client.submit().await;
            }
            Ok(Command::Delete(id)) => {
                client.delete(id).await;
            }
            Ok(Command::Help) => println!("{}", usage()),
            Ok(Command::Quit) => break,
            Err(msg) => println!("{}", msg),
        }
    }
}
