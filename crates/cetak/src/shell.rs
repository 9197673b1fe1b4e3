// SPDX-FileCopyrightText: 2026 Cetak Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `cetak shell` command implementation.
//!
//! Launches an interactive chat REPL with colored output and readline
//! history. Suggestion chips are numbered; typing the number selects the
//! chip. `/rfq` walks through the quote-request form inline.

use std::sync::Arc;

use colored::Colorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::info;

use cetak_agent::{Orchestrator, WidgetState};
use cetak_catalog::{AiConfigLoader, ResponseCatalog};
use cetak_config::model::CetakConfig;
use cetak_core::CetakError;
use cetak_core::traits::adapter::ServiceAdapter;
use cetak_core::traits::clock::{Clock, SystemClock};
use cetak_core::traits::content::ContentStore;
use cetak_core::traits::notify::Notifier;
use cetak_core::types::{ImageAttachment, Sender};
use cetak_gemini::GeminiClient;
use cetak_rfq::{DesignFile, RfqDraft, RfqService, SmtpNotifier};
use cetak_storage::{FsObjectStore, SqliteContentStore};

/// Runs the `cetak shell` interactive REPL.
pub async fn run_shell(config: CetakConfig) -> Result<(), CetakError> {
    // Initialize storage.
    let store = SqliteContentStore::new(config.storage.clone());
    store.initialize().await?;
    let store: Arc<SqliteContentStore> = Arc::new(store);
    let content: Arc<dyn ContentStore> = store.clone();

    // Initialize the Gemini generator.
    let ai_config = Arc::new(AiConfigLoader::new(content.clone()));
    let generator = GeminiClient::new(&config.gemini, ai_config).inspect_err(|_| {
        eprintln!(
            "error: Gemini API key required. Set gemini.api_key in the config file or the CETAK_GEMINI_API_KEY env var."
        );
    })?;

    // Wire the RFQ flow: filesystem uploads plus optional SMTP notification.
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let notifier: Option<Arc<dyn Notifier>> = SmtpNotifier::from_config(&config.rfq)?
        .map(|n| Arc::new(n) as Arc<dyn Notifier>);
    let rfq = RfqService::new(
        content.clone(),
        Arc::new(FsObjectStore::new(config.rfq.upload_dir.clone())),
        notifier,
        clock.clone(),
    );

    let catalog = ResponseCatalog::new(content);
    let mut orchestrator = Orchestrator::new(Arc::new(generator), catalog, rfq, clock, &config);
    info!("shell session started");

    let mut rl = DefaultEditor::new()
        .map_err(|e| CetakError::Internal(format!("failed to initialize readline: {e}")))?;

    println!("{}", "cetak shell".bold().green());
    println!(
        "Type a message, a chip number, {}, {}, {} or {} to exit.\n",
        "/rfq".yellow(),
        "/image <path>".yellow(),
        "/reset".yellow(),
        "/quit".yellow()
    );
    print_conversation_tail(&orchestrator, 1);

    let prompt = format!("{}> ", "you".green());
    loop {
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed == "/quit" || trimmed == "/exit" {
                    break;
                }
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(&line);

                if trimmed == "/reset" {
                    orchestrator.reset();
                    print_conversation_tail(&orchestrator, 1);
                    continue;
                }
                if trimmed == "/rfq" {
                    run_rfq_form(&mut rl, &mut orchestrator).await;
                    continue;
                }

                let outcome = if let Some(rest) = trimmed.strip_prefix("/image") {
                    submit_image_from_path(&mut orchestrator, rest.trim()).await
                } else if let Some(chip) = chip_for_input(&orchestrator, trimmed) {
                    orchestrator.select_suggestion(&chip).await
                } else {
                    orchestrator.submit_text(trimmed).await
                };

                match outcome {
                    Ok(()) => print_conversation_tail(&orchestrator, 1),
                    Err(e) => eprintln!("{}: {}", "error".red(), e.user_message(orchestrator.language())),
                }

                if orchestrator.widget() == WidgetState::RfqFormOpen {
                    println!(
                        "{}",
                        "(quote request form opened, type /rfq to fill it in)".dimmed()
                    );
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{}: {e}", "error".red());
                break;
            }
        }
    }

    store.shutdown().await?;
    println!("{}", "goodbye".dimmed());
    Ok(())
}

/// Resolve a numbered input like "2" to the matching suggestion chip text.
fn chip_for_input(orchestrator: &Orchestrator, input: &str) -> Option<String> {
    let index: usize = input.parse().ok()?;
    orchestrator
        .state()
        .suggestions
        .get(index.checked_sub(1)?)
        .map(|chip| chip.text.clone())
}

/// Print the last `exchanges` bot replies plus the error banner and chips.
fn print_conversation_tail(orchestrator: &Orchestrator, exchanges: usize) {
    let state = orchestrator.state();
    let bot_replies: Vec<&str> = state
        .messages
        .iter()
        .rev()
        .filter(|m| m.sender == Sender::Bot)
        .take(exchanges)
        .map(|m| m.text.as_str())
        .collect();
    for text in bot_replies.into_iter().rev() {
        println!("{} {text}", "cetak:".cyan().bold());
    }
    if let Some(error) = &state.error {
        println!("{} {error}", "!".red().bold());
    }
    if !state.suggestions.is_empty() {
        let numbered: Vec<String> = state
            .suggestions
            .iter()
            .enumerate()
            .map(|(i, chip)| format!("[{}] {}", i + 1, chip.text))
            .collect();
        println!("{}", numbered.join("  ").dimmed());
    }
    println!();
}

/// Read one image from disk and submit it for analysis.
async fn submit_image_from_path(
    orchestrator: &mut Orchestrator,
    args: &str,
) -> Result<(), CetakError> {
    let (path, caption) = match args.split_once(' ') {
        Some((path, caption)) => (path, caption.trim()),
        None => (args, ""),
    };
    if path.is_empty() {
        return Err(CetakError::Validation("usage: /image <path> [caption]".to_string()));
    }

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| CetakError::Validation(format!("cannot read {path}: {e}")))?;
    let file_name = std::path::Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string());
    let image = ImageAttachment {
        mime_type: mime_for(&file_name).to_string(),
        bytes,
        file_name,
    };
    orchestrator.submit_image(image, caption).await
}

fn mime_for(file_name: &str) -> &'static str {
    match file_name.rsplit_once('.').map(|(_, ext)| ext.to_lowercase()) {
        Some(ext) if ext == "jpg" || ext == "jpeg" => "image/jpeg",
        Some(ext) if ext == "png" => "image/png",
        Some(ext) if ext == "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}

/// Walk through the quote-request form field by field and submit it.
async fn run_rfq_form(rl: &mut DefaultEditor, orchestrator: &mut Orchestrator) {
    println!("{}", "quote request (empty line cancels)".bold());

    let Some(user_name) = ask(rl, "your name") else { return };
    let Some(user_email) = ask(rl, "email") else { return };
    let Some(project_name) = ask(rl, "project name") else { return };
    let Some(size_specifications) = ask(rl, "size / specifications") else { return };
    let Some(quantity_text) = ask(rl, "quantity") else { return };
    let quantity = quantity_text.parse().unwrap_or(0);
    let deadline = ask_optional(rl, "deadline (optional)");
    let additional_notes = ask_optional(rl, "notes (optional)");
    let design_files = ask_optional(rl, "design file path (optional)")
        .and_then(|path| read_design_file(&path))
        .into_iter()
        .collect::<Vec<_>>();

    let draft = RfqDraft {
        user_name,
        user_email,
        project_name,
        size_specifications,
        quantity,
        deadline,
        additional_notes,
        design_files,
        language: orchestrator.language(),
        ..RfqDraft::default()
    };

    match orchestrator.submit_rfq(&draft).await {
        Ok(_) => print_conversation_tail(orchestrator, 1),
        Err(e) => eprintln!("{}: {}", "error".red(), e.user_message(orchestrator.language())),
    }
}

fn ask(rl: &mut DefaultEditor, field: &str) -> Option<String> {
    let answer = rl.readline(&format!("{}: ", field.yellow())).ok()?;
    let answer = answer.trim().to_string();
    if answer.is_empty() { None } else { Some(answer) }
}

fn ask_optional(rl: &mut DefaultEditor, field: &str) -> Option<String> {
    ask(rl, field)
}

fn read_design_file(path: &str) -> Option<DesignFile> {
    match std::fs::read(path) {
        Ok(bytes) => {
            let file_name = std::path::Path::new(path)
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.to_string());
            Some(DesignFile {
                mime_type: mime_for(&file_name).to_string(),
                file_name,
                bytes,
            })
        }
        Err(e) => {
            eprintln!("{}: cannot read {path}: {e}", "warning".yellow());
            None
        }
    }
}
