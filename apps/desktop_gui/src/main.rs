//! Desktop entry point for the Gmail assistant client.

mod backend_bridge;
mod controller;
mod ui;

use std::time::Duration;

use clap::Parser;
use client_core::AssistantClient;
use crossbeam_channel::bounded;
use eframe::egui;

use backend_bridge::commands::BackendCommand;
use controller::events::UiEvent;
use ui::i18n::Language;
use ui::reveal::DEFAULT_REVEAL_INTERVAL_MS;
use ui::AssistantApp;

const BACKEND_URL_ENV: &str = "ASSISTANT_BACKEND_URL";
const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8080";

#[derive(Parser, Debug)]
#[command(
    name = "gmail-assistant",
    about = "Desktop client for the Gmail assistant backend"
)]
struct Args {
    /// Backend base URL; defaults to the ASSISTANT_BACKEND_URL environment
    /// variable, then the local development address.
    #[arg(long)]
    backend_url: Option<String>,
    /// Fixed tick period of the draft reveal animation, in milliseconds.
    #[arg(long, default_value_t = DEFAULT_REVEAL_INTERVAL_MS)]
    reveal_interval_ms: u64,
    /// Initial UI language (fr or en).
    #[arg(long, default_value = "fr")]
    language: String,
}

fn resolve_backend_url(cli_value: Option<String>) -> String {
    if let Some(url) = cli_value {
        return url;
    }
    match std::env::var(BACKEND_URL_ENV) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => DEFAULT_BACKEND_URL.to_string(),
    }
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let backend_url = resolve_backend_url(args.backend_url);
    let language = Language::from_code(&args.language).unwrap_or_else(|| {
        tracing::warn!(
            "unknown language '{}', falling back to French",
            args.language
        );
        Language::default()
    });
    let reveal_interval = Duration::from_millis(args.reveal_interval_ms);
    tracing::info!(backend_url = %backend_url, "starting gmail assistant client");

    let client = AssistantClient::new(backend_url);
    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    backend_bridge::runtime::launch(client.clone(), cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Gmail Assistant")
            .with_inner_size([1080.0, 720.0])
            .with_min_inner_size([820.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Gmail Assistant",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(AssistantApp::new(
                cmd_tx,
                ui_rx,
                client,
                language,
                reveal_interval,
            )))
        }),
    )
}
