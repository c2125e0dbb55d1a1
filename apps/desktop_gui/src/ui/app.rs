//! Application shell: the sign-in hand-off view and the assistant form.

use std::time::{Duration, Instant};

use arboard::Clipboard;
use chrono::{DateTime, Local};
use client_core::AssistantClient;
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiErrorCategory, UiErrorContext, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;
use crate::controller::reducer::{AssistantState, StoreEvent};
use crate::ui::i18n::Language;
use crate::ui::reveal::{Reveal, RevealTicker};

/// Subject attached to every outgoing reply; the backend contract has no
/// subject editor.
const SEND_SUBJECT: &str = "Response";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppViewState {
    Login,
    Assistant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusBannerSeverity {
    Error,
    Warning,
    Success,
}

#[derive(Debug, Clone)]
struct StatusBanner {
    severity: StatusBannerSeverity,
    message: String,
}

fn err_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Auth => "Authentication",
        UiErrorCategory::Transport => "Transport",
        UiErrorCategory::Validation => "Validation",
        UiErrorCategory::Unknown => "Unexpected",
    }
}

fn lighten_color(c: egui::Color32, t: f32) -> egui::Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |channel: u8| -> u8 {
        let channel = channel as f32;
        (channel + (255.0 - channel) * t).round() as u8
    };
    egui::Color32::from_rgb(mix(c.r()), mix(c.g()), mix(c.b()))
}

pub struct AssistantApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    client: AssistantClient,
    view_state: AppViewState,
    language: Language,
    store: AssistantState,
    email_input: String,
    // Editable copy of the draft; seeded with the full generated text and
    // diverging from it as the user edits.
    draft_input: String,
    reveal: Reveal,
    ticker: RevealTicker,
    status: String,
    status_banner: Option<StatusBanner>,
    last_fetched_at: Option<DateTime<Local>>,
}

impl AssistantApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        client: AssistantClient,
        language: Language,
        reveal_interval: Duration,
    ) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            client,
            view_state: AppViewState::Login,
            language,
            store: AssistantState::default(),
            email_input: String::new(),
            draft_input: String::new(),
            reveal: Reveal::default(),
            ticker: RevealTicker::new(reveal_interval),
            status: String::new(),
            status_banner: None,
            last_fetched_at: None,
        }
    }

    fn show_banner(&mut self, severity: StatusBannerSeverity, message: impl Into<String>) {
        self.status_banner = Some(StatusBanner {
            severity,
            message: message.into(),
        });
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::MessageFetched(response) => {
                    self.store.apply(StoreEvent::FetchSucceeded {
                        message: response.message,
                        generated_response: response.generated_response,
                    });
                    let fetched_at = Local::now();
                    self.last_fetched_at = Some(fetched_at);
                    self.status = format!(
                        "{} {}",
                        self.language.table().fetched_notice,
                        fetched_at.format("%H:%M:%S")
                    );
                    self.seed_draft();
                }
                UiEvent::EmailSent => {
                    self.store.apply(StoreEvent::SendSucceeded);
                    let notice = self.language.table().sent_notice;
                    self.status = notice.to_string();
                    self.show_banner(StatusBannerSeverity::Success, notice);
                }
                UiEvent::Error(err) => {
                    let message = err.message().to_string();
                    match err.context() {
                        UiErrorContext::FetchMessage => self.store.apply(StoreEvent::FetchFailed {
                            error: message.clone(),
                        }),
                        UiErrorContext::SendEmail => self.store.apply(StoreEvent::SendFailed {
                            error: message.clone(),
                        }),
                        UiErrorContext::BackendStartup | UiErrorContext::General => {}
                    }
                    self.status = format!("{} error: {message}", err_label(err.category()));
                    if err.requires_reauth() {
                        // Navigating away tears the assistant view down; no
                        // reveal tick may fire while it is gone.
                        self.view_state = AppViewState::Login;
                        self.ticker.cancel();
                        let notice = self.language.table().session_expired_notice;
                        self.show_banner(StatusBannerSeverity::Error, notice);
                    } else {
                        self.show_banner(StatusBannerSeverity::Error, message);
                    }
                }
            }
        }
    }

    /// Seed the editable draft with the full generated text and restart the
    /// preview animation. A refetch returning the identical draft keeps user
    /// edits and the current reveal position.
    fn seed_draft(&mut self) {
        match self.store.generated_response.as_deref() {
            Some(text) if !text.is_empty() => {
                if text == self.reveal.source() {
                    return;
                }
                self.draft_input = text.to_string();
                self.reveal.restart(text);
                self.ticker.start(Instant::now());
            }
            _ => {
                self.draft_input.clear();
                self.reveal.clear();
                self.ticker.cancel();
            }
        }
    }

    fn handle_fetch_message(&mut self) {
        let email = self.email_input.trim().to_string();
        if email.is_empty() {
            // Validation short-circuits: no network call, no store mutation.
            let warning = self.language.table().empty_email_warning;
            self.show_banner(StatusBannerSeverity::Warning, warning);
            return;
        }
        self.store.apply(StoreEvent::FetchStarted);
        dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::FetchLastMessage {
                recipient_email: email,
            },
            &mut self.status,
        );
    }

    fn handle_send_email(&mut self) {
        if self.draft_input.trim().is_empty() {
            let warning = self.language.table().empty_body_warning;
            self.show_banner(StatusBannerSeverity::Warning, warning);
            return;
        }
        dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::SendEmail {
                recipient_email: self.email_input.trim().to_string(),
                subject: SEND_SUBJECT.to_string(),
                body: self.draft_input.clone(),
            },
            &mut self.status,
        );
    }

    fn handle_copy_draft(&mut self) {
        if let Ok(mut clipboard) = Clipboard::new() {
            let _ = clipboard.set_text(self.draft_input.clone());
            self.status = self.language.table().copied_notice.to_string();
        }
    }

    fn enter_assistant_view(&mut self) {
        self.view_state = AppViewState::Assistant;
        self.status_banner = None;
        // Pick an interrupted reveal back up where it stopped.
        if !self.reveal.is_empty() && !self.reveal.is_complete() {
            self.ticker.start(Instant::now());
        }
    }

    fn handle_logout(&mut self) {
        let url = self.client.logout_url();
        self.open_in_browser(&url);
        self.reset_session();
    }

    fn reset_session(&mut self) {
        self.view_state = AppViewState::Login;
        self.store = AssistantState::default();
        self.email_input.clear();
        self.draft_input.clear();
        self.reveal.clear();
        self.ticker.cancel();
        self.last_fetched_at = None;
    }

    fn open_in_browser(&mut self, url: &str) {
        let tr = self.language.table();
        match open::that(url) {
            Ok(()) => {
                self.status = tr.browser_opened_notice.to_string();
            }
            Err(err) => {
                tracing::error!("failed to open browser at {url}: {err}");
                let message = format!("{}: {err} ({url})", tr.browser_open_failed);
                self.show_banner(StatusBannerSeverity::Error, message);
            }
        }
    }

    // ---------- Rendering ----------

    fn show_language_selector(&mut self, ui: &mut egui::Ui) {
        egui::ComboBox::from_id_salt("language_selector")
            .selected_text(self.language.label())
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut self.language, Language::Fr, Language::Fr.label());
                ui.selectable_value(&mut self.language, Language::En, Language::En.label());
            });
    }

    fn show_status_banner(&mut self, ui: &mut egui::Ui) {
        if let Some(banner) = self.status_banner.clone() {
            let (fill, stroke) = match banner.severity {
                StatusBannerSeverity::Error => (
                    egui::Color32::from_rgb(111, 53, 53),
                    egui::Stroke::new(1.0, egui::Color32::from_rgb(175, 96, 96)),
                ),
                StatusBannerSeverity::Warning => (
                    egui::Color32::from_rgb(120, 95, 43),
                    egui::Stroke::new(1.0, egui::Color32::from_rgb(186, 154, 85)),
                ),
                StatusBannerSeverity::Success => (
                    egui::Color32::from_rgb(49, 98, 62),
                    egui::Stroke::new(1.0, egui::Color32::from_rgb(96, 160, 110)),
                ),
            };

            egui::Frame::NONE
                .fill(fill)
                .stroke(stroke)
                .corner_radius(8.0)
                .inner_margin(egui::Margin::symmetric(10, 8))
                .show(ui, |ui| {
                    ui.horizontal_wrapped(|ui| {
                        ui.label(egui::RichText::new(&banner.message).color(egui::Color32::WHITE));
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.small_button("✕").clicked() {
                                self.status_banner = None;
                            }
                        });
                    });
                });
        }
    }

    fn show_login_screen(&mut self, ctx: &egui::Context) {
        let tr = self.language.table();
        egui::CentralPanel::default().show(ctx, |ui| {
            let avail = ui.available_size();
            let card_width = avail.x.clamp(380.0, 480.0);
            let top_space = (avail.y * 0.16).clamp(18.0, 120.0);

            ui.add_space(top_space);

            ui.vertical_centered(|ui| {
                ui.set_width(card_width);

                let card_fill = lighten_color(ui.visuals().panel_fill, 0.03);
                egui::Frame::NONE
                    .fill(card_fill)
                    .corner_radius(14.0)
                    .stroke(egui::Stroke::new(
                        1.0,
                        ui.visuals().widgets.noninteractive.bg_stroke.color,
                    ))
                    .inner_margin(egui::Margin::symmetric(20, 18))
                    .show(ui, |ui| {
                        ui.style_mut().spacing.item_spacing = egui::vec2(10.0, 10.0);

                        ui.horizontal(|ui| {
                            ui.label(egui::RichText::new("✉").size(24.0));
                            ui.vertical(|ui| {
                                ui.heading(tr.app_title);
                                ui.weak(tr.sign_in_blurb);
                            });
                        });

                        ui.add_space(8.0);
                        self.show_status_banner(ui);

                        if ui
                            .add_sized(
                                [ui.available_width(), 36.0],
                                egui::Button::new(tr.sign_in_button),
                            )
                            .clicked()
                        {
                            let url = self.client.auth_url();
                            self.open_in_browser(&url);
                        }

                        if ui
                            .add_sized(
                                [ui.available_width(), 30.0],
                                egui::Button::new(tr.continue_button),
                            )
                            .clicked()
                        {
                            self.enter_assistant_view();
                        }

                        ui.small(tr.sign_in_hint);

                        ui.add_space(4.0);
                        ui.separator();
                        ui.horizontal(|ui| {
                            ui.weak(tr.about_blurb);
                        });
                        self.show_language_selector(ui);
                    });
            });
        });
    }

    fn show_assistant_screen(&mut self, ctx: &egui::Context) {
        let tr = self.language.table();

        egui::TopBottomPanel::top("assistant_top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(tr.app_title);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(tr.logout_button).clicked() {
                        self.handle_logout();
                    }
                    self.show_language_selector(ui);
                });
            });
        });

        egui::TopBottomPanel::bottom("assistant_status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.store.loading {
                    ui.spinner();
                    ui.label(tr.loading_notice);
                }
                ui.weak(self.status.as_str());
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                let avail = ui.available_size();
                let column_width = avail.x.clamp(420.0, 760.0);

                ui.vertical_centered(|ui| {
                    ui.set_width(column_width);
                    ui.style_mut().spacing.item_spacing = egui::vec2(10.0, 10.0);

                    self.show_status_banner(ui);

                    ui.label(egui::RichText::new(tr.email_label).strong());
                    let email_edit = egui::TextEdit::singleline(&mut self.email_input)
                        .id_salt("recipient_email")
                        .hint_text(tr.email_placeholder)
                        .desired_width(f32::INFINITY);
                    let email_response = ui.add_sized([ui.available_width(), 30.0], email_edit);
                    let fetch_shortcut = email_response.lost_focus()
                        && ui.input(|i| i.key_pressed(egui::Key::Enter));

                    let fetch_clicked = ui
                        .add_sized(
                            [ui.available_width(), 32.0],
                            egui::Button::new(tr.fetch_button),
                        )
                        .clicked();
                    if fetch_shortcut || fetch_clicked {
                        self.handle_fetch_message();
                    }

                    if let Some(last_message) = self.store.last_message.clone() {
                        egui::Frame::NONE
                            .fill(lighten_color(ui.visuals().panel_fill, 0.04))
                            .corner_radius(8.0)
                            .inner_margin(egui::Margin::symmetric(10, 8))
                            .show(ui, |ui| {
                                ui.horizontal(|ui| {
                                    ui.label(egui::RichText::new(tr.last_message_label).strong());
                                    if let Some(fetched_at) = self.last_fetched_at {
                                        ui.weak(format!(
                                            "{} {}",
                                            tr.fetched_notice,
                                            fetched_at.format("%H:%M:%S")
                                        ));
                                    }
                                });
                                ui.label(last_message);
                            });
                    }

                    if !self.reveal.is_empty() {
                        egui::Frame::NONE
                            .fill(lighten_color(ui.visuals().panel_fill, 0.02))
                            .corner_radius(8.0)
                            .inner_margin(egui::Margin::symmetric(10, 8))
                            .show(ui, |ui| {
                                ui.label(
                                    egui::RichText::new(tr.generated_response_label).strong(),
                                );
                                if self.reveal.is_complete() {
                                    ui.label(self.reveal.visible());
                                } else {
                                    ui.label(format!("{}▌", self.reveal.visible()));
                                }
                            });
                    }

                    let draft_edit = egui::TextEdit::multiline(&mut self.draft_input)
                        .id_salt("draft_reply")
                        .hint_text(tr.draft_placeholder)
                        .desired_rows(6)
                        .desired_width(f32::INFINITY);
                    ui.add_sized([ui.available_width(), 140.0], draft_edit);

                    if self.store.generated_response.is_some() {
                        ui.horizontal(|ui| {
                            if ui
                                .add_sized(
                                    [ui.available_width() * 0.72, 32.0],
                                    egui::Button::new(tr.send_button),
                                )
                                .clicked()
                            {
                                self.handle_send_email();
                            }
                            if ui
                                .add_sized(
                                    [ui.available_width(), 32.0],
                                    egui::Button::new(tr.copy_button),
                                )
                                .clicked()
                            {
                                self.handle_copy_draft();
                            }
                        });
                    }

                    if let Some(error) = self.store.error.clone() {
                        ui.colored_label(egui::Color32::from_rgb(220, 120, 120), error);
                    }
                });
            });
        });
    }
}

impl eframe::App for AssistantApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.ticker.advance(&mut self.reveal, Instant::now());

        match self.view_state {
            AppViewState::Login => self.show_login_screen(ctx),
            AppViewState::Assistant => self.show_assistant_screen(ctx),
        }

        if self.ticker.is_active() {
            ctx.request_repaint_after(self.ticker.interval());
        } else {
            // Keep draining worker events even while the user is idle.
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;
    use shared::protocol::AssistantResponse;

    use crate::controller::events::UiError;

    fn test_app() -> (AssistantApp, Receiver<BackendCommand>, Sender<UiEvent>) {
        let (cmd_tx, cmd_rx) = bounded(8);
        let (ui_tx, ui_rx) = bounded(8);
        let app = AssistantApp::new(
            cmd_tx,
            ui_rx,
            AssistantClient::new("http://127.0.0.1:9"),
            Language::En,
            Duration::from_millis(50),
        );
        (app, cmd_rx, ui_tx)
    }

    fn fetched(message: &str, draft: &str) -> UiEvent {
        UiEvent::MessageFetched(AssistantResponse {
            message: message.to_string(),
            generated_response: draft.to_string(),
        })
    }

    #[test]
    fn empty_email_short_circuits_without_store_mutation_or_dispatch() {
        let (mut app, cmd_rx, _ui_tx) = test_app();
        app.email_input = "   ".to_string();
        app.handle_fetch_message();

        assert_eq!(app.store, AssistantState::default());
        assert!(cmd_rx.try_recv().is_err(), "no command may be queued");
        let banner = app.status_banner.expect("validation warning shown");
        assert_eq!(banner.severity, StatusBannerSeverity::Warning);
    }

    #[test]
    fn fetch_sets_loading_synchronously_and_queues_the_command() {
        let (mut app, cmd_rx, _ui_tx) = test_app();
        app.store.error = Some("stale".to_string());
        app.email_input = " alice@example.com ".to_string();
        app.handle_fetch_message();

        assert!(app.store.loading);
        assert_eq!(app.store.error, None);
        match cmd_rx.try_recv().expect("command queued") {
            BackendCommand::FetchLastMessage { recipient_email } => {
                assert_eq!(recipient_email, "alice@example.com");
            }
            BackendCommand::SendEmail { .. } => panic!("unexpected send command"),
        }
    }

    #[test]
    fn fetched_draft_is_fully_editable_while_the_preview_starts_empty() {
        let (mut app, _cmd_rx, ui_tx) = test_app();
        ui_tx
            .try_send(fetched("Hello?", "Hi, thanks for reaching out."))
            .expect("queue event");
        app.process_ui_events();

        assert_eq!(app.draft_input, "Hi, thanks for reaching out.");
        assert_eq!(app.reveal.visible(), "");
        assert_eq!(app.reveal.source(), "Hi, thanks for reaching out.");
        assert!(app.ticker.is_active());
        assert_eq!(app.store.last_message.as_deref(), Some("Hello?"));
        assert!(!app.store.loading);
    }

    #[test]
    fn refetching_the_identical_draft_keeps_user_edits() {
        let (mut app, _cmd_rx, ui_tx) = test_app();
        ui_tx
            .try_send(fetched("Hello?", "Same draft"))
            .expect("queue event");
        app.process_ui_events();

        app.draft_input = "my edited reply".to_string();
        ui_tx
            .try_send(fetched("Hello again?", "Same draft"))
            .expect("queue event");
        app.process_ui_events();

        assert_eq!(app.draft_input, "my edited reply");
        assert_eq!(app.store.last_message.as_deref(), Some("Hello again?"));
    }

    #[test]
    fn a_new_draft_resets_the_editable_copy_and_the_preview() {
        let (mut app, _cmd_rx, ui_tx) = test_app();
        ui_tx.try_send(fetched("A?", "Hello")).expect("queue event");
        app.process_ui_events();
        app.ticker
            .advance(&mut app.reveal, Instant::now() + Duration::from_millis(100));
        assert!(!app.reveal.visible().is_empty());

        ui_tx.try_send(fetched("B?", "Bye")).expect("queue event");
        app.process_ui_events();

        assert_eq!(app.draft_input, "Bye");
        assert_eq!(app.reveal.visible(), "");
        assert_eq!(app.reveal.source(), "Bye");
    }

    #[test]
    fn empty_draft_body_short_circuits_send() {
        let (mut app, cmd_rx, ui_tx) = test_app();
        ui_tx.try_send(fetched("A?", "draft")).expect("queue event");
        app.process_ui_events();
        // Drain the store into a known state, then blank the editable copy.
        app.draft_input = "  \n ".to_string();
        app.handle_send_email();

        assert!(cmd_rx.try_recv().is_err(), "no command may be queued");
        assert_eq!(app.store.error, None);
        let banner = app.status_banner.expect("validation warning shown");
        assert_eq!(banner.severity, StatusBannerSeverity::Warning);
    }

    #[test]
    fn send_uses_the_fixed_subject_and_the_edited_body() {
        let (mut app, cmd_rx, _ui_tx) = test_app();
        app.email_input = "alice@example.com".to_string();
        app.draft_input = "See you Friday.".to_string();
        app.handle_send_email();

        match cmd_rx.try_recv().expect("command queued") {
            BackendCommand::SendEmail {
                recipient_email,
                subject,
                body,
            } => {
                assert_eq!(recipient_email, "alice@example.com");
                assert_eq!(subject, "Response");
                assert_eq!(body, "See you Friday.");
            }
            BackendCommand::FetchLastMessage { .. } => panic!("unexpected fetch command"),
        }
    }

    #[test]
    fn send_failure_keeps_the_fetched_message_and_draft() {
        let (mut app, _cmd_rx, ui_tx) = test_app();
        ui_tx
            .try_send(fetched("Hello?", "Draft reply"))
            .expect("queue event");
        app.process_ui_events();

        ui_tx
            .try_send(UiEvent::Error(UiError::from_message(
                UiErrorContext::SendEmail,
                "smtp refused",
            )))
            .expect("queue event");
        app.process_ui_events();

        assert_eq!(app.store.error.as_deref(), Some("smtp refused"));
        assert_eq!(app.store.last_message.as_deref(), Some("Hello?"));
        assert_eq!(app.store.generated_response.as_deref(), Some("Draft reply"));
        assert_eq!(app.draft_input, "Draft reply");
    }

    #[test]
    fn overlapping_fetch_completions_apply_in_arrival_order() {
        let (mut app, _cmd_rx, ui_tx) = test_app();
        // Fetch A was issued before fetch B, but B's response arrives first.
        ui_tx
            .try_send(fetched("message B", "draft B"))
            .expect("queue event");
        ui_tx
            .try_send(fetched("message A", "draft A"))
            .expect("queue event");
        app.process_ui_events();

        assert_eq!(app.store.last_message.as_deref(), Some("message A"));
        assert_eq!(app.store.generated_response.as_deref(), Some("draft A"));
        assert_eq!(app.draft_input, "draft A");
    }

    #[test]
    fn auth_failure_returns_to_the_login_view() {
        let (mut app, _cmd_rx, ui_tx) = test_app();
        app.view_state = AppViewState::Assistant;
        ui_tx
            .try_send(UiEvent::Error(UiError::from_message(
                UiErrorContext::FetchMessage,
                "401 Unauthorized",
            )))
            .expect("queue event");
        app.process_ui_events();

        assert_eq!(app.view_state, AppViewState::Login);
        assert_eq!(app.store.error.as_deref(), Some("401 Unauthorized"));
        assert!(!app.store.loading);
    }

    #[test]
    fn auth_failure_cancels_reveal_ticking_and_reentry_resumes_it() {
        let (mut app, _cmd_rx, ui_tx) = test_app();
        app.view_state = AppViewState::Assistant;
        ui_tx
            .try_send(fetched("Hello?", "Draft reply"))
            .expect("queue event");
        app.process_ui_events();
        assert!(app.ticker.is_active());

        ui_tx
            .try_send(UiEvent::Error(UiError::from_message(
                UiErrorContext::FetchMessage,
                "session expired",
            )))
            .expect("queue event");
        app.process_ui_events();

        assert_eq!(app.view_state, AppViewState::Login);
        assert!(!app.ticker.is_active(), "no tick may fire after teardown");

        app.enter_assistant_view();
        assert_eq!(app.view_state, AppViewState::Assistant);
        assert!(app.ticker.is_active(), "interrupted reveal resumes");
    }

    #[test]
    fn reset_session_clears_all_transient_state() {
        let (mut app, _cmd_rx, ui_tx) = test_app();
        app.view_state = AppViewState::Assistant;
        app.email_input = "alice@example.com".to_string();
        ui_tx.try_send(fetched("A?", "draft")).expect("queue event");
        app.process_ui_events();

        app.reset_session();

        assert_eq!(app.view_state, AppViewState::Login);
        assert_eq!(app.store, AssistantState::default());
        assert!(app.email_input.is_empty());
        assert!(app.draft_input.is_empty());
        assert!(app.reveal.is_empty());
        assert!(!app.ticker.is_active());
        assert_eq!(app.last_fetched_at, None);
    }
}
