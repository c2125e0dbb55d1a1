//! Backend worker: drains the UI command queue on its own tokio runtime.

use std::thread;

use client_core::{failure_text, AssistantClient, Operation};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

/// Spawn the worker thread. Every network command runs on its own task:
/// requests are fire-and-forget, a newer request never cancels or waits for
/// an older one, and completion events land in resolution order.
pub fn launch(client: AssistantClient, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::FetchLastMessage { recipient_email } => {
                        tracing::info!(recipient_email = %recipient_email, "backend: fetch_last_message");
                        let client = client.clone();
                        let ui_tx = ui_tx.clone();
                        tokio::spawn(async move {
                            match client.fetch_last_message(&recipient_email).await {
                                Ok(response) => {
                                    let _ = ui_tx.try_send(UiEvent::MessageFetched(response));
                                }
                                Err(err) => {
                                    tracing::error!("backend: fetch_last_message failed: {err}");
                                    let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                                        UiErrorContext::FetchMessage,
                                        failure_text(&err, Operation::FetchMessage),
                                    )));
                                }
                            }
                        });
                    }
                    BackendCommand::SendEmail {
                        recipient_email,
                        subject,
                        body,
                    } => {
                        tracing::info!(
                            recipient_email = %recipient_email,
                            body_len = body.len(),
                            "backend: send_email"
                        );
                        let client = client.clone();
                        let ui_tx = ui_tx.clone();
                        tokio::spawn(async move {
                            match client.send_email(&recipient_email, &subject, &body).await {
                                Ok(()) => {
                                    let _ = ui_tx.try_send(UiEvent::EmailSent);
                                }
                                Err(err) => {
                                    tracing::error!("backend: send_email failed: {err}");
                                    let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                                        UiErrorContext::SendEmail,
                                        failure_text(&err, Operation::SendEmail),
                                    )));
                                }
                            }
                        });
                    }
                }
            }
        });
    });
}
