//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use client_core::{ClientSettings, HttpOrderClient, OrderSubmitter};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    settings: ClientSettings,
) {
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

        let client = match HttpOrderClient::from_settings(&settings) {
            Ok(client) => Arc::new(client),
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: {err}"),
                )));
                tracing::error!("failed to build order client: {err}");
                return;
            }
        };

        runtime.block_on(run_worker(cmd_rx, ui_tx, client));
    });
}

/// Drains commands until the UI side hangs up. Each order runs on its own
/// task so the queue keeps moving while a request is in flight. The blocking
/// `recv` needs a multi-thread runtime for spawned tasks to progress.
pub async fn run_worker(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    submitter: Arc<dyn OrderSubmitter>,
) {
    let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            BackendCommand::SubmitOrder(pending) => {
                let submitter = submitter.clone();
                let ui_tx = ui_tx.clone();
                tokio::spawn(async move {
                    let outcome = submitter.submit_order(&pending.payload).await;
                    if ui_tx
                        .send(UiEvent::OrderSettled {
                            id: pending.id,
                            outcome,
                        })
                        .is_err()
                    {
                        tracing::warn!(submission = %pending.id, "ui closed before order settled");
                    }
                });
            }
        }
    }
    tracing::debug!("backend command queue closed; worker exiting");
}
