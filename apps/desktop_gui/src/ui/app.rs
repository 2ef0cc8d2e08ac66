use std::f32::consts::TAU;

use client_core::{OrderBanner, OrderForm, SubmissionPhase, SubmitError, FAILURE_BANNER};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::{PizzaSize, TOPPINGS};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{err_label, UiError, UiErrorContext, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;
use crate::controller::routes::Route;

const SIZE_PLACEHOLDER: &str = "----Choose Size----";
const SUCCESS_COLOR: egui::Color32 = egui::Color32::from_rgb(46, 139, 87);
const FAILURE_COLOR: egui::Color32 = egui::Color32::from_rgb(200, 55, 55);
const ERROR_TEXT_COLOR: egui::Color32 = egui::Color32::from_rgb(220, 80, 80);

#[derive(Debug, Clone, Default)]
pub struct StartupConfig {
    pub start_route: Route,
}

pub struct PizzaOrderApp {
    route: Route,
    form: OrderForm,
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    status: String,
}

impl PizzaOrderApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        startup: StartupConfig,
    ) -> Self {
        Self {
            route: startup.start_route,
            form: OrderForm::new(),
            cmd_tx,
            ui_rx,
            status: String::new(),
        }
    }

    pub fn navigate(&mut self, path: &str) {
        let route = Route::from_path(path);
        tracing::debug!(requested = path, resolved = route.path(), "navigating");
        self.route = route;
    }

    /// Submit-control handler. A command that cannot be queued settles the
    /// submission as failed right away.
    pub fn submit_order(&mut self) {
        let pending = match self.form.begin_submission() {
            Ok(pending) => pending,
            Err(err) => {
                tracing::debug!("submit ignored: {err}");
                return;
            }
        };
        let id = pending.id;
        if !dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::SubmitOrder(pending),
            &mut self.status,
        ) {
            let reason = self.status.clone();
            self.show_error(UiError::from_message(UiErrorContext::SubmitOrder, &reason));
            self.form
                .complete_submission(id, Err(SubmitError::Unavailable(reason)));
        }
    }

    pub fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => self.status = message,
                UiEvent::Error(err) => self.show_error(err),
                UiEvent::OrderSettled { id, outcome } => {
                    self.form.complete_submission(id, outcome);
                }
            }
        }
    }

    fn show_error(&mut self, err: UiError) {
        tracing::warn!(context = ?err.context(), "{}", err.message());
        self.status = format!("{}: {}", err_label(err.category()), err.message());
    }

    fn show_home(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.heading("Welcome to Bloom Pizza!");
                ui.add_space(16.0);
                let response = pizza_image(ui, 260.0)
                    .on_hover_cursor(egui::CursorIcon::PointingHand)
                    .on_hover_text("order-pizza");
                if response.clicked() {
                    self.navigate(Route::ORDER_PATH);
                }
            });
        });
    }

    fn show_order_form(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Order Your Pizza");
            match self.form.banner() {
                Some(OrderBanner::Success(message)) => {
                    ui.colored_label(SUCCESS_COLOR, message);
                }
                Some(OrderBanner::Failure) => {
                    ui.colored_label(FAILURE_COLOR, FAILURE_BANNER);
                }
                None => {}
            }
            ui.add_space(8.0);

            ui.label("Full Name");
            let mut full_name = self.form.values().full_name.clone();
            let response = ui.add(
                egui::TextEdit::singleline(&mut full_name)
                    .id_salt("fullName")
                    .hint_text("Type full name"),
            );
            if response.changed() {
                self.form.set_full_name(full_name);
            }
            error_line(ui, &self.form.errors().full_name);
            ui.add_space(6.0);

            ui.label("Size");
            let current = self.form.values().size.clone();
            let mut choice = current.clone();
            let selected_text = PizzaSize::from_code(&current)
                .map(PizzaSize::label)
                .unwrap_or(SIZE_PLACEHOLDER);
            egui::ComboBox::from_id_salt("size")
                .selected_text(selected_text)
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut choice, String::new(), SIZE_PLACEHOLDER);
                    for size in PizzaSize::ALL {
                        ui.selectable_value(&mut choice, size.code().to_string(), size.label());
                    }
                });
            if choice != current {
                self.form.set_size(choice);
            }
            error_line(ui, &self.form.errors().size);
            ui.add_space(6.0);

            for topping in TOPPINGS.iter() {
                let mut checked = self.form.values().topping(topping.id);
                if ui.checkbox(&mut checked, topping.name).changed() {
                    if let Err(err) = self.form.set_topping(topping.id, checked) {
                        self.status = err.to_string();
                    }
                }
            }
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                let submit = ui.add_enabled(self.form.can_submit(), egui::Button::new("Submit"));
                if submit.clicked() {
                    self.submit_order();
                }
                if matches!(self.form.phase(), SubmissionPhase::Submitting(_)) {
                    ui.spinner();
                }
            });
        });
    }

    fn show_status_bar(&self, ctx: &egui::Context) {
        if self.status.is_empty() {
            return;
        }
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.small(&self.status);
        });
    }
}

fn error_line(ui: &mut egui::Ui, message: &str) {
    if !message.is_empty() {
        ui.colored_label(ERROR_TEXT_COLOR, message);
    }
}

/// Painted stand-in for the home page photo; the whole square is clickable.
fn pizza_image(ui: &mut egui::Ui, side: f32) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::click());
    let painter = ui.painter_at(rect);
    let center = rect.center();
    let radius = side / 2.0 - 4.0;

    painter.circle_filled(center, radius, egui::Color32::from_rgb(196, 140, 72));
    painter.circle_filled(center, radius * 0.86, egui::Color32::from_rgb(178, 34, 34));
    painter.circle_filled(center, radius * 0.8, egui::Color32::from_rgb(250, 214, 120));
    for slice in 0..8 {
        let angle = slice as f32 * TAU / 8.0 + 0.35;
        let ring = if slice % 2 == 0 { 0.55 } else { 0.3 };
        let pos = center + egui::vec2(angle.cos(), angle.sin()) * radius * ring;
        painter.circle_filled(pos, radius * 0.1, egui::Color32::from_rgb(160, 30, 40));
    }
    response
}

impl eframe::App for PizzaOrderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.show_status_bar(ctx);

        match self.route {
            Route::Home => self.show_home(ctx),
            Route::OrderForm => self.show_order_form(ctx),
        }

        if matches!(self.form.phase(), SubmissionPhase::Submitting(_)) {
            ctx.request_repaint_after(std::time::Duration::from_millis(16));
        } else {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}

#[cfg(test)]
#[path = "tests/app_tests.rs"]
mod tests;
