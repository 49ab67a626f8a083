use egui::{Align, Align2, Button, Color32, Frame, Key, Layout, Margin, RichText, TextEdit, Ui};

use super::event::UiEvent;
use super::state::*;

const TITLE: &str = "Limit-ordre";
const FORM_WIDTH: f32 = 512.0;

const PAGE_BG: Color32 = Color32::from_rgb(243, 244, 246);
const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
const BORDER: Color32 = Color32::from_rgb(212, 212, 212);
const TOTAL_BG: Color32 = Color32::from_rgb(239, 246, 255);
const ERROR_BG: Color32 = Color32::from_rgb(254, 226, 226);
const ERROR_FG: Color32 = Color32::from_rgb(185, 28, 28);

const WARNING_ICON: &str = "⚠";

/// Draw the whole window and collect what the user did this frame.
pub fn render(state: &FormState, ctx: &egui::Context) -> Vec<UiEvent> {
    let mut events = Vec::new();
    let modal_open = state.pending_confirmation.is_some();

    egui::CentralPanel::default()
        .frame(Frame::central_panel(&ctx.style()).fill(PAGE_BG).inner_margin(32.0))
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.set_max_width(FORM_WIDTH);
                ui.heading(TITLE);
                ui.add_space(24.0);

                ui.add_enabled_ui(!modal_open, |ui| {
                    Frame::none()
                        .fill(Color32::WHITE)
                        .rounding(12.0)
                        .inner_margin(32.0)
                        .show(ui, |ui| {
                            ui.with_layout(Layout::top_down(Align::Min), |ui| {
                                form_body(state, ui, &mut events);
                            });
                        });
                });
            });
        });

    if let Some(question) = &state.pending_confirmation {
        confirmation_modal(ctx, question, &mut events);
    }

    events
}

fn form_body(state: &FormState, ui: &mut Ui, events: &mut Vec<UiEvent>) {
    ui.label(format!("Eiendel: {}", state.asset_pair));
    ui.add_space(16.0);

    ui.label("Nåværende markedspris");
    ui.label(state.market_price_display());
    ui.add_space(16.0);

    side_toggle(state, ui, events);
    ui.add_space(16.0);

    numeric_input(
        ui,
        "Limit-pris",
        "I norske kroner (NOK).",
        &state.limit_price,
        LIMIT_PRICE_ERROR,
        events,
        |text| UiEvent::LimitPriceEdited { text },
        UiEvent::LimitPriceBlurred,
    );
    ui.add_space(16.0);

    numeric_input(
        ui,
        "Volum",
        "I Bitcoin (BTC).",
        &state.volume,
        VOLUME_ERROR,
        events,
        |text| UiEvent::VolumeEdited { text },
        UiEvent::VolumeBlurred,
    );
    ui.add_space(16.0);

    Frame::none()
        .fill(TOTAL_BG)
        .rounding(12.0)
        .inner_margin(Margin::symmetric(24.0, 16.0))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label("Total sum:");
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label(state.total_display());
                });
            });
        });
    ui.add_space(32.0);

    let submit = Button::new(RichText::new("Plasser ordre").color(Color32::WHITE))
        .fill(ACCENT)
        .rounding(12.0)
        .min_size(egui::vec2(ui.available_width(), 36.0));
    if ui.add_enabled(state.form_is_valid(), submit).clicked() {
        events.push(UiEvent::SubmitRequested);
    }
}

fn side_toggle(state: &FormState, ui: &mut Ui, events: &mut Vec<UiEvent>) {
    ui.columns(2, |cols| {
        for (col, side) in cols.iter_mut().zip([OrderSide::Buy, OrderSide::Sell]) {
            let selected = state.side == side;
            let text = if selected {
                RichText::new(side.label()).color(Color32::WHITE)
            } else {
                RichText::new(side.label())
            };
            let button = Button::new(text)
                .fill(if selected { ACCENT } else { Color32::TRANSPARENT })
                .stroke((1.0, if selected { ACCENT } else { BORDER }))
                .rounding(12.0)
                .min_size(egui::vec2(col.available_width(), 32.0));
            if col.add(button).clicked() {
                events.push(UiEvent::SideChanged { side });
            }
        }
    });
}

#[allow(clippy::too_many_arguments)]
fn numeric_input(
    ui: &mut Ui,
    label: &str,
    hint: &str,
    field: &NumericField,
    error_text: &str,
    events: &mut Vec<UiEvent>,
    edited: impl FnOnce(String) -> UiEvent,
    blurred: UiEvent,
) {
    ui.label(label);
    ui.add_space(8.0);

    let mut text = field.text.clone();
    let response = ui.add(TextEdit::singleline(&mut text).desired_width(f32::INFINITY));
    if response.changed() {
        events.push(edited(text));
    }
    if response.lost_focus() {
        let enter = ui.input(|i| i.key_pressed(Key::Enter));
        events.extend(focus_lost_events(blurred, enter));
    }

    if field.error {
        inline_error(ui, error_text);
    }
    ui.label(RichText::new(hint).small());
}

/// egui drops focus on Enter. The submit goes first so it sees the flags as
/// they were before this blur's validation.
fn focus_lost_events(blurred: UiEvent, enter_pressed: bool) -> Vec<UiEvent> {
    if enter_pressed {
        vec![UiEvent::SubmitRequested, blurred]
    } else {
        vec![blurred]
    }
}

/// Warning row shown under a field that failed validation.
pub fn inline_error(ui: &mut Ui, description: &str) {
    Frame::none()
        .fill(ERROR_BG)
        .rounding(12.0)
        .inner_margin(Margin::symmetric(16.0, 8.0))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(WARNING_ICON).color(ERROR_FG).small());
                ui.label(RichText::new(description).color(ERROR_FG).small());
            });
        });
}

fn confirmation_modal(ctx: &egui::Context, question: &str, events: &mut Vec<UiEvent>) {
    egui::Window::new("Bekreft")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(question);
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui.button("OK").clicked() {
                    events.push(UiEvent::ConfirmationAnswered { accepted: true });
                }
                if ui.button("Avbryt").clicked() {
                    events.push(UiEvent::ConfirmationAnswered { accepted: false });
                }
            });
        });
}
