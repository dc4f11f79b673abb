//! GUI example using egui.
//!
//! This example demonstrates how to put numeric_mask in front of an egui text field:
//! typed characters and pastes are routed through the mask before the `TextEdit`
//! sees them, and losing focus commits the value.
//! Run with: cargo run --example egui_app

use eframe::egui;
use numeric_mask::{
    Config, DecimalSign, FieldHost, KeyEvent, NumberMask, TextField, Validation, Verdict,
};

/// The `TextEdit` buffer seen as a mask host.
struct EguiField<'a> {
    text: &'a mut String,
    cursor: usize,
    message: &'a mut String,
}

impl FieldHost for EguiField<'_> {
    fn value(&self) -> &str {
        self.text
    }

    fn cursor(&self) -> usize {
        self.cursor
    }

    fn set_value(&mut self, value: String) {
        self.cursor = value.chars().count();
        *self.text = value;
    }

    fn emit_validation(&mut self, validation: &Validation) {
        *self.message = validation.message();
    }
}

struct MaskApp {
    mask: NumberMask,
    text: String,
    message: String,
}

impl MaskApp {
    fn new() -> Result<Self, numeric_mask::MaskError> {
        let config = Config::builder()
            .allow_empty(false)
            .bounds(-1000.0, 1000.0)
            .build()?;
        let mut app = Self {
            mask: NumberMask::new(config)?,
            text: String::new(),
            message: String::new(),
        };
        let mut host = EguiField {
            text: &mut app.text,
            cursor: 0,
            message: &mut app.message,
        };
        app.mask.attach(&mut host)?;
        Ok(app)
    }

    fn host(&mut self, cursor: usize) -> EguiField<'_> {
        EguiField {
            text: &mut self.text,
            cursor,
            message: &mut self.message,
        }
    }

    /// Drops typed characters the mask rejects and replaces pastes with their
    /// normalized form.
    fn filter_events(&mut self, ctx: &egui::Context, id: egui::Id) {
        let cursor = egui::TextEdit::load_state(ctx, id)
            .and_then(|state| state.cursor.char_range())
            .map(|range| range.primary.index)
            .unwrap_or_else(|| self.text.chars().count());

        let events = ctx.input_mut(|i| std::mem::take(&mut i.events));
        let mut kept = Vec::with_capacity(events.len());
        let mut preview = TextField::new(&self.text).with_cursor(cursor);

        for event in events {
            match event {
                egui::Event::Text(typed) => {
                    let mut allowed = String::new();
                    for c in typed.chars() {
                        let key = KeyEvent::char(c);
                        if self.mask.on_key_down(&preview, &key) == Verdict::Allow {
                            preview.apply_key(&key);
                            allowed.push(c);
                        }
                    }
                    if !allowed.is_empty() {
                        kept.push(egui::Event::Text(allowed));
                    }
                }
                egui::Event::Paste(pasted) => {
                    let mask = self.mask.clone();
                    let mut host = self.host(cursor);
                    mask.on_paste(&mut host, &pasted);
                    preview = TextField::new(&self.text);
                }
                other => kept.push(other),
            }
        }

        ctx.input_mut(|i| i.events = kept);
    }

    fn reconfigure(&mut self, config: Config) {
        let config = config.with_non_negative_bounds();
        let mut mask = self.mask.clone();
        let mut host = self.host(0);
        if let Err(err) = mask.configure(&mut host, config) {
            self.message = err.to_string();
            return;
        }
        self.mask = mask;
    }
}

impl eframe::App for MaskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("numeric_mask GUI Demo");

            let id = ui.make_persistent_id("numeric_field");
            if ctx.memory(|m| m.has_focus(id)) {
                self.filter_events(ctx, id);
            }

            let response = ui.add(
                egui::TextEdit::singleline(&mut self.text)
                    .id(id)
                    .desired_width(240.0)
                    .font(egui::TextStyle::Monospace),
            );
            if response.lost_focus() {
                let mask = self.mask.clone();
                let mut host = self.host(0);
                mask.on_change(&mut host);
            }

            ui.separator();

            let current = *self.mask.config();
            let mut allow_empty = current.allow_empty();
            let mut allow_negative = current.allow_negative();
            let mut allow_decimals = current.allow_decimals();
            let mut comma = current.decimal_sign() == DecimalSign::Comma;

            let mut changed = false;
            changed |= ui.checkbox(&mut allow_empty, "allow empty").changed();
            changed |= ui.checkbox(&mut allow_negative, "allow negative").changed();
            changed |= ui.checkbox(&mut allow_decimals, "allow decimals").changed();
            changed |= ui.checkbox(&mut comma, "comma separator").changed();

            if changed {
                let sign = if comma {
                    DecimalSign::Comma
                } else {
                    DecimalSign::Point
                };
                let built = current
                    .to_builder()
                    .allow_empty(allow_empty)
                    .allow_negative(allow_negative)
                    .allow_decimals(allow_decimals)
                    .decimal_sign(sign)
                    .build();
                match built {
                    Ok(config) => self.reconfigure(config),
                    Err(err) => self.message = err.to_string(),
                }
            }

            ui.separator();

            ui.horizontal(|ui| {
                ui.label(format!("Pattern: {:?}", self.mask.snapshot().active));
                if self.message.is_empty() {
                    ui.label("Validation: ok");
                } else {
                    ui.colored_label(egui::Color32::RED, &self.message);
                }
            });
        });
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let app = MaskApp::new()?;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([480.0, 240.0]),
        ..Default::default()
    };
    eframe::run_native(
        "numeric_mask GUI Demo",
        options,
        Box::new(move |_cc| Box::new(app)),
    )?;
    Ok(())
}
