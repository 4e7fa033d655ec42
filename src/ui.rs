use crate::canvas::{Canvas, DIMENSION_STEP, MAX_DIMENSION, MIN_DIMENSION};
use crate::editor::{Command, Dimension};

/// Width of the control panel on the right of the window, in logical pixels
pub const PANEL_WIDTH: f32 = 480.0;

/// Clear/Export buttons, dimension sliders and the export text view.
///
/// The panel only emits commands; the caller applies them to the editor.
#[derive(Debug, Clone)]
pub struct ControlPanel {
    width: u32,
    height: u32,
}

impl ControlPanel {
    pub fn new(canvas: &Canvas) -> Self {
        Self {
            width: canvas.width(),
            height: canvas.height(),
        }
    }

    pub fn show(&mut self, ctx: &egui::Context, export_text: &str) -> Vec<Command> {
        let mut commands = Vec::new();

        egui::SidePanel::right("controls")
            .exact_width(PANEL_WIDTH)
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    let size = egui::vec2(150.0, 50.0);
                    if ui.add_sized(size, egui::Button::new("Clear")).clicked() {
                        commands.push(Command::Clear);
                    }
                    if ui.add_sized(size, egui::Button::new("Export")).clicked() {
                        commands.push(Command::Export);
                    }
                });

                ui.add_space(30.0);
                if Self::dimension_slider(ui, &mut self.width, "Canvas Width") {
                    commands.push(Command::Resize(Dimension::Width, self.width));
                }
                ui.add_space(30.0);
                if Self::dimension_slider(ui, &mut self.height, "Canvas Height") {
                    commands.push(Command::Resize(Dimension::Height, self.height));
                }

                ui.add_space(30.0);
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let mut text = export_text;
                    ui.add(
                        egui::TextEdit::multiline(&mut text)
                            .font(egui::TextStyle::Monospace)
                            .desired_width(f32::INFINITY)
                            .desired_rows(20),
                    );
                });
            });

        commands
    }

    fn dimension_slider(ui: &mut egui::Ui, value: &mut u32, label: &str) -> bool {
        ui.add(
            egui::Slider::new(value, MIN_DIMENSION..=MAX_DIMENSION)
                .step_by(DIMENSION_STEP as f64)
                .text(label),
        )
        .changed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_starts_at_canvas_dimensions() {
        let panel = ControlPanel::new(&Canvas::new(16, 24));
        assert_eq!((panel.width, panel.height), (16, 24));
    }

    #[test]
    fn idle_frame_emits_no_commands() {
        let ctx = egui::Context::default();
        let mut panel = ControlPanel::new(&Canvas::default());
        let mut commands = Vec::new();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            commands = panel.show(ctx, "0x0, \n");
        });
        assert!(commands.is_empty());
    }
}
