// cli.rs - Command-line interface configuration
use clap::Parser;

use crate::canvas::{Canvas, DEFAULT_HEIGHT, DEFAULT_SCALE, DEFAULT_WIDTH};

#[derive(Parser, Debug, Clone)]
#[command(name = "oled-bitmap")]
#[command(about = "Pixel grid editor that exports OLED bitmaps as byte arrays", long_about = None)]
pub struct Cli {
    /// Initial canvas width in cells (8..=128, rounded to a multiple of 8)
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Initial canvas height in cells (8..=128, rounded to a multiple of 8)
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Initial zoom factor (1.0..=5.0)
    #[arg(long, default_value_t = DEFAULT_SCALE)]
    pub scale: f32,

    /// Show exports in the panel only, without touching the system clipboard
    #[arg(long = "no-clipboard", default_value = "false")]
    pub no_clipboard: bool,
}

impl Cli {
    /// Blank canvas built from the command-line options, snapped and
    /// clamped the same way as the sliders and zoom
    pub fn canvas(&self) -> Canvas {
        let mut canvas = Canvas::default();
        canvas.resize(Some(self.width), None);
        canvas.resize(None, Some(self.height));
        canvas.set_scale(self.scale);
        canvas
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_canvas_defaults() {
        let cli = Cli::parse_from(["oled-bitmap"]);
        assert_eq!(cli.canvas(), Canvas::default());
        assert!(!cli.no_clipboard);
    }

    #[test]
    fn out_of_range_options_are_clamped() {
        let cli = Cli::parse_from(["oled-bitmap", "--width", "4", "--height", "512", "--scale", "9"]);
        let canvas = cli.canvas();
        assert_eq!(canvas.dimensions(), (8, 128));
        assert_eq!(canvas.scale(), 5.0);
    }

    #[test]
    fn off_step_width_is_snapped() {
        let cli = Cli::parse_from(["oled-bitmap", "--width", "20", "--height", "8"]);
        let mut canvas = cli.canvas();
        assert_eq!(canvas.dimensions(), (24, 8));

        // Rows hold whole bytes, so row 0 exports on line 0
        canvas.paint(0, 16);
        let text = crate::export::pack(&canvas).to_string();
        assert_eq!(text.lines().next(), Some("0x0, 0x0, 0x80, "));
    }
}
