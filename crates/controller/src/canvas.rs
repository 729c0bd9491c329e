//! Fixed-size drawing surface for the canvas exercise, recorded as a
//! display list so tests can assert on what was drawn.

use rand::Rng;

pub const CANVAS_WIDTH: u32 = 300;
pub const CANVAS_HEIGHT: u32 = 150;

const MIN_CIRCLE_RADIUS: f32 = 20.0;
const MAX_CIRCLE_RADIUS: f32 = 50.0;
const LABEL_MARGIN: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    FilledCircle { x: f32, y: f32, radius: f32, color: Rgb },
    Label { x: f32, y: f32, text: String },
}

#[derive(Debug)]
pub struct Canvas {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    pub fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgb) {
        self.commands
            .push(DrawCommand::FilledCircle { x, y, radius, color });
    }

    pub fn label(&mut self, x: f32, y: f32, text: impl Into<String>) {
        self.commands.push(DrawCommand::Label {
            x,
            y,
            text: text.into(),
        });
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(CANVAS_WIDTH, CANVAS_HEIGHT)
    }
}

/// Clears the surface, then draws one randomly positioned/sized/colored
/// filled circle and a timestamped label near the bottom edge. No
/// reproducibility requirement on the randomness.
pub fn draw_test_scene(canvas: &mut Canvas, rng: &mut impl Rng, now_millis: i64) {
    canvas.clear();

    let x = rng.gen_range(0.0..(canvas.width() as f32 - MAX_CIRCLE_RADIUS));
    let y = rng.gen_range(0.0..(canvas.height() as f32 - MAX_CIRCLE_RADIUS));
    let radius = rng.gen_range(MIN_CIRCLE_RADIUS..=MAX_CIRCLE_RADIUS);
    let color = Rgb {
        r: rng.gen(),
        g: rng.gen(),
        b: rng.gen(),
    };
    canvas.fill_circle(x, y, radius, color);

    canvas.label(
        LABEL_MARGIN,
        canvas.height() as f32 - LABEL_MARGIN,
        format!("Canvas Test {now_millis}"),
    );
}
