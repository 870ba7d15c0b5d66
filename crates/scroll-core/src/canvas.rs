use scroll_data::color::Rgb;

/// The primitive drawing operations the engine needs from a 2D backend.
///
/// The surface mirrors the HTML canvas path API closely enough that any
/// vector backend can implement it; the engine issues these calls and never
/// looks at the result. Coordinates are in canvas pixels.
pub trait DrawContext {
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn quad_to(&mut self, cx: f32, cy: f32, x: f32, y: f32);
    fn cubic_to(&mut self, c1x: f32, c1y: f32, c2x: f32, c2y: f32, x: f32, y: f32);
    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    /// Full circle centered at (`cx`, `cy`).
    fn arc(&mut self, cx: f32, cy: f32, radius: f32);
    fn set_fill_color(&mut self, color: Rgb);
    fn set_stroke_color(&mut self, color: Rgb);
    fn set_line_width(&mut self, width: f32);
    /// Fills the current path.
    fn fill(&mut self);
    /// Strokes the current path.
    fn stroke(&mut self);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn set_font_size(&mut self, px: f32);
    fn fill_text(&mut self, text: &str, x: f32, y: f32);
    fn stroke_text(&mut self, text: &str, x: f32, y: f32);
    fn translate(&mut self, dx: f32, dy: f32);
}

/// A recorded drawing command, one per `DrawContext` call.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    BeginPath,
    MoveTo { x: f32, y: f32 },
    LineTo { x: f32, y: f32 },
    QuadTo { cx: f32, cy: f32, x: f32, y: f32 },
    CubicTo { c1x: f32, c1y: f32, c2x: f32, c2y: f32, x: f32, y: f32 },
    Rect { x: f32, y: f32, w: f32, h: f32 },
    Arc { cx: f32, cy: f32, radius: f32 },
    FillColor(Rgb),
    StrokeColor(Rgb),
    LineWidth(f32),
    Fill,
    Stroke,
    FillRect { x: f32, y: f32, w: f32, h: f32 },
    FontSize(f32),
    FillText { text: String, x: f32, y: f32 },
    StrokeText { text: String, x: f32, y: f32 },
    Translate { dx: f32, dy: f32 },
}

/// A `DrawContext` that records every call instead of rasterizing.
///
/// Used by the test suites; also handy for hosts that want to capture a
/// frame's draw list and replay it elsewhere.
#[derive(Default, Debug)]
pub struct Recorder {
    pub commands: Vec<Command>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl DrawContext for Recorder {
    fn begin_path(&mut self) {
        self.commands.push(Command::BeginPath);
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(Command::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.commands.push(Command::LineTo { x, y });
    }

    fn quad_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) {
        self.commands.push(Command::QuadTo { cx, cy, x, y });
    }

    fn cubic_to(&mut self, c1x: f32, c1y: f32, c2x: f32, c2y: f32, x: f32, y: f32) {
        self.commands.push(Command::CubicTo {
            c1x,
            c1y,
            c2x,
            c2y,
            x,
            y,
        });
    }

    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.commands.push(Command::Rect { x, y, w, h });
    }

    fn arc(&mut self, cx: f32, cy: f32, radius: f32) {
        self.commands.push(Command::Arc { cx, cy, radius });
    }

    fn set_fill_color(&mut self, color: Rgb) {
        self.commands.push(Command::FillColor(color));
    }

    fn set_stroke_color(&mut self, color: Rgb) {
        self.commands.push(Command::StrokeColor(color));
    }

    fn set_line_width(&mut self, width: f32) {
        self.commands.push(Command::LineWidth(width));
    }

    fn fill(&mut self) {
        self.commands.push(Command::Fill);
    }

    fn stroke(&mut self) {
        self.commands.push(Command::Stroke);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.commands.push(Command::FillRect { x, y, w, h });
    }

    fn set_font_size(&mut self, px: f32) {
        self.commands.push(Command::FontSize(px));
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        self.commands.push(Command::FillText {
            text: text.to_string(),
            x,
            y,
        });
    }

    fn stroke_text(&mut self, text: &str, x: f32, y: f32) {
        self.commands.push(Command::StrokeText {
            text: text.to_string(),
            x,
            y,
        });
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.commands.push(Command::Translate { dx, dy });
    }
}
