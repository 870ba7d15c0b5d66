use anyhow::{ensure, Result};
use scroll_core::canvas::DrawContext;
use scroll_core::shape::Shape;
use scroll_data::color::Rgb;

/// A scrollable animation pane: one viewport-sized canvas inside a region
/// `stack_height` viewports tall, owning the shapes it renders.
///
/// The host owns event wiring and the concrete drawing backend; the pane
/// only turns a scroll offset into a progress value and replays its shapes
/// in insertion order. Shapes whose marker range excludes the current
/// progress draw nothing for that frame.
pub struct Pane {
    width: f32,
    height: f32,
    stack_height: f32,
    shapes: Vec<Shape>,
}

const BACKGROUND: Rgb = Rgb::WHITE;

impl Pane {
    pub fn new(width: f32, height: f32, stack_height: f32) -> Result<Self> {
        ensure!(
            width > 0.0 && height > 0.0,
            "pane dimensions must be positive"
        );
        ensure!(stack_height >= 1.0, "stack height must be at least 1");
        Ok(Self {
            width,
            height,
            stack_height,
            shapes: Vec::new(),
        })
    }

    /// Chainable; shapes render in the order they were added.
    pub fn add_shape(&mut self, shape: Shape) -> &mut Self {
        self.shapes.push(shape);
        self
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// How many viewport heights of scroll the pane spans.
    pub fn stack_height(&self) -> f32 {
        self.stack_height
    }

    /// Re-measure after a host resize; debouncing stays host-side.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Scroll progress for the pane's current viewport position.
    ///
    /// `pane_top` is the y offset of the pane's top edge relative to the
    /// viewport; it goes negative as the user scrolls past the pane, so
    /// progress grows from 0 in viewport-height units.
    pub fn progress(&self, pane_top: f32) -> f32 {
        -pane_top / self.height
    }

    /// Clears the canvas and renders every shape at the progress implied
    /// by `pane_top`.
    pub fn render(&self, ctx: &mut dyn DrawContext, pane_top: f32) {
        let progress = self.progress(pane_top);
        tracing::debug!(progress, shapes = self.shapes.len(), "render pass");

        ctx.set_fill_color(BACKGROUND);
        ctx.set_line_width(2.0);
        ctx.fill_rect(0.0, 0.0, self.width, self.height);

        // Half-pixel offset for crisper strokes.
        ctx.translate(0.5, 0.5);
        for shape in &self.shapes {
            shape.render(ctx, progress, self.width, self.height);
        }
        ctx.translate(-0.5, -0.5);
    }
}
