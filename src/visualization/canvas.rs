//! Drawing surface used by the simulation
//!
//! Coordinates are integer pixels, origin top-left, Y down. Ellipses are
//! given by their bounding box. `FrameLog` is the in-memory surface: it
//! keeps the last flushed frame and counts flushes.

use crate::simulation::states::Rgb;

pub trait Canvas {
    /// Open a `width` x `height` canvas filled with `background`.
    fn begin(&mut self, width: u32, height: u32, title: &str, background: Rgb);

    /// Fill the canvas with its background colour.
    fn clear(&mut self);

    /// Filled ellipse in the box (x, y, w, h). `outline: None` draws no border.
    fn fill_ellipse(&mut self, x: i32, y: i32, w: i32, h: i32, fill: Rgb, outline: Option<Rgb>);

    /// Make everything drawn since the last flush visible.
    fn flush(&mut self);

    /// Close the canvas. Windowed surfaces block here until the user closes them.
    fn end(&mut self);
}

/// A filled ellipse as it was drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ellipse {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
    pub fill: Rgb,
    pub outline: Option<Rgb>,
}

impl Ellipse {
    /// Centre of the bounding box in canvas coordinates.
    pub fn centre(&self) -> (f32, f32) {
        (
            self.x as f32 + self.w as f32 / 2.0,
            self.y as f32 + self.h as f32 / 2.0,
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct FrameLog {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub background: Option<Rgb>,
    pub open: bool,
    pending: Vec<Ellipse>,
    frame: Vec<Ellipse>,
    flushes: u64,
}

impl FrameLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shapes of the most recently flushed frame.
    pub fn frame(&self) -> &[Ellipse] {
        &self.frame
    }

    /// Number of frames made visible so far.
    pub fn flushes(&self) -> u64 {
        self.flushes
    }
}

impl Canvas for FrameLog {
    fn begin(&mut self, width: u32, height: u32, title: &str, background: Rgb) {
        self.width = width;
        self.height = height;
        self.title = title.to_string();
        self.background = Some(background);
        self.open = true;
        self.pending.clear();
        self.frame.clear();
    }

    fn clear(&mut self) {
        self.pending.clear();
    }

    fn fill_ellipse(&mut self, x: i32, y: i32, w: i32, h: i32, fill: Rgb, outline: Option<Rgb>) {
        self.pending.push(Ellipse { x, y, w, h, fill, outline });
    }

    fn flush(&mut self) {
        self.frame.clone_from(&self.pending);
        self.flushes += 1;
    }

    fn end(&mut self) {
        self.open = false;
    }
}
