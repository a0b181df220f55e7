//! Terminal "display" for the simulator.
//!
//! Instead of pixels, every frame is printed as a short text summary:
//!
//! ```text
//! ── frame 180x180 ── background MintGreen (#AAFFAA)
//!   steps  Black (#000000)  "💜 1260"
//!   time   Black (#000000)  "10:42"
//!   date   White (#FFFFFF)  "Jul 21"
//!   canvas badge (65,110 50x25 r5) OxfordBlue (#0000AA)
//!   canvas ring  (90,90 r75 w1) OxfordBlue (#0000AA)
//! ```

use std::fmt::Write as _;

use watchface_core::Color;

use super::recording::CanvasOp;
use super::SurfaceState;
use crate::application::surfaces::{FaceLayout, FaceSurfaces, LabelId};

#[derive(Debug, Default)]
pub struct TerminalSurfaces {
    state: SurfaceState,
    redraw_pending: bool,
}

impl TerminalSurfaces {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SurfaceState {
        &self.state
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw_pending)
    }

    /// Renders the current window and the given canvas primitives as text.
    pub fn render_frame(&self, canvas: &[CanvasOp]) -> String {
        let mut out = String::new();
        let size = self.state.bounds.size;
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "── frame {}x{} ── background {}",
            size.w, size.h, self.state.background
        );

        for id in [LabelId::Steps, LabelId::Time, LabelId::Date] {
            let Some(label) = self.state.label(id) else {
                continue;
            };
            let name = match id {
                LabelId::Time => "time",
                LabelId::Date => "date",
                LabelId::Steps => "steps",
            };
            let hidden = if label.hidden { "  (hidden)" } else { "" };
            let _ = writeln!(out, "  {name:<6} {}  {:?}{hidden}", label.color, label.text);
        }

        for op in canvas {
            let _ = match *op {
                CanvasOp::FillRoundRect {
                    rect,
                    corner_radius,
                    color,
                } => writeln!(
                    out,
                    "  canvas badge ({},{} {}x{} r{}) {}",
                    rect.origin.x,
                    rect.origin.y,
                    rect.size.w,
                    rect.size.h,
                    corner_radius,
                    color
                ),
                CanvasOp::Circle {
                    center,
                    radius,
                    stroke_width,
                    color,
                } => writeln!(
                    out,
                    "  canvas ring  ({},{} r{} w{}) {}",
                    center.x, center.y, radius, stroke_width, color
                ),
            };
        }
        out
    }
}

impl FaceSurfaces for TerminalSurfaces {
    fn build(&mut self, layout: &FaceLayout) {
        self.state.build(layout);
        self.redraw_pending = true;
    }

    fn teardown(&mut self) {
        self.state.teardown();
        self.redraw_pending = false;
    }

    fn set_background_color(&mut self, color: Color) {
        self.state.background = color;
        self.redraw_pending = true;
    }

    fn set_text_color(&mut self, label: LabelId, color: Color) {
        self.redraw_pending |= self.state.update_label(label, |l| l.color = color);
    }

    fn set_text(&mut self, label: LabelId, text: &str) {
        self.redraw_pending |= self.state.update_label(label, |l| l.text = text.to_string());
    }

    fn set_hidden(&mut self, label: LabelId, hidden: bool) {
        self.redraw_pending |= self.state.update_label(label, |l| l.hidden = hidden);
    }

    fn content_width(&self, label: LabelId) -> i16 {
        self.state.estimated_width(label)
    }

    fn mark_canvas_dirty(&mut self) {
        self.redraw_pending = true;
    }
}
