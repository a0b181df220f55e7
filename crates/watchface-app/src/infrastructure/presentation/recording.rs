//! Recording test doubles for the presentation seams.
//!
//! [`RecordingSurfaces`] keeps both the call log and the resulting window
//! state behind an `Arc<Mutex<..>>`, so a test can hand one clone to the face
//! and assert on the other.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use watchface_core::{Color, Point, Rect};

use super::SurfaceState;
use crate::application::render_face::Canvas;
use crate::application::surfaces::{FaceLayout, FaceSurfaces, LabelId};

/// One call made on a [`FaceSurfaces`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCall {
    Build,
    Teardown,
    Background(Color),
    TextColor(LabelId, Color),
    Text(LabelId, String),
    Hidden(LabelId, bool),
    CanvasDirty,
}

#[derive(Debug, Default)]
struct Recorded {
    state: SurfaceState,
    calls: Vec<SurfaceCall>,
    content_widths: HashMap<LabelId, i16>,
}

#[derive(Debug, Clone, Default)]
pub struct RecordingSurfaces {
    inner: Arc<Mutex<Recorded>>,
}

impl RecordingSurfaces {
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls so far, oldest first.
    pub fn calls(&self) -> Vec<SurfaceCall> {
        self.lock().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.lock().calls.clear();
    }

    /// Snapshot of the window state.
    pub fn state(&self) -> SurfaceState {
        self.lock().state.clone()
    }

    pub fn text(&self, label: LabelId) -> Option<String> {
        self.lock().state.label(label).map(|l| l.text.clone())
    }

    pub fn text_color(&self, label: LabelId) -> Option<Color> {
        self.lock().state.label(label).map(|l| l.color)
    }

    pub fn is_hidden(&self, label: LabelId) -> Option<bool> {
        self.lock().state.label(label).map(|l| l.hidden)
    }

    pub fn background(&self) -> Color {
        self.lock().state.background
    }

    /// Number of canvas redraw requests so far.
    pub fn canvas_dirty_count(&self) -> usize {
        self.lock()
            .calls
            .iter()
            .filter(|call| **call == SurfaceCall::CanvasDirty)
            .count()
    }

    /// Overrides the measured width reported for `label`.
    pub fn set_content_width(&self, label: LabelId, width: i16) {
        self.lock().content_widths.insert(label, width);
    }

    fn lock(&self) -> MutexGuard<'_, Recorded> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, call: SurfaceCall) -> MutexGuard<'_, Recorded> {
        let mut inner = self.lock();
        inner.calls.push(call);
        inner
    }
}

impl FaceSurfaces for RecordingSurfaces {
    fn build(&mut self, layout: &FaceLayout) {
        self.record(SurfaceCall::Build).state.build(layout);
    }

    fn teardown(&mut self) {
        self.record(SurfaceCall::Teardown).state.teardown();
    }

    fn set_background_color(&mut self, color: Color) {
        self.record(SurfaceCall::Background(color)).state.background = color;
    }

    fn set_text_color(&mut self, label: LabelId, color: Color) {
        self.record(SurfaceCall::TextColor(label, color))
            .state
            .update_label(label, |l| l.color = color);
    }

    fn set_text(&mut self, label: LabelId, text: &str) {
        self.record(SurfaceCall::Text(label, text.to_string()))
            .state
            .update_label(label, |l| l.text = text.to_string());
    }

    fn set_hidden(&mut self, label: LabelId, hidden: bool) {
        self.record(SurfaceCall::Hidden(label, hidden))
            .state
            .update_label(label, |l| l.hidden = hidden);
    }

    fn content_width(&self, label: LabelId) -> i16 {
        let inner = self.lock();
        inner
            .content_widths
            .get(&label)
            .copied()
            .unwrap_or_else(|| inner.state.estimated_width(label))
    }

    fn mark_canvas_dirty(&mut self) {
        self.record(SurfaceCall::CanvasDirty);
    }
}

// ── Canvas ────────────────────────────────────────────────────────────────────

/// One primitive drawn on a [`Canvas`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasOp {
    FillRoundRect {
        rect: Rect,
        corner_radius: u16,
        color: Color,
    },
    Circle {
        center: Point,
        radius: u16,
        stroke_width: u8,
        color: Color,
    },
}

/// A canvas that records what was drawn on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingCanvas {
    pub ops: Vec<CanvasOp>,
}

impl Canvas for RecordingCanvas {
    fn fill_round_rect(&mut self, rect: Rect, corner_radius: u16, color: Color) {
        self.ops.push(CanvasOp::FillRoundRect {
            rect,
            corner_radius,
            color,
        });
    }

    fn draw_circle(&mut self, center: Point, radius: u16, stroke_width: u8, color: Color) {
        self.ops.push(CanvasOp::Circle {
            center,
            radius,
            stroke_width,
            color,
        });
    }
}
