//! Presentation surfaces of the face: the window, its three text labels and
//! the vector canvas beneath them.
//!
//! The application layer never draws pixels itself.  It describes *what* the
//! window contains ([`FaceLayout`]) and pushes colors, texts and visibility
//! through the [`FaceSurfaces`] trait.  The host runtime decides how that
//! becomes visible (a terminal frame summary in the simulator, recorded calls
//! in tests).

use watchface_core::{Color, Rect, ScreenShape};

// ── Labels and fonts ──────────────────────────────────────────────────────────

/// The three text labels of the face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LabelId {
    Time,
    Date,
    Steps,
}

impl LabelId {
    pub const ALL: [LabelId; 3] = [LabelId::Time, LabelId::Date, LabelId::Steps];
}

/// System fonts used by the labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontKey {
    Bitham42Bold,
    Gothic24Bold,
    Gothic18Bold,
}

impl FontKey {
    /// Average advance width of one glyph in pixels.
    ///
    /// Good enough for hosts that cannot measure text, such as the terminal
    /// simulator; a real renderer reports the measured width instead.
    pub const fn average_glyph_width(self) -> i16 {
        match self {
            FontKey::Bitham42Bold => 21,
            FontKey::Gothic24Bold => 11,
            FontKey::Gothic18Bold => 8,
        }
    }
}

// ── Layout ────────────────────────────────────────────────────────────────────

/// Placement and initial style of one label.
///
/// Every label is center-aligned on a clear background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelLayout {
    pub id: LabelId,
    pub frame: Rect,
    pub font: FontKey,
    /// Text color until the first settings apply.
    pub initial_color: Color,
}

/// Full window layout: the canvas plus the three labels, bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceLayout {
    pub bounds: Rect,
    pub canvas: Rect,
    pub labels: [LabelLayout; 3],
}

impl FaceLayout {
    /// Builds the layout for a display of the given shape.
    pub fn for_screen(shape: ScreenShape) -> Self {
        let bounds = shape.bounds();
        let w = bounds.size.w;
        Self {
            bounds,
            canvas: bounds,
            labels: [
                LabelLayout {
                    id: LabelId::Time,
                    frame: Rect::new(0, shape.round_else(58, 52), w, 50),
                    font: FontKey::Bitham42Bold,
                    initial_color: Color::BLACK,
                },
                LabelLayout {
                    id: LabelId::Date,
                    frame: Rect::new(0, 105, w, 30),
                    font: FontKey::Gothic24Bold,
                    initial_color: Color::WHITE,
                },
                LabelLayout {
                    id: LabelId::Steps,
                    frame: Rect::new(0, 40, w, 30),
                    font: FontKey::Gothic18Bold,
                    initial_color: Color::BLACK,
                },
            ],
        }
    }

    /// Returns the layout entry for `id`.
    pub fn label(&self, id: LabelId) -> &LabelLayout {
        // `labels` holds exactly one entry per `LabelId`, in `LabelId::ALL` order.
        &self.labels[id as usize]
    }
}

// ── Surfaces trait ────────────────────────────────────────────────────────────

/// Everything the face controller can do to its window.
///
/// Calls made before [`build`](FaceSurfaces::build) or after
/// [`teardown`](FaceSurfaces::teardown) are the implementation's to ignore;
/// the controller itself never makes them.
#[cfg_attr(test, mockall::automock)]
pub trait FaceSurfaces {
    /// Creates the canvas and the three labels (window load).
    fn build(&mut self, layout: &FaceLayout);

    /// Destroys the labels and the canvas (window unload).
    fn teardown(&mut self);

    fn set_background_color(&mut self, color: Color);

    fn set_text_color(&mut self, label: LabelId, color: Color);

    fn set_text(&mut self, label: LabelId, text: &str);

    fn set_hidden(&mut self, label: LabelId, hidden: bool);

    /// Width in pixels of the label's rendered text.
    fn content_width(&self, label: LabelId) -> i16;

    /// Schedules a canvas redraw.
    fn mark_canvas_dirty(&mut self);
}

// ── Tests ─────────────────────────────────────────────────────────────────────
