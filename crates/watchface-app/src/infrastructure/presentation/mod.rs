//! Presentation adapters for [`FaceSurfaces`] and [`Canvas`].
//!
//! - **`terminal`** – Text-mode "display" for the simulator: prints a frame
//!   summary (colors, label texts, canvas shapes) whenever something changed.
//! - **`recording`** – Test doubles that remember every call and the
//!   resulting state.
//!
//! Both keep their label bookkeeping in a [`SurfaceState`], so a label
//! behaves the same way in the simulator and in tests.
//!
//! [`FaceSurfaces`]: crate::application::surfaces::FaceSurfaces
//! [`Canvas`]: crate::application::render_face::Canvas

pub mod recording;
pub mod terminal;

use std::collections::BTreeMap;

use watchface_core::{Color, Rect};

use crate::application::surfaces::{FaceLayout, FontKey, LabelId};

/// Current look of one text label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelState {
    pub frame: Rect,
    pub font: FontKey,
    pub color: Color,
    pub text: String,
    pub hidden: bool,
}

/// Window contents as last set by the face.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceState {
    pub built: bool,
    pub bounds: Rect,
    pub background: Color,
    pub labels: BTreeMap<LabelId, LabelState>,
}

impl Default for SurfaceState {
    fn default() -> Self {
        Self {
            built: false,
            bounds: Rect::default(),
            // A fresh window is white until told otherwise.
            background: Color::WHITE,
            labels: BTreeMap::new(),
        }
    }
}

impl SurfaceState {
    pub fn build(&mut self, layout: &FaceLayout) {
        self.built = true;
        self.bounds = layout.bounds;
        self.labels = layout
            .labels
            .iter()
            .map(|label| {
                (
                    label.id,
                    LabelState {
                        frame: label.frame,
                        font: label.font,
                        color: label.initial_color,
                        text: String::new(),
                        hidden: false,
                    },
                )
            })
            .collect();
    }

    pub fn teardown(&mut self) {
        self.built = false;
        self.labels.clear();
    }

    pub fn label(&self, id: LabelId) -> Option<&LabelState> {
        self.labels.get(&id)
    }

    /// Applies `f` to the label if it exists.  Returns whether it did.
    pub fn update_label(&mut self, id: LabelId, f: impl FnOnce(&mut LabelState)) -> bool {
        match self.labels.get_mut(&id) {
            Some(label) => {
                f(label);
                true
            }
            None => false,
        }
    }

    /// Estimated rendered width of the label text, capped at the frame width.
    pub fn estimated_width(&self, id: LabelId) -> i16 {
        self.label(id).map_or(0, |label| {
            let glyphs = i16::try_from(label.text.chars().count()).unwrap_or(i16::MAX);
            glyphs
                .saturating_mul(label.font.average_glyph_width())
                .min(label.frame.size.w)
        })
    }
}
