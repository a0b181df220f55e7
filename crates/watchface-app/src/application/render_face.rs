//! Canvas drawing: the date badge and the accent rings.
//!
//! The canvas sits under the three labels.  On the configurable face it
//! draws a rounded badge sized to the date text plus two concentric rings,
//! all in the accent color:
//!
//! ```text
//!          ╭────────────╮   r = 80, stroke 3
//!        ╭─┼────────────┼─╮ r = 75, stroke 1
//!        │      10:42     │
//!        │   ╭────────╮   │ badge: content width + 10, 25 tall, y = 110
//!        │   │ Jul 21 │   │
//! ```
//!
//! The classic face draws only a fixed 60×25 badge at (60, 110).

use watchface_core::{Color, FaceProfile, Point, Rect, WatchfaceSettings};

/// Top edge of the date badge.
pub const BADGE_TOP: i16 = 110;
pub const BADGE_HEIGHT: i16 = 25;
/// Horizontal padding added to the date text width.
pub const BADGE_PADDING: i16 = 10;
pub const BADGE_CORNER_RADIUS: u16 = 5;

/// Fixed badge of the classic face.
pub const CLASSIC_BADGE: Rect = Rect::new(60, BADGE_TOP, 60, BADGE_HEIGHT);

/// `(radius, stroke width)` of the inner and outer rings.
pub const RINGS: [(u16, u8); 2] = [(75, 1), (80, 3)];

/// Vector drawing primitives the face needs.
pub trait Canvas {
    /// Fills a rectangle with all four corners rounded by `corner_radius`.
    fn fill_round_rect(&mut self, rect: Rect, corner_radius: u16, color: Color);

    /// Strokes a circle outline.
    fn draw_circle(&mut self, center: Point, radius: u16, stroke_width: u8, color: Color);
}

/// Badge rectangle for the given profile.
///
/// On the configurable face the badge is `date_width + 10` wide and centered
/// horizontally in `bounds`.
pub fn date_badge(profile: FaceProfile, bounds: Rect, date_width: i16) -> Rect {
    match profile {
        FaceProfile::Classic => CLASSIC_BADGE,
        FaceProfile::Configurable => {
            let width = date_width.max(0).saturating_add(BADGE_PADDING);
            let x = bounds.origin.x + (bounds.size.w - width) / 2;
            Rect::new(x, BADGE_TOP, width, BADGE_HEIGHT)
        }
    }
}

/// Draws the canvas layer.  `appearance` supplies the accent color.
pub fn draw_face_canvas(
    canvas: &mut impl Canvas,
    profile: FaceProfile,
    appearance: &WatchfaceSettings,
    bounds: Rect,
    date_width: i16,
) {
    let accent = appearance.accent_color;
    canvas.fill_round_rect(
        date_badge(profile, bounds, date_width),
        BADGE_CORNER_RADIUS,
        accent,
    );

    if profile == FaceProfile::Configurable {
        let center = bounds.center();
        for (radius, stroke) in RINGS {
            canvas.draw_circle(center, radius, stroke, accent);
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
