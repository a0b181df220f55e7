//! Watchface: the face controller.
//!
//! Owns the settings record (configurable profile only), the window
//! surfaces, the clock and the health service, and exposes one method per
//! host callback.  The host serializes all calls onto one thread, so the
//! controller is mutated through `&mut self` with no locking.
//!
//! # Startup and shutdown
//!
//! ```text
//! Watchface::new   load settings (configurable)
//! init()           window_load → time, date, steps → tick units → health subscription
//! ... on_tick / on_health_event / on_inbox_received ...
//! deinit()         window_unload (storage is not written)
//! ```

use chrono::NaiveDateTime;
use tracing::{debug, error, info};
use watchface_core::{
    ConfigMessage, FaceProfile, ScreenShape, SettingsField, SettingsUpdate, TimeUnits,
    WatchfaceSettings,
};

use crate::application::refresh_face::{refresh_date, refresh_steps, refresh_time};
use crate::application::render_face::{draw_face_canvas, Canvas};
use crate::application::surfaces::{FaceLayout, FaceSurfaces, LabelId};
use crate::application::sync_settings::{apply_to_presentation, SettingsSync};
use crate::infrastructure::clock::WallClock;
use crate::infrastructure::health::{HealthEvent, HealthService};
use crate::infrastructure::storage::PersistentStore;

/// Tick units the face subscribes to.
pub const TICK_UNITS: TimeUnits = TimeUnits::MINUTE_AND_DAY;

pub struct Watchface<S, F, C, H> {
    profile: FaceProfile,
    layout: FaceLayout,
    /// `None` on the classic face, which never touches storage.
    settings: Option<SettingsSync<S>>,
    surfaces: F,
    clock: C,
    health: H,
    window_loaded: bool,
    health_subscribed: bool,
    last_sample: Option<NaiveDateTime>,
}

impl<S, F, C, H> Watchface<S, F, C, H>
where
    S: PersistentStore,
    F: FaceSurfaces,
    C: WallClock,
    H: HealthService,
{
    /// Creates the face.  The configurable profile loads its settings from
    /// `store` here; the classic profile drops `store` unused.
    pub fn new(
        profile: FaceProfile,
        screen: ScreenShape,
        store: S,
        surfaces: F,
        clock: C,
        health: H,
    ) -> Self {
        let settings = profile.uses_settings().then(|| SettingsSync::load(store));
        Self {
            profile,
            layout: FaceLayout::for_screen(screen),
            settings,
            surfaces,
            clock,
            health,
            window_loaded: false,
            health_subscribed: false,
            last_sample: None,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────────

    /// Builds the window, shows the current time, date and steps, and
    /// subscribes to health events.  Returns the tick units to subscribe to.
    pub fn init(&mut self) -> TimeUnits {
        self.window_load();

        self.update_time();
        self.update_date();
        self.update_steps();
        self.last_sample = Some(self.clock.now());

        self.health_subscribed = self.health.subscribe_events();
        if !self.health_subscribed {
            error!("health not available");
        }

        info!(profile = ?self.profile, "watchface started");
        TICK_UNITS
    }

    /// Tears the window down.  Settings are not written here.
    pub fn deinit(&mut self) {
        self.window_unload();
        info!("watchface stopped");
    }

    /// Creates the canvas and labels, then applies the current appearance.
    pub fn window_load(&mut self) {
        if self.window_loaded {
            return;
        }
        self.surfaces.build(&self.layout);
        self.window_loaded = true;
        apply_to_presentation(&self.appearance(), &mut self.surfaces);
    }

    pub fn window_unload(&mut self) {
        if !self.window_loaded {
            return;
        }
        self.surfaces.teardown();
        self.window_loaded = false;
    }

    // ── Event handlers ────────────────────────────────────────────────────────

    /// Tick handler: minute → time label, day → date label.
    pub fn on_tick(&mut self, units: TimeUnits) {
        if !self.window_loaded {
            return;
        }
        if units.contains(TimeUnits::MINUTE) {
            self.update_time();
        }
        if units.contains(TimeUnits::DAY) {
            self.update_date();
            if self.profile == FaceProfile::Configurable {
                // The badge width follows the new date text.
                self.surfaces.mark_canvas_dirty();
            }
        }
    }

    /// Samples the clock and dispatches the subscribed units that changed
    /// since the previous sample.  Returns the dispatched units.
    pub fn poll_clock(&mut self) -> TimeUnits {
        let now = self.clock.now();
        let changed = match self.last_sample.replace(now) {
            Some(prev) => TimeUnits::changed_between(prev, now).intersect(TICK_UNITS),
            None => TimeUnits::NONE,
        };
        if !changed.is_empty() {
            self.on_tick(changed);
        }
        changed
    }

    /// Health handler: only movement updates refresh the steps label.
    pub fn on_health_event(&mut self, event: HealthEvent) {
        match event {
            HealthEvent::MovementUpdate => self.update_steps(),
            HealthEvent::SignificantUpdate | HealthEvent::SleepUpdate => {
                debug!(?event, "health event ignored");
            }
        }
    }

    /// Inbox handler: merge → persist → apply.
    ///
    /// Returns the settings fields the message named.  The classic face
    /// ignores configuration messages.
    pub fn on_inbox_received(&mut self, message: &ConfigMessage) -> Vec<SettingsField> {
        let Some(sync) = self.settings.as_mut() else {
            debug!("classic face ignores configuration messages");
            return Vec::new();
        };

        let applied = sync.merge_and_persist(&SettingsUpdate::from_message(message));
        if self.window_loaded {
            apply_to_presentation(sync.settings(), &mut self.surfaces);
        }
        info!(fields = applied.len(), "configuration message applied");
        applied
    }

    /// Canvas update routine: date badge and, on the configurable face, the rings.
    pub fn draw_canvas(&self, canvas: &mut impl Canvas) {
        let date_width = self.surfaces.content_width(LabelId::Date);
        draw_face_canvas(
            canvas,
            self.profile,
            &self.appearance(),
            self.layout.canvas,
            date_width,
        );
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Effective colors and step visibility: the settings record on the
    /// configurable face, the fixed look on the classic face.
    pub fn appearance(&self) -> WatchfaceSettings {
        self.settings
            .as_ref()
            .map_or_else(FaceProfile::classic_appearance, |sync| *sync.settings())
    }

    pub fn profile(&self) -> FaceProfile {
        self.profile
    }

    pub fn layout(&self) -> &FaceLayout {
        &self.layout
    }

    pub fn settings_sync(&self) -> Option<&SettingsSync<S>> {
        self.settings.as_ref()
    }

    pub fn surfaces(&self) -> &F {
        &self.surfaces
    }

    pub fn surfaces_mut(&mut self) -> &mut F {
        &mut self.surfaces
    }

    pub fn is_window_loaded(&self) -> bool {
        self.window_loaded
    }

    pub fn is_health_subscribed(&self) -> bool {
        self.health_subscribed
    }

    // ── Label updates ─────────────────────────────────────────────────────────

    fn update_time(&mut self) {
        refresh_time(&mut self.surfaces, &self.clock, self.profile);
    }

    fn update_date(&mut self) {
        refresh_date(&mut self.surfaces, &self.clock);
    }

    fn update_steps(&mut self) {
        if let Err(e) = refresh_steps(&mut self.surfaces, &self.clock, &self.health) {
            error!(error = %e, "Data unavailable");
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::surfaces::MockFaceSurfaces;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::health::FixedHealth;
    use crate::infrastructure::presentation::recording::{
        CanvasOp, RecordingCanvas, RecordingSurfaces, SurfaceCall,
    };
    use crate::infrastructure::storage::memory_store::MemoryStore;
    use crate::infrastructure::storage::MockPersistentStore;
    use chrono::{Duration, NaiveDate};
    use watchface_core::{encode_settings, Color, MessageKey, Rect, TupleValue, SETTINGS_KEY};

    type TestFace = Watchface<MemoryStore, RecordingSurfaces, FixedClock, FixedHealth>;

    fn at(d: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 7, d)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    struct Harness {
        face: TestFace,
        store: MemoryStore,
        surfaces: RecordingSurfaces,
        clock: FixedClock,
        health: FixedHealth,
    }

    fn harness(profile: FaceProfile, store: MemoryStore) -> Harness {
        let surfaces = RecordingSurfaces::new();
        let clock = FixedClock::new(at(21, 10, 42), true);
        let health = FixedHealth::with_steps(1234);
        let face = Watchface::new(
            profile,
            ScreenShape::Round,
            store.clone(),
            surfaces.clone(),
            clock.clone(),
            health.clone(),
        );
        Harness {
            face,
            store,
            surfaces,
            clock,
            health,
        }
    }

    // ── init ──────────────────────────────────────────────────────────────────

    #[test]
    fn test_init_builds_window_and_fills_every_label() {
        // Arrange
        let mut h = harness(FaceProfile::Configurable, MemoryStore::new());

        // Act
        let units = h.face.init();

        // Assert
        assert_eq!(units, TICK_UNITS);
        assert!(h.face.is_window_loaded());
        assert!(h.face.is_health_subscribed());
        assert_eq!(h.surfaces.text(LabelId::Time).as_deref(), Some("10:42"));
        assert_eq!(h.surfaces.text(LabelId::Date).as_deref(), Some("Jul 21"));
        assert_eq!(h.surfaces.text(LabelId::Steps).as_deref(), Some("\u{1F49C} 1234"));
        assert_eq!(h.surfaces.background(), Color::MINT_GREEN);
        assert_eq!(h.health.subscribe_calls(), 1);
    }

    #[test]
    fn test_init_applies_persisted_settings_once_after_build() {
        // Arrange
        let persisted = WatchfaceSettings {
            background_color: Color::RED,
            show_steps: false,
            ..WatchfaceSettings::default()
        };
        let store = MemoryStore::with_value(SETTINGS_KEY, &encode_settings(&persisted));
        let mut h = harness(FaceProfile::Configurable, store);
        assert!(h.surfaces.calls().is_empty(), "load must not touch surfaces");

        // Act
        h.face.init();

        // Assert
        let calls = h.surfaces.calls();
        assert_eq!(calls[0], SurfaceCall::Build);
        assert_eq!(calls[1], SurfaceCall::Background(Color::RED));
        assert_eq!(h.surfaces.is_hidden(LabelId::Steps), Some(true));
        assert_eq!(h.store.write_count(), 0);
    }

    #[test]
    fn test_init_without_health_keeps_running() {
        let surfaces = RecordingSurfaces::new();
        let mut face = Watchface::new(
            FaceProfile::Configurable,
            ScreenShape::Round,
            MemoryStore::new(),
            surfaces.clone(),
            FixedClock::new(at(21, 10, 42), true),
            FixedHealth::unavailable(),
        );

        face.init();

        assert!(!face.is_health_subscribed());
        assert_eq!(surfaces.text(LabelId::Steps).as_deref(), Some(""));
        assert_eq!(surfaces.text(LabelId::Time).as_deref(), Some("10:42"));
    }

    #[test]
    fn test_classic_face_never_touches_storage() {
        // Arrange
        let mut store = MockPersistentStore::new();
        store.expect_read().never();
        store.expect_write().never();
        let surfaces = RecordingSurfaces::new();
        let mut face = Watchface::new(
            FaceProfile::Classic,
            ScreenShape::Round,
            store,
            surfaces.clone(),
            FixedClock::new(at(21, 8, 5), false),
            FixedHealth::with_steps(0),
        );

        // Act
        face.init();
        let applied = face.on_inbox_received(
            &ConfigMessage::new().with(MessageKey::BackgroundColor, TupleValue::Int(0xFF0000)),
        );

        // Assert
        assert!(applied.is_empty());
        assert_eq!(surfaces.background(), Color::SUNSET_ORANGE);
        assert_eq!(surfaces.text(LabelId::Time).as_deref(), Some(" 8:05"));
    }

    // ── ticks ─────────────────────────────────────────────────────────────────

    #[test]
    fn test_minute_tick_updates_time_only() {
        let mut h = harness(FaceProfile::Configurable, MemoryStore::new());
        h.face.init();
        h.surfaces.clear_calls();
        h.clock.set(at(21, 10, 43));

        h.face.on_tick(TimeUnits(TimeUnits::MINUTE));

        assert_eq!(h.surfaces.calls(), vec![SurfaceCall::Text(LabelId::Time, "10:43".into())]);
    }

    #[test]
    fn test_day_tick_updates_date_and_redraws_badge() {
        let mut h = harness(FaceProfile::Configurable, MemoryStore::new());
        h.face.init();
        h.surfaces.clear_calls();
        h.clock.set(at(22, 0, 0));

        h.face.on_tick(TimeUnits::MINUTE_AND_DAY);

        assert_eq!(
            h.surfaces.calls(),
            vec![
                SurfaceCall::Text(LabelId::Time, "00:00".into()),
                SurfaceCall::Text(LabelId::Date, "Jul 22".into()),
                SurfaceCall::CanvasDirty,
            ]
        );
    }

    #[test]
    fn test_tick_before_window_load_is_ignored() {
        let mut surfaces = MockFaceSurfaces::new();
        surfaces.expect_set_text().never();
        let mut face = Watchface::new(
            FaceProfile::Configurable,
            ScreenShape::Round,
            MemoryStore::new(),
            surfaces,
            FixedClock::new(at(21, 10, 42), true),
            FixedHealth::with_steps(0),
        );

        face.on_tick(TimeUnits::MINUTE_AND_DAY);
    }

    #[test]
    fn test_poll_clock_dispatches_only_subscribed_units() {
        // Arrange
        let mut h = harness(FaceProfile::Configurable, MemoryStore::new());
        h.face.init();

        // Act: seconds-only change
        h.clock.advance(Duration::seconds(20));
        let quiet = h.face.poll_clock();
        // Act: crossing midnight
        h.clock.set(at(22, 0, 1));
        let midnight = h.face.poll_clock();

        // Assert
        assert!(quiet.is_empty());
        assert_eq!(midnight, TimeUnits::MINUTE_AND_DAY);
        assert_eq!(h.surfaces.text(LabelId::Date).as_deref(), Some("Jul 22"));
    }

    // ── health ────────────────────────────────────────────────────────────────

    #[test]
    fn test_movement_update_refreshes_steps() {
        let mut h = harness(FaceProfile::Configurable, MemoryStore::new());
        h.face.init();
        h.health.set_steps(5000);

        h.face.on_health_event(HealthEvent::MovementUpdate);

        assert_eq!(h.surfaces.text(LabelId::Steps).as_deref(), Some("\u{1F49C} 5000"));
    }

    #[test]
    fn test_other_health_events_are_ignored() {
        let mut h = harness(FaceProfile::Configurable, MemoryStore::new());
        h.face.init();
        h.health.set_steps(5000);
        h.surfaces.clear_calls();

        h.face.on_health_event(HealthEvent::SignificantUpdate);
        h.face.on_health_event(HealthEvent::SleepUpdate);

        assert!(h.surfaces.calls().is_empty());
    }

    #[test]
    fn test_unavailable_health_data_keeps_previous_steps() {
        let mut h = harness(FaceProfile::Configurable, MemoryStore::new());
        h.face.init();
        h.health.set_accessible(false);
        h.health.set_steps(9999);

        h.face.on_health_event(HealthEvent::MovementUpdate);

        assert_eq!(h.surfaces.text(LabelId::Steps).as_deref(), Some("\u{1F49C} 1234"));
    }

    // ── inbox ─────────────────────────────────────────────────────────────────

    #[test]
    fn test_show_steps_zero_hides_steps_and_persists() {
        // Arrange
        let mut h = harness(FaceProfile::Configurable, MemoryStore::new());
        h.face.init();

        // Act
        let applied = h
            .face
            .on_inbox_received(&ConfigMessage::new().with(MessageKey::ShowSteps, TupleValue::Int(0)));

        // Assert
        assert_eq!(applied, vec![SettingsField::ShowSteps]);
        assert_eq!(h.surfaces.is_hidden(LabelId::Steps), Some(true));
        let expected = WatchfaceSettings {
            show_steps: false,
            ..WatchfaceSettings::default()
        };
        assert_eq!(h.face.appearance(), expected);
        assert_eq!(h.store.value(SETTINGS_KEY), Some(encode_settings(&expected).to_vec()));
    }

    #[test]
    fn test_inbox_before_window_load_merges_without_applying() {
        let mut surfaces = MockFaceSurfaces::new();
        surfaces.expect_set_background_color().never();
        let store = MemoryStore::new();
        let mut face = Watchface::new(
            FaceProfile::Configurable,
            ScreenShape::Round,
            store.clone(),
            surfaces,
            FixedClock::new(at(21, 10, 42), true),
            FixedHealth::with_steps(0),
        );

        face.on_inbox_received(
            &ConfigMessage::new().with(MessageKey::BackgroundColor, TupleValue::Int(0xFF0000)),
        );

        assert_eq!(face.appearance().background_color, Color::RED);
        assert_eq!(store.write_count(), 1);
    }

    #[test]
    fn test_write_failure_still_applies_to_window() {
        let store = MemoryStore::new();
        store.set_fail_writes(true);
        let mut h = harness(FaceProfile::Configurable, store);
        h.face.init();

        h.face.on_inbox_received(
            &ConfigMessage::new().with(MessageKey::BackgroundColor, TupleValue::Int(0x0000FF)),
        );

        assert_eq!(h.surfaces.background(), Color::BLUE);
        assert_eq!(h.store.value(SETTINGS_KEY), None);
    }

    // ── canvas ────────────────────────────────────────────────────────────────

    #[test]
    fn test_draw_canvas_uses_measured_date_width_and_accent() {
        // Arrange
        let mut h = harness(FaceProfile::Configurable, MemoryStore::new());
        h.face.init();
        h.surfaces.set_content_width(LabelId::Date, 52);
        h.face.on_inbox_received(
            &ConfigMessage::new().with(MessageKey::SecondaryColor, TupleValue::Int(0xFF0000)),
        );
        let mut canvas = RecordingCanvas::default();

        // Act
        h.face.draw_canvas(&mut canvas);

        // Assert
        assert_eq!(
            canvas.ops[0],
            CanvasOp::FillRoundRect {
                rect: Rect::new(59, 110, 62, 25),
                corner_radius: 5,
                color: Color::RED,
            }
        );
        assert_eq!(canvas.ops.len(), 3);
    }

    // ── shutdown ──────────────────────────────────────────────────────────────

    #[test]
    fn test_deinit_tears_down_without_writing() {
        let mut h = harness(FaceProfile::Configurable, MemoryStore::new());
        h.face.init();

        h.face.deinit();

        assert!(!h.face.is_window_loaded());
        assert_eq!(h.surfaces.calls().last(), Some(&SurfaceCall::Teardown));
        assert_eq!(h.store.write_count(), 0);
    }
}
