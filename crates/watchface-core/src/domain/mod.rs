//! Domain entities for the watchface.
//!
//! This module contains pure business logic with no infrastructure dependencies.
//!
//! # What is "domain" in Clean Architecture? (for beginners)
//!
//! Clean Architecture organises code into concentric layers.  The innermost
//! layer is called the **domain**.  Domain code:
//!
//! - Contains the core rules of the application.
//! - Has **no** imports from storage drivers, windowing runtimes, health
//!   services, or message transports.
//! - Can be compiled and tested on any platform without any external setup.
//!
//! Here the central concept is the [`settings::WatchfaceSettings`] record:
//! a complete set of colors plus the step-counter toggle, which only ever
//! changes one named field at a time.

/// 8-bit ARGB palette colors and the named color table.
pub mod color;

/// Points, sizes, rectangles and the two supported screen shapes.
pub mod geometry;

/// The two face profiles (fixed-color classic, user-configurable).
pub mod profile;

/// The configuration record and its partial-update merge.
pub mod settings;

/// Tick timer units and change detection between two wall-clock samples.
pub mod time_units;
