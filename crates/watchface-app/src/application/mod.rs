//! Application layer of the watchface.
//!
//! # What is the "application" layer? (for beginners)
//!
//! In Clean Architecture the *application* layer sits between the domain
//! (pure rules in `watchface-core`) and the infrastructure (files, clocks,
//! terminals).  Code here:
//!
//! - **Orchestrates** domain objects to fulfil a goal, e.g. "when the
//!   companion app sends new colors, merge them, save them and repaint".
//! - **Depends on abstractions** (traits) rather than concrete adapters, so
//!   the simulator, the tests and a real device can each plug in their own.
//! - **Contains no file system access and no terminal output**.
//!
//! # Sub-modules
//!
//! - **`sync_settings`** – Loads the settings record, merges updates,
//!   persists the blob and pushes colors to the window.
//! - **`surfaces`** – The window layout and the `FaceSurfaces` trait.
//! - **`refresh_face`** – Time, date and step label refresh.
//! - **`render_face`** – Canvas drawing (date badge and rings).
//! - **`watchface`** – The controller that wires all of the above to the
//!   host callbacks.

pub mod refresh_face;
pub mod render_face;
pub mod surfaces;
pub mod sync_settings;
pub mod watchface;
