//! Infrastructure layer for the watchface.
//!
//! Contains host-facing adapters: the persistent key-value store and the
//! host configuration file, the wall clock, the health service, the
//! presentation surfaces, and the companion-app inbox.
//!
//! **Dependency rule**: the application layer talks to these adapters only
//! through traits (`PersistentStore`, `WallClock`, `HealthService`,
//! `FaceSurfaces`, `Canvas`), so each one can be replaced by a test double.

pub mod clock;
pub mod health;
pub mod inbox;
pub mod presentation;
pub mod storage;
