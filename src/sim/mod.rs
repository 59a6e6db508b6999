//! Deterministic simulation module
//!
//! All demo logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (creation order)
//! - No rendering or platform dependencies

pub mod rect;
pub mod spawn;
pub mod state;
pub mod tick;

pub use rect::Rect;
pub use spawn::{place_rect, spawn_square};
pub use state::{Square, World};
pub use tick::tick;
