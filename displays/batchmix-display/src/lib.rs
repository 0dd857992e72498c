//! Display abstraction and status presenter for batchmix
//!
//! This crate provides:
//! - `DisplayBackend` trait for character displays
//! - `Screen`, a 2x16 text buffer
//! - `Presenter`, which turns controller snapshots into screens and decides
//!   when the display is redrawn
//!
//! # Architecture
//!
//! The presenter is a read-only consumer of `BatchSnapshot` values published
//! by the controller. It owns the screen rotation index and its own timers,
//! driven by millisecond timestamps supplied by the caller.

#![no_std]

pub mod backend;
pub mod presenter;
pub mod screen;

// Re-export key types
pub use backend::{DisplayBackend, DisplayError};
pub use presenter::{DisplayScreen, Presenter, RefreshCause};
pub use screen::{Screen, BLANK_LINE, SCREEN_COLS, SCREEN_ROWS};
