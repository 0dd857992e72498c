//! Embassy async tasks
//!
//! Each task runs independently and communicates via signals.

pub mod control;
pub mod display;

pub use control::control_task;
pub use display::display_task;
