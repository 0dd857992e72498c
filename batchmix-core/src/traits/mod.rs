//! Hardware abstraction traits
//!
//! These traits define the interface between the batch logic and the
//! board-specific switch and relay implementations.

pub mod input;
pub mod relay;

pub use input::{InputError, SwitchSampler};
pub use relay::{RelayCommand, RelayError, RelayOutput};
