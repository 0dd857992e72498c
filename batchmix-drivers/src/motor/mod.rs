//! Motor driver implementations
//!
//! The mixer motor is a fixed-speed motor switched by a single relay.

pub mod relay;

pub use relay::{RelayConfig, RelayDriver};
