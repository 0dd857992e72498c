//! Elapsed-time counters
//!
//! Both counters advance by exactly one second per control cycle, so a
//! single tick never crosses more than one rollover chain.

pub mod batch_time;
pub mod mix_time;

pub use batch_time::BatchTime;
pub use mix_time::MixTime;
