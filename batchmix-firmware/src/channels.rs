//! Inter-task communication
//!
//! The control task is the only writer of batch state. It publishes a copy
//! after every cycle; the display task waits on it.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use batchmix_core::BatchSnapshot;

/// Latest controller snapshot (updated by the control task every cycle)
pub static SNAPSHOT: Signal<CriticalSectionRawMutex, BatchSnapshot> = Signal::new();
