//! Batchmix - Mixer Controller Firmware
//!
//! Main firmware binary for RP2040-based batch mixers. A relay drives the
//! tumbler motor; two panel switches select batch or manual operation and a
//! 16x2 LCD shows the batch status.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use {defmt_rtt as _, panic_probe as _};

use batchmix_core::{BatchConfig, DisplayTiming};

mod board;
mod channels;
mod tasks;

use crate::board::Board;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Batchmix firmware starting...");

    let p = embassy_rp::init(Default::default());

    let board = match Board::new(p) {
        Ok(board) => board,
        Err(e) => {
            // Relay state unknown, do not start the batch logic
            panic!("Relay init failed: {:?}", e);
        }
    };
    info!("Board initialized, relay released");

    let config = BatchConfig::DEFAULT;
    info!(
        "Mix every {} h for {} min, exit at {} s (corrected {} s)",
        config.mix_interval_hours,
        config.mix_duration_minutes,
        config.mix_exit_seconds,
        config.corrected_exit_seconds()
    );

    spawner
        .spawn(tasks::control_task(board.switches, board.relay, config))
        .unwrap();
    spawner
        .spawn(tasks::display_task(board.lcd, DisplayTiming::DEFAULT))
        .unwrap();

    info!("All tasks spawned, firmware running");

    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
