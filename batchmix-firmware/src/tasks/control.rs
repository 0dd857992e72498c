//! Control task
//!
//! Runs the batch controller once per control period: samples the switches,
//! steps the state machine, drives the relay and publishes a snapshot for
//! the display task.

use defmt::*;
use embassy_time::{Duration, Ticker};

use batchmix_core::config::CONTROL_PERIOD_MS;
use batchmix_core::traits::{RelayOutput, SwitchSampler};
use batchmix_core::{BatchConfig, BatchController, SwitchReadings};

use crate::board::{Relay, Switches};
use crate::channels::SNAPSHOT;

/// Control task - sole owner of the batch state
#[embassy_executor::task]
pub async fn control_task(mut switches: Switches, mut relay: Relay, config: BatchConfig) {
    info!("Control task started");

    let mut controller = BatchController::new(config);
    SNAPSHOT.signal(controller.snapshot());

    let mut ticker = Ticker::every(Duration::from_millis(CONTROL_PERIOD_MS as u64));

    loop {
        ticker.next().await;

        let readings = switches.sample().unwrap_or_else(|e| {
            warn!("Switch read failed: {:?}, stopping batch", e);
            SwitchReadings::FAIL_SAFE
        });

        let report = controller.step(readings);

        // Re-applied every cycle so a failed write is retried
        if let Err(e) = relay.apply(report.relay) {
            error!("Relay write failed: {:?}", e);
        }

        if report.transitioned() {
            info!("Batch {} -> {}", report.previous, report.state);
            if report.mix_started() {
                info!("Mix started at {}", controller.batch_time());
            } else if report.mix_finished() {
                debug!(
                    "Mix finished, revolutions={}, relay switches={}",
                    controller.revolutions(),
                    relay.switch_count()
                );
            }
        }

        debug!("{}", controller.telemetry());

        SNAPSHOT.signal(controller.snapshot());
    }
}
