//! Display task
//!
//! Owns the LCD and the presenter. Every snapshot from the control task is
//! drawn as it arrives; the presenter's refresh deadline covers the gaps.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_time::{Instant, Timer};

use batchmix_core::{BatchSnapshot, DisplayTiming};
use batchmix_display::{DisplayBackend, Presenter, RefreshCause};

use crate::board::Lcd;
use crate::channels::SNAPSHOT;

/// Display task - renders controller snapshots to the LCD
#[embassy_executor::task]
pub async fn display_task(mut lcd: Lcd, timing: DisplayTiming) {
    info!("Display task started");

    if let Err(e) = lcd.init() {
        error!("LCD init failed: {:?}", e);
    }

    let mut presenter = Presenter::new(timing, now_ms());
    redraw(
        &mut presenter,
        &mut lcd,
        RefreshCause::Snapshot(BatchSnapshot::default()),
    );

    loop {
        let wait_ms = presenter.until_refresh_ms(now_ms());

        let cause = match select(SNAPSHOT.wait(), Timer::after_millis(wait_ms as u64)).await {
            Either::First(snapshot) => {
                if snapshot.state != presenter.latest().state {
                    debug!("State-driven refresh: {}", snapshot.state);
                }
                RefreshCause::Snapshot(snapshot)
            }
            Either::Second(()) => RefreshCause::Deadline,
        };

        redraw(&mut presenter, &mut lcd, cause);
    }
}

fn redraw(presenter: &mut Presenter, lcd: &mut Lcd, cause: RefreshCause) {
    if !lcd.is_ready() && lcd.init().is_err() {
        warn!("LCD not ready, skipping refresh");
        return;
    }

    match presenter.handle(lcd, now_ms(), cause) {
        Ok(true) => trace!("{} {}", presenter.current_screen(), presenter.screen()),
        Ok(false) => {}
        Err(e) => warn!("Display refresh failed: {:?}", e),
    }
}

fn now_ms() -> u32 {
    Instant::now().as_millis() as u32
}
