//! Status presenter
//!
//! Builds the two status lines from a controller snapshot.
//!
//! While the batch rests (Running) the presenter rotates through three
//! screens on its own timer: batch status with runtime, time since the
//! last mix, and the mix interval. Stopped, Mixing and Manual show a fixed
//! status line and suspend the rotation.
//!
//! Every published snapshot is drawn as it arrives; without new snapshots
//! the last one is redrawn on the refresh deadline. Every refresh clears the
//! display and rewrites both rows, whether or not the content changed. Timestamps are milliseconds from any monotonic
//! source and are compared with wrapping arithmetic.

use core::fmt::Write;

use heapless::String;

use batchmix_core::config::DisplayTiming;
use batchmix_core::controller::BatchSnapshot;

use crate::backend::{DisplayBackend, DisplayError};
use crate::screen::{Screen, BLANK_LINE};

/// Scratch buffer size for formatting, truncated to the row width on store
const FORMAT_LEN: usize = 32;

/// Information screens shown while Running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayScreen {
    /// State and batch runtime
    #[default]
    BatchStatus,
    /// Time since the last mix ended
    TimeSinceLastRun,
    /// Configured rest time between mixes
    MixInterval,
}

impl DisplayScreen {
    /// Next screen in the rotation
    pub fn next(self) -> Self {
        match self {
            DisplayScreen::BatchStatus => DisplayScreen::TimeSinceLastRun,
            DisplayScreen::TimeSinceLastRun => DisplayScreen::MixInterval,
            DisplayScreen::MixInterval => DisplayScreen::BatchStatus,
        }
    }
}

/// What woke the display loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RefreshCause {
    /// The controller published a new snapshot
    Snapshot(BatchSnapshot),
    /// The periodic refresh timer expired
    Deadline,
}

/// Turns snapshots into screens and owns the rotation/refresh timers
pub struct Presenter {
    timing: DisplayTiming,
    screen: Screen,
    current: DisplayScreen,
    /// Most recent snapshot, redrawn on the refresh deadline
    latest: BatchSnapshot,
    /// When the rotation last advanced (ms)
    last_switch_ms: u32,
    /// When the display was last redrawn (ms)
    last_refresh_ms: u32,
}

impl Presenter {
    /// Create a presenter whose timers start at `now_ms`
    pub fn new(timing: DisplayTiming, now_ms: u32) -> Self {
        Self {
            timing,
            screen: Screen::new(),
            current: DisplayScreen::BatchStatus,
            latest: BatchSnapshot::default(),
            last_switch_ms: now_ms,
            last_refresh_ms: now_ms,
        }
    }

    /// Screen selected by the rotation
    pub fn current_screen(&self) -> DisplayScreen {
        self.current
    }

    /// Snapshot drawn by the last refresh
    pub fn latest(&self) -> &BatchSnapshot {
        &self.latest
    }

    /// Last rendered screen buffer
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Check if the periodic redraw is due
    pub fn refresh_due(&self, now_ms: u32) -> bool {
        now_ms.wrapping_sub(self.last_refresh_ms) >= self.timing.refresh_interval_ms
    }

    /// Milliseconds until the periodic redraw is due
    pub fn until_refresh_ms(&self, now_ms: u32) -> u32 {
        self.timing
            .refresh_interval_ms
            .saturating_sub(now_ms.wrapping_sub(self.last_refresh_ms))
    }

    /// Render the snapshot into the screen buffer
    ///
    /// Advances the rotation first when the batch is Running and the
    /// rotation interval has elapsed.
    pub fn render(&mut self, now_ms: u32, snapshot: &BatchSnapshot) -> &Screen {
        let state = snapshot.state;

        if state.allows_screen_cycling()
            && now_ms.wrapping_sub(self.last_switch_ms) >= self.timing.screen_cycle_ms
        {
            self.current = self.current.next();
            self.last_switch_ms = now_ms;
        }

        self.screen.clear();

        if !state.allows_screen_cycling() {
            self.set_status_line(snapshot);
            self.screen.set_line(1, BLANK_LINE);
            return &self.screen;
        }

        match self.current {
            DisplayScreen::BatchStatus => {
                self.set_status_line(snapshot);
                self.set_formatted(1, format_args!("{}", snapshot.batch_time));
            }
            DisplayScreen::TimeSinceLastRun => {
                self.screen.set_line(0, "Time since last");
                self.set_formatted(1, format_args!("run: {}", snapshot.mix_time));
            }
            DisplayScreen::MixInterval => {
                self.screen.set_line(0, "Mix Time every:");
                self.set_formatted(1, format_args!("{} hours", snapshot.mix_interval_hours));
            }
        }

        &self.screen
    }

    /// Render and fully redraw the display
    ///
    /// Used for both the periodic refresh and state-driven refreshes.
    pub fn refresh<B: DisplayBackend>(
        &mut self,
        backend: &mut B,
        now_ms: u32,
        snapshot: &BatchSnapshot,
    ) -> Result<(), DisplayError> {
        self.render(now_ms, snapshot);
        self.last_refresh_ms = now_ms;

        backend.clear()?;
        for (row, line) in self.screen.lines().enumerate() {
            backend.draw_text(row as u8, 0, line)?;
        }
        backend.flush()
    }

    /// Redraw in response to a wakeup of the display loop
    ///
    /// A new snapshot is always drawn. A deadline wakeup redraws the last
    /// snapshot only once the refresh interval has elapsed. Returns whether
    /// the display was redrawn.
    pub fn handle<B: DisplayBackend>(
        &mut self,
        backend: &mut B,
        now_ms: u32,
        cause: RefreshCause,
    ) -> Result<bool, DisplayError> {
        match cause {
            RefreshCause::Snapshot(snapshot) => self.latest = snapshot,
            RefreshCause::Deadline if !self.refresh_due(now_ms) => return Ok(false),
            RefreshCause::Deadline => {}
        }

        let snapshot = self.latest;
        self.refresh(backend, now_ms, &snapshot)?;
        Ok(true)
    }

    fn set_status_line(&mut self, snapshot: &BatchSnapshot) {
        self.set_formatted(0, format_args!("Batch: {}", snapshot.state));
    }

    fn set_formatted(&mut self, row: usize, args: core::fmt::Arguments<'_>) {
        let mut line: String<FORMAT_LEN> = String::new();
        // Overflow only loses text beyond the row width (runtime past 9999 months)
        let _ = line.write_fmt(args);
        self.screen.set_line(row, &line);
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::screen::SCREEN_COLS;
    use batchmix_core::{BatchState, BatchTime, MixTime};
    use std::string::{String as StdString, ToString};
    use std::vec::Vec;

    #[derive(Debug, PartialEq)]
    enum Op {
        Clear,
        Text(u8, u8, StdString),
    }

    #[derive(Default)]
    struct RecordingBackend {
        ops: Vec<Op>,
        fail_clear: bool,
    }

    impl DisplayBackend for RecordingBackend {
        fn clear(&mut self) -> Result<(), DisplayError> {
            if self.fail_clear {
                return Err(DisplayError::Communication);
            }
            self.ops.push(Op::Clear);
            Ok(())
        }

        fn draw_text(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError> {
            self.ops.push(Op::Text(row, col, text.to_string()));
            Ok(())
        }

        fn dimensions(&self) -> (u8, u8) {
            (16, 2)
        }

        fn is_ready(&self) -> bool {
            true
        }
    }

    fn snapshot(state: BatchState) -> BatchSnapshot {
        BatchSnapshot {
            state,
            batch_time: BatchTime::new(0, 1, 2, 3, 4).unwrap(),
            mix_time: MixTime::new(0, 5, 6).unwrap(),
            revolutions: 0,
            relay: Default::default(),
            mix_interval_hours: 1,
        }
    }

    fn lines(screen: &Screen) -> (&str, &str) {
        (screen.get_line(0).unwrap(), screen.get_line(1).unwrap())
    }

    #[test]
    fn test_fixed_status_states() {
        let mut presenter = Presenter::new(DisplayTiming::DEFAULT, 0);

        for (state, title) in [
            (BatchState::Stopped, "Batch: Stopped"),
            (BatchState::Mixing, "Batch: Mixing"),
            (BatchState::Manual, "Batch: Manual"),
        ] {
            let screen = presenter.render(0, &snapshot(state));
            assert_eq!(lines(screen), (title, BLANK_LINE));
        }
    }

    #[test]
    fn test_running_status_screen() {
        let mut presenter = Presenter::new(DisplayTiming::DEFAULT, 0);
        let screen = presenter.render(1000, &snapshot(BatchState::Running));
        assert_eq!(lines(screen), ("Batch: Running", "00:01:02:03:04"));
    }

    #[test]
    fn test_running_screens_rotate_every_cycle_interval() {
        let mut presenter = Presenter::new(DisplayTiming::DEFAULT, 0);
        let running = snapshot(BatchState::Running);

        presenter.render(9_999, &running);
        assert_eq!(presenter.current_screen(), DisplayScreen::BatchStatus);

        let screen = presenter.render(10_000, &running);
        assert_eq!(lines(screen), ("Time since last", "run: 00:05:06"));

        let screen = presenter.render(20_000, &running);
        assert_eq!(lines(screen), ("Mix Time every:", "1 hours"));

        let screen = presenter.render(30_000, &running);
        assert_eq!(lines(screen), ("Batch: Running", "00:01:02:03:04"));
    }

    #[test]
    fn test_rotation_suspended_outside_running() {
        let mut presenter = Presenter::new(DisplayTiming::DEFAULT, 0);

        presenter.render(50_000, &snapshot(BatchState::Mixing));
        presenter.render(60_000, &snapshot(BatchState::Stopped));
        assert_eq!(presenter.current_screen(), DisplayScreen::BatchStatus);
    }

    #[test]
    fn test_lines_fit_display() {
        let mut presenter = Presenter::new(DisplayTiming::DEFAULT, 0);
        let mut long = snapshot(BatchState::Running);
        long.batch_time = BatchTime::new(12345, 30, 23, 59, 59).unwrap();

        for step in 0..6u32 {
            let screen = presenter.render(step * 10_000, &long);
            assert!(screen.lines().all(|l| l.len() <= SCREEN_COLS));
        }
    }

    #[test]
    fn test_runtime_width_cap() {
        let mut presenter = Presenter::new(DisplayTiming::DEFAULT, 0);
        let mut running = snapshot(BatchState::Running);

        running.batch_time = BatchTime::new(9999, 30, 23, 59, 59).unwrap();
        let screen = presenter.render(0, &running);
        assert_eq!(screen.get_line(1), Some("9999:30:23:59:59"));

        running.batch_time = BatchTime::new(12345, 30, 23, 59, 59).unwrap();
        let screen = presenter.render(0, &running);
        assert_eq!(screen.get_line(1), Some("12345:30:23:59:5"));
    }

    #[test]
    fn test_refresh_clears_then_writes_both_rows() {
        let mut presenter = Presenter::new(DisplayTiming::DEFAULT, 0);
        let mut backend = RecordingBackend::default();

        presenter
            .refresh(&mut backend, 0, &snapshot(BatchState::Stopped))
            .unwrap();
        // Unchanged content is still redrawn
        presenter
            .refresh(&mut backend, 1000, &snapshot(BatchState::Stopped))
            .unwrap();

        let frame = [
            Op::Clear,
            Op::Text(0, 0, "Batch: Stopped".to_string()),
            Op::Text(1, 0, BLANK_LINE.to_string()),
        ];
        assert_eq!(backend.ops.len(), 6);
        assert_eq!(&backend.ops[..3], &frame);
        assert_eq!(&backend.ops[3..], &frame);
    }

    #[test]
    fn test_refresh_due() {
        let mut presenter = Presenter::new(DisplayTiming::DEFAULT, 0);
        let mut backend = RecordingBackend::default();

        assert!(!presenter.refresh_due(2_999));
        assert!(presenter.refresh_due(3_000));
        assert_eq!(presenter.until_refresh_ms(1_000), 2_000);

        presenter
            .refresh(&mut backend, 3_000, &snapshot(BatchState::Running))
            .unwrap();
        assert!(!presenter.refresh_due(5_999));
        assert!(presenter.refresh_due(6_000));
        assert_eq!(presenter.until_refresh_ms(7_000), 0);
    }

    #[test]
    fn test_timer_wraparound() {
        let start = u32::MAX - 1_000;
        let mut presenter = Presenter::new(DisplayTiming::DEFAULT, start);
        let running = snapshot(BatchState::Running);

        assert!(presenter.refresh_due(start.wrapping_add(3_000)));
        presenter.render(start.wrapping_add(10_000), &running);
        assert_eq!(presenter.current_screen(), DisplayScreen::TimeSinceLastRun);
    }

    #[test]
    fn test_backend_error_propagates() {
        let mut presenter = Presenter::new(DisplayTiming::DEFAULT, 0);
        let mut backend = RecordingBackend {
            fail_clear: true,
            ..Default::default()
        };

        let result = presenter.refresh(&mut backend, 0, &snapshot(BatchState::Stopped));
        assert_eq!(result, Err(DisplayError::Communication));
        assert!(backend.ops.is_empty());
    }

    fn clears(backend: &RecordingBackend) -> usize {
        backend.ops.iter().filter(|op| **op == Op::Clear).count()
    }

    #[test]
    fn test_snapshot_every_second_rotates_every_cycle_interval() {
        let mut presenter = Presenter::new(DisplayTiming::DEFAULT, 0);
        let mut backend = RecordingBackend::default();
        let mut switches = Vec::new();

        for sec in 1..=40u32 {
            let mut running = snapshot(BatchState::Running);
            running.batch_time = BatchTime::new(0, 0, 0, 0, (sec % 60) as u8).unwrap();

            let before = presenter.current_screen();
            let redrawn = presenter
                .handle(&mut backend, sec * 1000, RefreshCause::Snapshot(running))
                .unwrap();
            assert!(redrawn);

            if presenter.current_screen() != before {
                switches.push(sec);
            }
            if sec == 5 {
                // Runtime on screen follows every snapshot
                assert_eq!(
                    lines(presenter.screen()),
                    ("Batch: Running", "00:00:00:00:05")
                );
            }
        }

        assert_eq!(switches, [10, 20, 30, 40]);
        assert_eq!(clears(&backend), 40);
    }

    #[test]
    fn test_deadline_redraws_latest_snapshot() {
        let mut presenter = Presenter::new(DisplayTiming::DEFAULT, 0);
        let mut backend = RecordingBackend::default();

        let stopped = snapshot(BatchState::Stopped);
        assert!(presenter
            .handle(&mut backend, 0, RefreshCause::Snapshot(stopped))
            .unwrap());

        assert!(!presenter
            .handle(&mut backend, 2_999, RefreshCause::Deadline)
            .unwrap());
        assert!(presenter
            .handle(&mut backend, 3_000, RefreshCause::Deadline)
            .unwrap());

        assert_eq!(presenter.latest(), &stopped);
        assert_eq!(clears(&backend), 2);
        assert_eq!(
            backend.ops.last(),
            Some(&Op::Text(1, 0, BLANK_LINE.to_string()))
        );
    }

    #[test]
    fn test_same_state_snapshot_is_drawn() {
        let mut presenter = Presenter::new(DisplayTiming::DEFAULT, 0);
        let mut backend = RecordingBackend::default();
        let running = snapshot(BatchState::Running);

        presenter
            .handle(&mut backend, 0, RefreshCause::Snapshot(running))
            .unwrap();
        // Same state one second later, well before the refresh deadline
        let redrawn = presenter
            .handle(&mut backend, 1_000, RefreshCause::Snapshot(running))
            .unwrap();

        assert!(redrawn);
        assert_eq!(clears(&backend), 2);
    }

    #[test]
    fn test_injected_timing() {
        let timing = DisplayTiming {
            refresh_interval_ms: 100,
            screen_cycle_ms: 500,
        };
        let mut presenter = Presenter::new(timing, 0);
        assert!(presenter.refresh_due(100));

        presenter.render(500, &snapshot(BatchState::Running));
        assert_eq!(presenter.current_screen(), DisplayScreen::TimeSinceLastRun);
    }
}
