use std::rc::Rc;
use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Timelike, Utc};

use crate::config::{CLOCK_PLACEHOLDER, CLOCK_TIMEZONE};
use crate::scheduler::{ScheduleError, Scheduler, TaskHandle};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockState {
    /// Wall time in Chicago, `es-ES` 12-hour form, e.g. `03:07:09 p. m.`
    pub label: String,
    /// UTC instant with millisecond precision, e.g. `2024-05-01T20:07:09.123Z`
    pub iso: String,
}

pub fn format_clock(now: DateTime<Utc>) -> ClockState {
    let local = now.with_timezone(&CLOCK_TIMEZONE);
    let period = if local.hour() < 12 { "a. m." } else { "p. m." };
    ClockState {
        label: format!("{} {period}", local.format("%I:%M:%S")),
        iso: now.to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}

/// Text shown for the clock before the first tick lands.
pub fn display_label(state: Option<&ClockState>) -> &str {
    state.map_or(CLOCK_PLACEHOLDER, |s| s.label.as_str())
}

type TimeSource = Rc<dyn Fn() -> DateTime<Utc>>;
type ClockSink = Rc<dyn Fn(ClockState)>;

/// Republishes the formatted time on a fixed period.
///
/// `start` publishes once immediately and then arms a single repeating task. `stop` and drop
/// both cancel that task, so nothing is published after the owner goes away.
pub struct ClockTicker<S: Scheduler> {
    scheduler: S,
    period: Duration,
    source: TimeSource,
    sink: ClockSink,
    handle: Option<TaskHandle>,
}

impl<S: Scheduler> ClockTicker<S> {
    pub fn new(
        scheduler: S,
        period: Duration,
        source: impl Fn() -> DateTime<Utc> + 'static,
        sink: impl Fn(ClockState) + 'static,
    ) -> Self {
        Self {
            scheduler,
            period,
            source: Rc::new(source),
            sink: Rc::new(sink),
            handle: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    pub fn start(&mut self) -> Result<(), ScheduleError> {
        if self.is_running() {
            return Ok(());
        }
        let source = Rc::clone(&self.source);
        let sink = Rc::clone(&self.sink);
        let handle = self
            .scheduler
            .set_interval(self.period, Box::new(move || sink(format_clock(source()))))?;
        self.handle = Some(handle);

        // the first tick cannot land before this returns, so this is still the first state
        (self.sink)(format_clock((self.source)()));
        log::debug!("clock ticker started ({:?} period)", self.period);
        Ok(())
    }

    pub fn stop(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            handle.cancel();
            log::debug!("clock ticker stopped");
        }
    }
}

impl<S: Scheduler> Drop for ClockTicker<S> {
    fn drop(&mut self) {
        self.stop();
    }
}
