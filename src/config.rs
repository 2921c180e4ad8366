use std::time::Duration;

use chrono_tz::Tz;

pub const CLOCK_TIMEZONE: Tz = chrono_tz::America::Chicago;
pub const CLOCK_PLACEHOLDER: &str = "--:--:--";
pub const TICK_PERIOD: Duration = Duration::from_millis(1000);

pub const TOOLTIP_HIDE_DELAY: Duration = Duration::from_millis(200);

pub const CTA_THRESHOLD: f64 = 0.85;
/// Ratios at which the browser reports intersection changes for the hero region.
pub const OBSERVER_THRESHOLDS: [f64; 12] =
    [0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.85, 0.9, 1.0];

/// What a pointer re-entering the highlight does to a hide that is already scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReentryPolicy {
    /// Cancel the pending hide and show the tooltip again.
    #[default]
    CancelPendingHide,
    /// Let the pending hide fire; the tooltip vanishes even though the pointer is back.
    KeepPendingHide,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipTiming {
    pub hide_delay: Duration,
    pub reentry: ReentryPolicy,
}

impl Default for TooltipTiming {
    fn default() -> Self {
        Self {
            hide_delay: TOOLTIP_HIDE_DELAY,
            reentry: ReentryPolicy::default(),
        }
    }
}

/// Timing and threshold knobs for the interactive parts of the page.
///
/// Provided once as context by the app shell; components fall back to the defaults when no
/// context is present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionConfig {
    pub tick_period: Duration,
    pub tooltip: TooltipTiming,
    pub cta_threshold: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            tick_period: TICK_PERIOD,
            tooltip: TooltipTiming::default(),
            cta_threshold: CTA_THRESHOLD,
        }
    }
}
