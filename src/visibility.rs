use crate::config::CTA_THRESHOLD;

/// Tracks whether the observed region is visible enough to show the call-to-action.
///
/// Samples only count while a target is attached. Attaching nothing is a no-op, and
/// detaching is safe whether or not a target was ever attached.
#[derive(Debug)]
pub struct VisibilityObserver<T> {
    threshold: f64,
    target: Option<T>,
    visible: bool,
}

impl<T> Default for VisibilityObserver<T> {
    fn default() -> Self {
        Self::new(CTA_THRESHOLD)
    }
}

impl<T> VisibilityObserver<T> {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            target: None,
            visible: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_observing(&self) -> bool {
        self.target.is_some()
    }

    /// Starts observing `target`, replacing any earlier one. `None` leaves the observer as it was.
    pub fn attach(&mut self, target: Option<T>) -> bool {
        if let Some(target) = target {
            self.target = Some(target);
        }
        self.is_observing()
    }

    pub fn detach(&mut self) -> Option<T> {
        self.target.take()
    }

    /// Records one intersection ratio sample. Returns the new flag, or `None` when the sample
    /// arrived with no target attached and was dropped.
    pub fn observe(&mut self, ratio: f64) -> Option<bool> {
        if self.target.is_none() {
            return None;
        }
        self.visible = ratio > self.threshold;
        Some(self.visible)
    }
}
