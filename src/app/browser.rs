use std::cell::RefCell;
use std::marker::PhantomData;
use std::time::Duration;

use leptos::prelude::*;

use crate::scheduler::{IntervalTask, ScheduleError, Scheduler, TaskHandle, TimeoutTask};

/// Timers on the page's event loop via `window.setInterval` / `window.setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn set_interval(
        &self,
        period: Duration,
        task: IntervalTask,
    ) -> Result<TaskHandle, ScheduleError> {
        let task = RefCell::new(task);
        let handle = set_interval_with_handle(move || (*task.borrow_mut())(), period)
            .map_err(|err| ScheduleError::Rejected(format!("{err:?}")))?;
        Ok(TaskHandle::new(move || handle.clear()))
    }

    fn set_timeout(&self, delay: Duration, task: TimeoutTask) -> Result<TaskHandle, ScheduleError> {
        let handle = set_timeout_with_handle(task, delay)
            .map_err(|err| ScheduleError::Rejected(format!("{err:?}")))?;
        Ok(TaskHandle::new(move || handle.clear()))
    }
}

/// A slot for state that only exists in the browser.
///
/// Controllers owning timers are `!Send` and have nothing to do during server rendering,
/// so on the server the slot stays empty and updates are dropped.
pub struct ClientCell<T: 'static> {
    #[cfg(feature = "hydrate")]
    inner: StoredValue<T, LocalStorage>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: 'static> Clone for ClientCell<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for ClientCell<T> {}

impl<T: 'static> ClientCell<T> {
    pub fn new(init: impl FnOnce() -> T) -> Self {
        #[cfg(not(feature = "hydrate"))]
        let _ = init;
        Self {
            #[cfg(feature = "hydrate")]
            inner: StoredValue::new_local(init()),
            _marker: PhantomData,
        }
    }

    pub fn update(&self, fun: impl FnOnce(&mut T)) {
        #[cfg(feature = "hydrate")]
        {
            _ = self.inner.try_update_value(fun);
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = fun;
    }
}
