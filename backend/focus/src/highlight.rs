use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use tokio::{
    runtime::Handle,
    task::JoinHandle,
    time::{Instant, MissedTickBehavior, interval_at},
};
use tracing::debug;

use crate::{error::FocusError, observer::FocusChange};

#[derive(Debug, Default)]
struct Cursor {
    index: usize,
    // bumped on every stop so a tick racing the abort cannot land
    generation: u64,
}

/// Rotating "current item" over a fixed, non-empty list.
///
/// Advances by one every `period` while running. Stopping freezes the index
/// where it is; a partial period never counts. At most one timer exists per
/// highlight and it is torn down on [`stop`](Self::stop) or drop.
pub struct CyclicHighlight<T> {
    items: Arc<[T]>,
    period: Duration,
    cursor: Arc<Mutex<Cursor>>,
    timer: Option<JoinHandle<()>>,
}

impl<T> CyclicHighlight<T> {
    pub fn new(items: impl Into<Arc<[T]>>, period: Duration) -> Result<Self, FocusError> {
        let items = items.into();

        if items.is_empty() {
            return Err(FocusError::EmptyShowcase);
        }

        if period.is_zero() {
            return Err(FocusError::ZeroInterval);
        }

        Ok(Self {
            items,
            period,
            cursor: Arc::new(Mutex::new(Cursor::default())),
            timer: None,
        })
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn active_index(&self) -> usize {
        lock(&self.cursor).index
    }

    pub fn active_item(&self) -> &T {
        &self.items[self.active_index()]
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Starts ticking on the current Tokio runtime, replacing any running timer.
    pub fn start(&mut self) -> Result<(), FocusError> {
        let handle = Handle::try_current().map_err(|_| FocusError::NoRuntime)?;

        self.stop();

        let cursor = self.cursor.clone();
        let generation = lock(&cursor).generation;
        let len = self.items.len();
        let period = self.period;

        self.timer = Some(handle.spawn(async move {
            let mut ticks = interval_at(Instant::now() + period, period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticks.tick().await;

                let mut state = lock(&cursor);
                if state.generation != generation {
                    return;
                }
                state.index = (state.index + 1) % len;
            }
        }));

        debug!("Highlight timer started, every {:?}", period);

        Ok(())
    }

    /// Cancels the timer. No tick lands after this returns.
    pub fn stop(&mut self) {
        if let Some(timer) = self.timer.take() {
            lock(&self.cursor).generation += 1;
            timer.abort();

            debug!("Highlight timer stopped at {}", self.active_index());
        }
    }

    pub fn apply(&mut self, change: FocusChange) -> Result<(), FocusError> {
        match change {
            FocusChange::Gained => self.start(),
            FocusChange::Lost => {
                self.stop();
                Ok(())
            }
        }
    }
}

impl<T> Drop for CyclicHighlight<T> {
    fn drop(&mut self) {
        self.stop();
    }
}

fn lock(cursor: &Mutex<Cursor>) -> MutexGuard<'_, Cursor> {
    cursor.lock().unwrap_or_else(PoisonError::into_inner)
}
