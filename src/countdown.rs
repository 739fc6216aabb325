//! Global quiz countdown.
//!
//! `Countdown` is a plain state machine: every call to [`Countdown::tick`]
//! removes one second. When a tick channel is attached, `start` also spawns
//! a tokio task that sends one [`TimerTick`] per second; the owner feeds
//! those back into `tick_for`. The task is aborted whenever the countdown
//! leaves `Running`, and ticks are tagged with a run generation so anything
//! still queued from an aborted run is dropped.
//!
//! ```text
//! Idle -> Running -> (Expired | Idle)
//! ```

use crate::logger;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownState {
    Idle,
    Running,
    Expired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownSignal {
    Tick(u32),
    Expired,
}

/// One scheduled tick, tagged with the run that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerTick {
    pub generation: u64,
}

#[derive(Debug)]
pub struct Countdown {
    state: CountdownState,
    remaining_seconds: u32,
    generation: u64,
    tick_tx: Option<UnboundedSender<TimerTick>>,
    ticker: Option<JoinHandle<()>>,
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new()
    }
}

impl Countdown {
    /// A countdown without a background task; the caller drives `tick`.
    pub fn new() -> Self {
        Self {
            state: CountdownState::Idle,
            remaining_seconds: 0,
            generation: 0,
            tick_tx: None,
            ticker: None,
        }
    }

    /// A countdown that schedules its own ticks onto `tick_tx`.
    ///
    /// Must be started from within a tokio runtime.
    pub fn with_ticker(tick_tx: UnboundedSender<TimerTick>) -> Self {
        Self {
            state: CountdownState::Idle,
            remaining_seconds: 0,
            generation: 0,
            tick_tx: Some(tick_tx),
            ticker: None,
        }
    }

    pub fn state(&self) -> CountdownState {
        self.state
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_ticking(&self) -> bool {
        self.ticker.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    pub fn start(&mut self, total_seconds: u32) {
        self.cancel_ticker();
        self.generation += 1;
        self.remaining_seconds = total_seconds;
        self.state = CountdownState::Running;

        if let Some(tx) = &self.tick_tx {
            self.ticker = Some(spawn_ticker(tx.clone(), self.generation));
        }
        logger::log(&format!(
            "Countdown started: {}s (run {})",
            total_seconds, self.generation
        ));
    }

    pub fn stop(&mut self) {
        self.cancel_ticker();
        if self.state == CountdownState::Running {
            self.state = CountdownState::Idle;
            logger::log(&format!("Countdown stopped (run {})", self.generation));
        }
    }

    pub fn tick(&mut self) -> Option<CountdownSignal> {
        if self.state != CountdownState::Running {
            return None;
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds == 0 {
            self.cancel_ticker();
            self.state = CountdownState::Expired;
            logger::log(&format!("Countdown expired (run {})", self.generation));
            Some(CountdownSignal::Expired)
        } else {
            Some(CountdownSignal::Tick(self.remaining_seconds))
        }
    }

    /// Like `tick`, but ignores ticks scheduled by an earlier run.
    pub fn tick_for(&mut self, tick: TimerTick) -> Option<CountdownSignal> {
        if tick.generation != self.generation {
            return None;
        }
        self.tick()
    }

    fn cancel_ticker(&mut self) {
        if let Some(handle) = self.ticker.take() {
            handle.abort();
        }
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.cancel_ticker();
    }
}

fn spawn_ticker(tx: UnboundedSender<TimerTick>, generation: u64) -> JoinHandle<()> {
    tokio::spawn(async move {
        let start = tokio::time::Instant::now() + TICK_PERIOD;
        let mut interval = tokio::time::interval_at(start, TICK_PERIOD);
        loop {
            interval.tick().await;
            if tx.send(TimerTick { generation }).is_err() {
                // Receiver gone, nobody left to count down for
                break;
            }
        }
    })
}
