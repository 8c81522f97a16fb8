//! Timer-driven lifecycle for the rotating display code
//!
//! Spawning a [`CodeRotator`] is the INACTIVE to ACTIVE transition: the code
//! is generated at once and the first tick fires one second later. The
//! returned [`RotatorHandle`] is the only way to talk to the running task.
//! Calling [`RotatorHandle::stop`] or dropping the handle cancels the timer,
//! so no tick runs after the owning view is torn down.

use crate::code::rotating::RotatingCode;
use crate::types::{CodeLength, DisplayCode};
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

/// Interval between countdown ticks
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Commands accepted by a running rotator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotatorCommand {
    /// Change the code length and regenerate
    SetLength(CodeLength),
    /// Regenerate immediately and reset the countdown
    RegenerateNow,
    /// Stop ticking and shut the task down
    Stop,
}

/// Read-only view of the rotating code published after every change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSnapshot {
    pub code: DisplayCode,
    pub remaining: u32,
    pub period: u32,
    pub length: CodeLength,
    pub generation: u64,
    /// Timer ticks handled so far
    pub ticks: u64,
}

impl CodeSnapshot {
    /// Fraction of the period still remaining, in (0, 1]
    pub fn progress(&self) -> f64 {
        f64::from(self.remaining) / f64::from(self.period.max(1))
    }
}

/// Owns a [`RotatingCode`] and drives it from a one second interval
pub struct CodeRotator {
    rotating: RotatingCode,
    state_tx: watch::Sender<CodeSnapshot>,
    command_rx: mpsc::UnboundedReceiver<RotatorCommand>,
    ticks: u64,
}

impl CodeRotator {
    /// Generate a fresh code and start ticking
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(length: CodeLength, period_secs: u32) -> RotatorHandle {
        Self::spawn(RotatingCode::with_period(length, period_secs))
    }

    /// Start ticking an existing rotating code
    #[tracing::instrument(skip(rotating), fields(length = rotating.length().get(), period = rotating.period()))]
    pub fn spawn(rotating: RotatingCode) -> RotatorHandle {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(snapshot_of(&rotating, 0));

        let rotator = Self {
            rotating,
            state_tx,
            command_rx,
            ticks: 0,
        };

        info!("Display code rotator started");
        let task = tokio::spawn(rotator.run());

        RotatorHandle {
            command_tx,
            state_rx,
            task: Some(task),
        }
    }

    async fn run(mut self) {
        let mut ticker = interval_at(Instant::now() + TICK_INTERVAL, TICK_INTERVAL);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Burst);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.ticks += 1;
                    self.rotating.tick();
                    self.publish();
                }

                cmd = self.command_rx.recv() => {
                    match cmd {
                        Some(RotatorCommand::SetLength(length)) => {
                            debug!(length = length.get(), "Code length changed");
                            self.rotating.set_length(length);
                            self.publish();
                        }
                        Some(RotatorCommand::RegenerateNow) => {
                            self.rotating.regenerate_now();
                            self.publish();
                        }
                        Some(RotatorCommand::Stop) => break,
                        None => {
                            debug!("All rotator handles dropped");
                            break;
                        }
                    }
                }
            }
        }

        info!(ticks = self.ticks, "Display code rotator stopped");
    }

    fn publish(&self) {
        // Receivers may all be gone while the handle is shutting down
        let _ = self.state_tx.send(snapshot_of(&self.rotating, self.ticks));
    }
}

fn snapshot_of(rotating: &RotatingCode, ticks: u64) -> CodeSnapshot {
    CodeSnapshot {
        code: rotating.code().clone(),
        remaining: rotating.remaining(),
        period: rotating.period(),
        length: rotating.length(),
        generation: rotating.generation(),
        ticks,
    }
}

/// Handle to an active rotator
///
/// Dropping the handle aborts the task. Use [`RotatorHandle::stop`] to wait
/// until the task has fully exited.
#[derive(Debug)]
pub struct RotatorHandle {
    command_tx: mpsc::UnboundedSender<RotatorCommand>,
    state_rx: watch::Receiver<CodeSnapshot>,
    task: Option<JoinHandle<()>>,
}

impl RotatorHandle {
    /// Latest published state
    pub fn snapshot(&self) -> CodeSnapshot {
        self.state_rx.borrow().clone()
    }

    /// Receiver notified on every tick and command
    pub fn subscribe(&self) -> watch::Receiver<CodeSnapshot> {
        self.state_rx.clone()
    }

    /// Change the code length; regenerates and resets the countdown
    pub fn set_length(&self, length: CodeLength) {
        self.send(RotatorCommand::SetLength(length));
    }

    /// Regenerate the code now and reset the countdown
    pub fn regenerate_now(&self) {
        self.send(RotatorCommand::RegenerateNow);
    }

    /// Whether the rotator task is still running
    pub fn is_active(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    fn send(&self, command: RotatorCommand) {
        if self.command_tx.send(command).is_err() {
            debug!(?command, "Rotator is no longer active, command dropped");
        }
    }

    /// Stop the rotator and wait for the task to exit
    ///
    /// Once this returns no further tick can run.
    pub async fn stop(mut self) {
        self.send(RotatorCommand::Stop);
        if let Some(task) = self.task.take() {
            // A panicked or aborted task has stopped as well
            let _ = task.await;
        }
    }
}

impl Drop for RotatorHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
