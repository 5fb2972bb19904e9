//! Room telemetry poller — keeps the history and status slots up to date.
//!
//! A poll runs the history fetch (for the current [`Selection`]) and the
//! status fetch as two independent tasks. Each task publishes to its own
//! [`watch`] slot as soon as it resolves; neither waits for the other.
//!
//! Polls are triggered:
//! - once, immediately, on [`mount`](RoomTelemetryPoller::mount);
//! - once, immediately, on every selection change (which also re-arms the timer);
//! - on every timer tick, whether or not a previous poll is still in flight.
//!
//! Responses are numbered per slot. A response is published only if it is
//! newer than the last published one, and history responses must also belong
//! to the current selection generation. Once a response is published, the
//! older requests of that slot still in flight are aborted. Changing the
//! selection aborts the in-flight history requests of the previous selection;
//! unmounting aborts everything.

mod config;
mod in_flight;
mod sequence;
mod snapshot;

pub use config::{DEFAULT_INTERVAL, PollerConfig};
pub use snapshot::{HistorySnapshot, StatusSnapshot};

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use tokio::sync::{mpsc, watch};
use tokio::task::{JoinError, JoinHandle, JoinSet};
use tokio::time::{Instant, MissedTickBehavior};

use roomwatch_domain::error::RoomWatchError;
use roomwatch_domain::reading::SensorReading;
use roomwatch_domain::room::{RoomCatalog, RoomId};
use roomwatch_domain::selection::Selection;
use roomwatch_domain::status::RoomStatus;
use roomwatch_domain::time::today;

use crate::ports::TelemetrySource;

use in_flight::InFlight;
use sequence::SequenceTracker;

const COMMAND_CAPACITY: usize = 16;

/// `tokio::time::interval` panics on a zero period.
const MIN_INTERVAL: Duration = Duration::from_millis(1);

enum Command {
    Select(Selection),
}

struct HistoryOutcome {
    sequence: u64,
    generation: u64,
    selection: Selection,
    result: Result<Vec<SensorReading>, RoomWatchError>,
}

struct StatusOutcome {
    sequence: u64,
    result: Result<Vec<RoomStatus>, RoomWatchError>,
}

/// The polling loop. Owns both slots and is their only writer.
pub struct RoomTelemetryPoller<S> {
    source: Arc<S>,
    interval: Duration,
    selection: Selection,
    generation: u64,
    history_sequence: SequenceTracker,
    status_sequence: SequenceTracker,
    history_tasks: JoinSet<HistoryOutcome>,
    status_tasks: JoinSet<StatusOutcome>,
    history_in_flight: InFlight,
    status_in_flight: InFlight,
    history_tx: watch::Sender<HistorySnapshot>,
    status_tx: watch::Sender<StatusSnapshot>,
}

impl<S: TelemetrySource + 'static> RoomTelemetryPoller<S> {
    /// Spawn the polling loop on the current tokio runtime.
    ///
    /// The first poll is issued immediately with `selection`, which is
    /// trusted as-is. Later selections go through [`PollerHandle::select`]
    /// and are validated against `config.catalog`.
    ///
    /// # Panics
    ///
    /// Panics when called outside of a tokio runtime.
    pub fn mount(source: S, config: PollerConfig, selection: Selection) -> PollerHandle {
        let (poller, history, status) = Self::new(source, config.interval, selection.clone());
        let (commands, command_rx) = mpsc::channel(COMMAND_CAPACITY);
        let task = tokio::spawn(poller.run(command_rx));

        PollerHandle {
            commands,
            history,
            status,
            selection,
            catalog: config.catalog,
            task,
        }
    }

    fn new(
        source: S,
        interval: Duration,
        selection: Selection,
    ) -> (
        Self,
        watch::Receiver<HistorySnapshot>,
        watch::Receiver<StatusSnapshot>,
    ) {
        let (history_tx, history_rx) = watch::channel(HistorySnapshot::default());
        let (status_tx, status_rx) = watch::channel(StatusSnapshot::default());

        let poller = Self {
            source: Arc::new(source),
            interval: interval.max(MIN_INTERVAL),
            selection,
            generation: 0,
            history_sequence: SequenceTracker::default(),
            status_sequence: SequenceTracker::default(),
            history_tasks: JoinSet::new(),
            status_tasks: JoinSet::new(),
            history_in_flight: InFlight::default(),
            status_in_flight: InFlight::default(),
            history_tx,
            status_tx,
        };

        (poller, history_rx, status_rx)
    }

    async fn run(mut self, mut commands: mpsc::Receiver<Command>) {
        tracing::info!(
            room = %self.selection.room,
            date = %self.selection.date,
            interval = ?self.interval,
            "poller mounted"
        );

        self.poll();
        let mut ticker = tokio::time::interval_at(Instant::now() + self.interval, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                _ = ticker.tick() => self.poll(),
                command = commands.recv() => match command {
                    Some(Command::Select(selection)) => {
                        self.change_selection(selection);
                        self.poll();
                        ticker.reset();
                    }
                    None => break,
                },
                Some(joined) = self.history_tasks.join_next(), if !self.history_tasks.is_empty() => {
                    if let Some(outcome) = settled(joined) {
                        self.apply_history(outcome);
                    }
                }
                Some(joined) = self.status_tasks.join_next(), if !self.status_tasks.is_empty() => {
                    if let Some(outcome) = settled(joined) {
                        self.apply_status(outcome);
                    }
                }
            }
        }

        self.history_tasks.abort_all();
        self.status_tasks.abort_all();
        tracing::info!("poller unmounted");
    }

    fn poll(&mut self) {
        let history_sequence = self.history_sequence.issue();
        let status_sequence = self.status_sequence.issue();

        tracing::debug!(
            room = %self.selection.room,
            date = %self.selection.date,
            history_sequence,
            status_sequence,
            "poll started"
        );

        let source = Arc::clone(&self.source);
        let selection = self.selection.clone();
        let generation = self.generation;
        let handle = self.history_tasks.spawn(async move {
            let result = source.fetch_history(&selection.room, selection.date).await;
            HistoryOutcome {
                sequence: history_sequence,
                generation,
                selection,
                result,
            }
        });
        self.history_in_flight.track(history_sequence, handle);

        let source = Arc::clone(&self.source);
        let handle = self.status_tasks.spawn(async move {
            let result = source.fetch_current_status().await;
            StatusOutcome {
                sequence: status_sequence,
                result,
            }
        });
        self.status_in_flight.track(status_sequence, handle);
    }

    fn change_selection(&mut self, selection: Selection) {
        self.generation += 1;
        let aborted = self.history_tasks.len();
        self.history_tasks.abort_all();
        self.history_in_flight.clear();

        tracing::info!(
            room = %selection.room,
            date = %selection.date,
            generation = self.generation,
            aborted,
            "selection changed"
        );
        self.selection = selection;
    }

    fn apply_history(&mut self, outcome: HistoryOutcome) {
        let HistoryOutcome {
            sequence,
            generation,
            selection,
            result,
        } = outcome;
        self.history_in_flight.settle(sequence);

        if generation != self.generation {
            tracing::debug!(
                room = %selection.room,
                sequence,
                "ignoring history for a previous selection"
            );
            return;
        }

        match result {
            Ok(readings) => {
                if !self.history_sequence.accept(sequence) {
                    tracing::debug!(sequence, "ignoring stale history response");
                    return;
                }
                let superseded = self.history_in_flight.supersede(sequence);
                tracing::debug!(
                    room = %selection.room,
                    date = %selection.date,
                    sequence,
                    count = readings.len(),
                    superseded,
                    "history updated"
                );
                self.history_tx.send_replace(HistorySnapshot {
                    selection: Some(selection),
                    readings,
                    sequence,
                });
            }
            Err(err) => {
                tracing::warn!(
                    %err,
                    room = %selection.room,
                    date = %selection.date,
                    sequence,
                    "history fetch failed, keeping previous readings"
                );
            }
        }
    }

    fn apply_status(&mut self, outcome: StatusOutcome) {
        let StatusOutcome { sequence, result } = outcome;
        self.status_in_flight.settle(sequence);

        match result {
            Ok(rooms) => {
                if !self.status_sequence.accept(sequence) {
                    tracing::debug!(sequence, "ignoring stale status response");
                    return;
                }
                let superseded = self.status_in_flight.supersede(sequence);
                tracing::debug!(
                    sequence,
                    count = rooms.len(),
                    superseded,
                    "status updated"
                );
                self.status_tx.send_replace(StatusSnapshot { rooms, sequence });
            }
            Err(err) => {
                tracing::warn!(%err, sequence, "status fetch failed, keeping previous status");
            }
        }
    }
}

fn settled<T>(joined: Result<T, JoinError>) -> Option<T> {
    match joined {
        Ok(outcome) => Some(outcome),
        Err(err) if err.is_cancelled() => None,
        Err(err) => {
            tracing::error!(%err, "fetch task panicked");
            None
        }
    }
}

/// Handle to a mounted poller.
///
/// Dropping the handle stops the loop just like [`unmount`](Self::unmount),
/// without waiting for it.
pub struct PollerHandle {
    commands: mpsc::Sender<Command>,
    history: watch::Receiver<HistorySnapshot>,
    status: watch::Receiver<StatusSnapshot>,
    selection: Selection,
    catalog: RoomCatalog,
    task: JoinHandle<()>,
}

impl PollerHandle {
    /// The selection the next polls will use.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Rooms a selection may point at.
    #[must_use]
    pub fn catalog(&self) -> &RoomCatalog {
        &self.catalog
    }

    /// Subscribe to the history slot.
    #[must_use]
    pub fn history(&self) -> watch::Receiver<HistorySnapshot> {
        self.history.clone()
    }

    /// Subscribe to the status slot.
    #[must_use]
    pub fn status(&self) -> watch::Receiver<StatusSnapshot> {
        self.status.clone()
    }

    /// Change the selection and trigger an immediate poll.
    ///
    /// Selecting the current value again is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`RoomWatchError::Validation`] when the room is not in the
    /// catalog or the day is outside `[today - 7 days, today]`.
    /// Returns [`RoomWatchError::Stopped`] when the polling loop has ended;
    /// the current selection is left unchanged.
    pub async fn select(&mut self, selection: Selection) -> Result<(), RoomWatchError> {
        if selection == self.selection {
            return Ok(());
        }
        selection.validate(&self.catalog, today())?;

        if self
            .commands
            .send(Command::Select(selection.clone()))
            .await
            .is_err()
        {
            tracing::warn!(room = %selection.room, "poller has stopped, selection not applied");
            return Err(RoomWatchError::Stopped);
        }
        self.selection = selection;
        Ok(())
    }

    /// Change only the room.
    ///
    /// # Errors
    ///
    /// See [`select`](Self::select).
    pub async fn select_room(&mut self, room: RoomId) -> Result<(), RoomWatchError> {
        let selection = self.selection.with_room(room);
        self.select(selection).await
    }

    /// Change only the day.
    ///
    /// # Errors
    ///
    /// See [`select`](Self::select).
    pub async fn select_date(&mut self, date: NaiveDate) -> Result<(), RoomWatchError> {
        let selection = self.selection.with_date(date);
        self.select(selection).await
    }

    /// Cancel the timer and every in-flight request, then wait for the loop
    /// to finish. Subscribers keep the last published values.
    pub async fn unmount(self) {
        let Self { commands, task, .. } = self;
        drop(commands);
        if let Err(err) = task.await {
            tracing::error!(%err, "poller task ended abnormally");
        }
    }
}
