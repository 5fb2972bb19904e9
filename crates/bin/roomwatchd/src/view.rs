//! Log-backed view: subscribes to both slots and writes a summary line per
//! accepted snapshot.

use tokio::sync::watch;
use tokio_stream::StreamExt;
use tokio_stream::wrappers::WatchStream;

use roomwatch_app::poller::{HistorySnapshot, StatusSnapshot};

enum Update {
    History(HistorySnapshot),
    Status(StatusSnapshot),
}

/// Log every published snapshot until both slots are closed.
pub async fn render(
    history: watch::Receiver<HistorySnapshot>,
    status: watch::Receiver<StatusSnapshot>,
) {
    let history = WatchStream::from_changes(history).map(Update::History);
    let status = WatchStream::from_changes(status).map(Update::Status);
    let mut updates = history.merge(status);

    while let Some(update) = updates.next().await {
        match update {
            Update::History(snapshot) => {
                tracing::info!(sequence = snapshot.sequence, "{}", describe_history(&snapshot));
            }
            Update::Status(snapshot) => {
                for line in describe_status(&snapshot) {
                    tracing::info!(sequence = snapshot.sequence, "{line}");
                }
            }
        }
    }
    tracing::debug!("view closed");
}

/// One-line summary of a history snapshot.
#[must_use]
pub fn describe_history(snapshot: &HistorySnapshot) -> String {
    let Some(selection) = &snapshot.selection else {
        return "history: no data yet".to_string();
    };
    match snapshot.latest() {
        Some(latest) => format!(
            "history room {} on {}: {} readings, latest {} {:.1}°C {:.1}%",
            selection.room,
            selection.date,
            snapshot.readings.len(),
            latest.time,
            latest.temperature,
            latest.humidity,
        ),
        None => format!(
            "history room {} on {}: no readings",
            selection.room, selection.date
        ),
    }
}

/// One line per room in a status snapshot.
#[must_use]
pub fn describe_status(snapshot: &StatusSnapshot) -> Vec<String> {
    snapshot
        .rooms
        .iter()
        .map(|status| {
            format!(
                "room {}: {:.1}°C {:.1}%",
                status.room, status.temperature, status.humidity
            )
        })
        .collect()
}
