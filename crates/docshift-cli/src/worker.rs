//! Background conversion worker
//!
//! A conversion runs on its own thread and reports back over a
//! `crossbeam_channel`. The receiver sees `Started`, any number of
//! `Progress` events, then exactly one of `Done` or `Failed`, after which the
//! channel disconnects. Dropping the receiver early abandons the events but
//! not the conversion; it still runs to completion.

use std::path::PathBuf;
use std::thread;

use crossbeam_channel::{Receiver, Sender};
use serde::Serialize;
use tracing::debug;

use crate::convert::{convert, ConversionError};

/// A message from the worker thread
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ConversionEvent {
    /// The worker picked up the input
    Started { input: PathBuf },
    /// Percent complete, `0..=100`
    Progress { percent: u8 },
    /// The output file was written
    Done { output: PathBuf },
    /// The conversion stopped with an error
    Failed { error: ConversionError },
}

impl ConversionEvent {
    /// Whether no further events follow this one
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done { .. } | Self::Failed { .. })
    }
}

/// Run [`convert`] on a new thread
pub fn spawn_conversion(input: PathBuf, output_dir: PathBuf) -> Receiver<ConversionEvent> {
    let (tx, rx) = crossbeam_channel::unbounded();
    thread::spawn(move || run_conversion(input, output_dir, tx));
    rx
}

fn run_conversion(input: PathBuf, output_dir: PathBuf, tx: Sender<ConversionEvent>) {
    // Send errors only mean the receiver is gone
    let _ = tx.send(ConversionEvent::Started {
        input: input.clone(),
    });

    let mut on_progress = |percent: u8| {
        let _ = tx.send(ConversionEvent::Progress { percent });
    };
    let event = match convert(&input, &output_dir, &mut on_progress) {
        Ok(output) => ConversionEvent::Done { output },
        Err(error) => ConversionEvent::Failed { error },
    };

    debug!(?event, "worker finished");
    let _ = tx.send(event);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_events_for_successful_conversion() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("notes.md");
        fs::write(&input, "# A\n- b").unwrap();

        let events: Vec<ConversionEvent> =
            spawn_conversion(input.clone(), dir.path().to_path_buf())
                .iter()
                .collect();

        assert_eq!(events[0], ConversionEvent::Started { input });
        assert_eq!(
            events.last(),
            Some(&ConversionEvent::Done {
                output: dir.path().join("notes.docx")
            })
        );
        let percents: Vec<u8> = events
            .iter()
            .filter_map(|e| match e {
                ConversionEvent::Progress { percent } => Some(*percent),
                _ => None,
            })
            .collect();
        assert_eq!(percents, vec![0, 50, 100]);
    }

    #[test]
    fn test_events_for_failed_conversion() {
        let dir = TempDir::new().unwrap();
        let events: Vec<ConversionEvent> =
            spawn_conversion(dir.path().join("notes.txt"), dir.path().to_path_buf())
                .iter()
                .collect();

        assert_eq!(events.len(), 2);
        assert!(matches!(
            events[1],
            ConversionEvent::Failed {
                error: ConversionError::UnsupportedFormat(_)
            }
        ));
        assert!(events[1].is_terminal());
        assert!(!events[0].is_terminal());
    }

    #[test]
    fn test_event_json_shape() {
        let json = serde_json::to_value(ConversionEvent::Progress { percent: 40 }).unwrap();
        assert_eq!(json, serde_json::json!({"event": "progress", "percent": 40}));

        let json = serde_json::to_value(ConversionEvent::Failed {
            error: ConversionError::ReadError("gone".to_string()),
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "event": "failed",
                "error": {"kind": "ReadError", "message": "gone"}
            })
        );
    }
}
