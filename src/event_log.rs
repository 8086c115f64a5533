//! JSONL event log.
//!
//! Records are serialized on a background thread and appended to a file, one
//! JSON object per line. Cell paint events are not logged; everything else the
//! engine reports is, plus runner lifecycle records (start, restart).

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::mpsc;
use std::thread::{self, JoinHandle};
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::core::EngineEvent;

/// One line of the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub seq: u64,
    /// Milliseconds since the log was opened
    pub ts: u64,
    #[serde(flatten)]
    pub kind: EventKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventKind {
    Start { seed: u32, drop_interval_ms: u32 },
    Restart,
    Spawn { shape: String },
    Lock { row: i8, col: i8, lines_cleared: u32 },
    Score { total: u32 },
    GameOver,
}

impl EventKind {
    /// Log form of an engine event; `None` for cell paints.
    pub fn from_engine(event: &EngineEvent) -> Option<Self> {
        match *event {
            EngineEvent::DrawCell { .. } | EngineEvent::ClearCell { .. } => None,
            EngineEvent::Spawned { kind } => Some(Self::Spawn {
                shape: kind.as_str().to_string(),
            }),
            EngineEvent::Locked {
                row,
                col,
                lines_cleared,
            } => Some(Self::Lock {
                row,
                col,
                lines_cleared,
            }),
            EngineEvent::ScoreChanged { total } => Some(Self::Score { total }),
            EngineEvent::GameOver => Some(Self::GameOver),
        }
    }
}

/// Handle to the writer thread. Dropping it flushes and joins the writer.
pub struct EventLog {
    tx: Option<mpsc::Sender<EventRecord>>,
    worker: Option<JoinHandle<()>>,
    seq: u64,
    started: Instant,
}

impl EventLog {
    /// A log that discards everything.
    pub fn disabled() -> Self {
        Self {
            tx: None,
            worker: None,
            seq: 0,
            started: Instant::now(),
        }
    }

    /// Open `path` for appending and start the writer thread.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path.as_ref())?;

        let (tx, rx) = mpsc::channel::<EventRecord>();
        let worker = thread::Builder::new()
            .name("tetrino-event-log".to_string())
            .spawn(move || write_records(file, rx))?;

        Ok(Self {
            tx: Some(tx),
            worker: Some(worker),
            seq: 0,
            started: Instant::now(),
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.tx.is_some()
    }

    pub fn record(&mut self, kind: EventKind) {
        let Some(tx) = &self.tx else {
            return;
        };
        self.seq += 1;
        let rec = EventRecord {
            seq: self.seq,
            ts: self.started.elapsed().as_millis() as u64,
            kind,
        };
        if tx.send(rec).is_err() {
            // Writer is gone (I/O failure); stop logging.
            self.tx = None;
        }
    }

    pub fn record_engine(&mut self, event: &EngineEvent) {
        if let Some(kind) = EventKind::from_engine(event) {
            self.record(kind);
        }
    }
}

impl Drop for EventLog {
    fn drop(&mut self) {
        self.tx = None;
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

fn write_records(mut file: File, rx: mpsc::Receiver<EventRecord>) {
    let mut buf: Vec<u8> = Vec::with_capacity(256);
    while let Ok(rec) = rx.recv() {
        buf.clear();
        if serde_json::to_writer(&mut buf, &rec).is_err() {
            continue;
        }
        buf.push(b'\n');
        if let Err(e) = file.write_all(&buf) {
            eprintln!("[tetrino] event log write failed: {}", e);
            break;
        }
    }
    let _ = file.flush();
}
