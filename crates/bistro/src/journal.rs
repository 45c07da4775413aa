//! # Order Journal
//!
//! Append-only durability for the order store. Every order mutation is written
//! as one JSON line; at startup the journal is replayed to rebuild the
//! in-memory store. Orders are the only journaled resource: carts are
//! ephemeral staging state and the catalog/identity stores are seeded by the
//! operator, but a placed order is a commercial record and must survive a
//! restart.
//!
//! Append failures are logged and swallowed by the callers; an order that was
//! accepted is not un-accepted because the disk hiccuped.

use crate::model::{Order, OrderId};
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::sync::Mutex;
use tracing::{info, warn};

/// One journaled order mutation.
///
/// `Created` and `Updated` carry the full order snapshot rather than a delta,
/// so replay is a pure fold: last snapshot wins, `Deleted` removes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum OrderEvent {
    Created(Order),
    Updated(Order),
    Deleted(OrderId),
}

/// Handle to an open journal file.
///
/// The `Mutex` serializes appends from the order actor and keeps each JSON
/// line intact; contention is nil because only the order actor writes.
pub struct OrderJournal {
    writer: Mutex<BufWriter<File>>,
}

impl OrderJournal {
    /// Opens (or creates) the journal file in append mode.
    pub fn open(path: &Path) -> std::io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
        })
    }

    /// Appends one event as a JSON line and flushes it.
    pub fn append(&self, event: &OrderEvent) -> std::io::Result<()> {
        let line = serde_json::to_string(event)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| std::io::Error::new(std::io::ErrorKind::Other, "journal lock poisoned"))?;
        writeln!(writer, "{line}")?;
        writer.flush()
    }
}

/// Replays a journal file into the orders it describes, plus the next free id.
///
/// Missing file means a fresh start: no orders, ids from 1. Unparseable lines
/// (e.g. a torn write from a crash) are logged and skipped; everything before
/// them still counts.
pub fn replay(path: &Path) -> std::io::Result<(Vec<Order>, u32)> {
    if !path.exists() {
        return Ok((Vec::new(), 1));
    }

    let reader = BufReader::new(File::open(path)?);
    let mut orders: std::collections::BTreeMap<OrderId, Order> = std::collections::BTreeMap::new();
    let mut max_id = 0u32;

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let event: OrderEvent = match serde_json::from_str(&line) {
            Ok(event) => event,
            Err(e) => {
                warn!(line = line_no + 1, error = %e, "Skipping unreadable journal line");
                continue;
            }
        };
        match event {
            OrderEvent::Created(order) | OrderEvent::Updated(order) => {
                max_id = max_id.max(order.id.0);
                orders.insert(order.id, order);
            }
            OrderEvent::Deleted(id) => {
                max_id = max_id.max(id.0);
                orders.remove(&id);
            }
        }
    }

    let restored: Vec<Order> = orders.into_values().collect();
    info!(count = restored.len(), next_id = max_id + 1, "Journal replayed");
    Ok((restored, max_id + 1))
}
