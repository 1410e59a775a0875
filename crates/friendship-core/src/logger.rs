//! Grant Log
//!
//! Append-only JSONL log of applied friendship grants.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use friendship_events::{GameDate, GameTime, GrantRecord};

use crate::accrual::Grant;

/// Writes one [`GrantRecord`] per line.
pub struct GrantLog {
    writer: Option<BufWriter<File>>,
    grant_count: u64,
}

impl GrantLog {
    /// Creates a log at `path`, truncating any previous run.
    pub fn new(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;

        Ok(Self {
            writer: Some(BufWriter::new(file)),
            grant_count: 0,
        })
    }

    /// Creates a log that discards records (for testing)
    pub fn null() -> Self {
        Self {
            writer: None,
            grant_count: 0,
        }
    }

    pub fn grant_count(&self) -> u64 {
        self.grant_count
    }

    pub fn log(&mut self, record: &GrantRecord) -> std::io::Result<()> {
        self.grant_count += 1;
        if let Some(ref mut writer) = self.writer {
            let json = record.to_jsonl()?;
            writeln!(writer, "{}", json)?;
        }
        Ok(())
    }

    /// Logs every grant of one tick, stamped with the tick's date and time.
    pub fn log_grants(
        &mut self,
        date: GameDate,
        time: GameTime,
        grants: &[Grant],
    ) -> std::io::Result<()> {
        for grant in grants {
            self.log(&GrantRecord {
                date,
                time,
                name: grant.name.clone(),
                points_before: grant.points_before,
                points_after: grant.points_after,
                status: grant.status,
            })?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush()?;
        }
        Ok(())
    }
}

impl Drop for GrantLog {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            tracing::warn!("Failed to flush grant log: {}", e);
        }
    }
}
