//! Multi-session summary table.
//!
//! An explicit, caller-owned table of summary rows: sessions are appended
//! one row at a time, then the whole table is serialized to CSV and
//! cleared in a single operation. The header is fixed by the first
//! appended session; later sessions must produce the identical header.

use serde::{Deserialize, Serialize};

use kinemetry_core::{Error, Result, SessionSummary};

use crate::csv::{summary_header, summary_row};

/// Ordered collection of per-session summary rows
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionTable {
    header: Option<String>,
    rows: Vec<String>,
}

impl SessionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append one session's summary as a new row
    pub fn append(&mut self, summary: &SessionSummary) -> Result<()> {
        let header = summary_header(summary);
        match &self.header {
            None => self.header = Some(header),
            Some(existing) => {
                if *existing != header {
                    return Err(Error::TableHeader {
                        expected: existing.clone(),
                        actual: header,
                    });
                }
            }
        }

        self.rows.push(summary_row(summary));
        tracing::debug!(rows = self.rows.len(), "summary row appended");
        Ok(())
    }

    /// Serialize the table to CSV and clear it.
    ///
    /// Fails on an empty table; there is nothing meaningful to flush.
    pub fn serialize_and_clear(&mut self) -> Result<String> {
        if self.rows.is_empty() {
            return Err(Error::EmptyTable);
        }
        let header = self.header.take().ok_or(Error::EmptyTable)?;

        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        lines.push(header);
        lines.append(&mut self.rows);
        Ok(lines.join("\n"))
    }
}
