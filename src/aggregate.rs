//! Per-scope aggregation of resource records
//!
//! Reports are written straight to the output sink; nothing is kept once a scope's
//! lines are out.

use std::collections::BTreeMap;
use std::io::Write;

use crate::error::Result;
use crate::resource::ResourceRecord;

/// How a scope's resources are reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountMode {
    /// One `<kind>: <count>` line per distinct kind
    #[default]
    ByKind,
    /// A single `<count>` line
    Total,
}

impl CountMode {
    /// Select the mode from the `--kind` switch
    pub fn from_kind_flag(by_kind: bool) -> Self {
        if by_kind { Self::ByKind } else { Self::Total }
    }
}

/// Occurrences per kind, ordered by kind name
pub type CountTable = BTreeMap<String, usize>;

/// Count how often each kind occurs
pub fn count_by_kind(records: &[ResourceRecord]) -> CountTable {
    let mut table = CountTable::new();
    for record in records {
        *table.entry(record.kind().to_string()).or_default() += 1;
    }
    table
}

/// Write the report for one scope
pub fn write_report(
    mode: CountMode,
    records: &[ResourceRecord],
    out: &mut dyn Write,
) -> Result<()> {
    match mode {
        CountMode::ByKind => {
            for (kind, count) in count_by_kind(records) {
                writeln!(out, "{kind}: {count}")?;
            }
        }
        CountMode::Total => writeln!(out, "{}", records.len())?,
    }
    Ok(())
}
