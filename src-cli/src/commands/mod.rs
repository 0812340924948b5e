//! Command handlers.

pub mod config;
pub mod lead;
pub mod lookup;
pub mod outline;

use eros_registry::CompanyRecord;
use serde::Serialize;
use std::io::{self, Write};

/// Print the company fields as an aligned two-column table.
pub(crate) fn write_company<W: Write + ?Sized>(
    out: &mut W,
    company: &CompanyRecord,
) -> io::Result<()> {
    let fields = company.fields();
    let width = fields
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);
    for (label, value) in fields {
        writeln!(out, "  {label:<width$}  {value}")?;
    }
    Ok(())
}

/// Print `value` as pretty JSON on its own line.
pub(crate) fn write_json<W: Write + ?Sized>(
    out: &mut W,
    value: &impl Serialize,
) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
