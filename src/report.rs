use addrnorm_core::{entities::NormalizedAddress, usecases::DuplicateGroup};
use std::io::{self, Write};

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

pub fn write_results<W: Write>(out: &mut W, results: &[NormalizedAddress]) -> io::Result<()> {
    writeln!(out, "Results:")?;
    for result in results {
        writeln!(out, "Original: {}", result.original)?;
        writeln!(out, "Normalized: {}", result.normalized)?;
        writeln!(out, "Confidence: {}", result.confidence)?;
        writeln!(
            out,
            "Location: {}, {}",
            optional(result.latitude),
            optional(result.longitude)
        )?;
        writeln!(out, "---")?;
    }
    Ok(())
}

pub fn write_duplicates<W: Write>(out: &mut W, duplicates: &[DuplicateGroup]) -> io::Result<()> {
    writeln!(
        out,
        "Found {} groups of duplicate addresses:",
        duplicates.len()
    )?;
    for group in duplicates {
        writeln!(out)?;
        writeln!(out, "Duplicate group:")?;
        for addr in &group.members {
            writeln!(out, "  - {} -> {}", addr.original, addr.normalized)?;
        }
    }
    Ok(())
}
