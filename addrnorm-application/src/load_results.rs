use super::{record::*, *};
use csv::ReaderBuilder;
use std::{io, path::Path};

/// Read a result file that was written by [`save_results_to_csv`](crate::prelude::save_results_to_csv).
///
/// Empty cells become `None`.
pub fn load_results_from_csv<P: AsRef<Path>>(path: P) -> Result<Vec<NormalizedAddress>> {
    let path = path.as_ref();
    let reader = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let results = read_results(reader)?;
    info!("Loaded {} results from {}", results.len(), path.display());
    Ok(results)
}

fn read_results<R: io::Read>(mut reader: csv::Reader<R>) -> Result<Vec<NormalizedAddress>> {
    let mut results = Vec::new();
    for record in reader.deserialize::<CsvRecord>() {
        results.push(record?.into());
    }
    Ok(results)
}
