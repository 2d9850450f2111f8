use super::{record::*, *};
use csv::WriterBuilder;
use std::{io, path::Path};

/// Write the normalized addresses into a CSV file.
///
/// The header row is always written, even if there are no results.
pub fn save_results_to_csv<P: AsRef<Path>>(
    results: &[NormalizedAddress],
    path: P,
) -> Result<()> {
    let path = path.as_ref();
    let writer = WriterBuilder::new().has_headers(false).from_path(path)?;
    write_results(results, writer)?;
    info!("Saved {} results to {}", results.len(), path.display());
    Ok(())
}

pub(crate) fn write_results<W: io::Write>(
    results: &[NormalizedAddress],
    mut writer: csv::Writer<W>,
) -> Result<()> {
    writer.write_record(CSV_HEADER)?;
    for r in results.iter().cloned().map(CsvRecord::from) {
        writer.serialize(r)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{super::tests::prelude::*, *};

    fn write(results: &[NormalizedAddress]) -> String {
        let mut buf = Vec::new();
        let writer = WriterBuilder::new().has_headers(false).from_writer(&mut buf);
        write_results(results, writer).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn only_header_without_results() {
        assert_eq!(
            "Original Address,Normalized Address,Confidence,Latitude,Longitude,Country,State,City,Postal Code\n",
            write(&[])
        );
    }

    #[test]
    fn write_complete_record() {
        let csv = write(&[beverly_hills("123 Main Street 90210")]);
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(
            "123 Main Street 90210,\"123, Main St, Beverly Hills, CA, 90210, USA\",0.95,34.0736,-118.4004,United States,CA,Beverly Hills,90210",
            row
        );
    }

    #[test]
    fn missing_values_are_empty_cells() {
        let addr = NormalizedAddress::build()
            .original("Berlin")
            .normalized("Berlin, DEU")
            .city(Some("Berlin"))
            .finish();
        let csv = write(&[addr]);
        assert_eq!(Some("Berlin,\"Berlin, DEU\",0.0,,,,,Berlin,"), csv.lines().nth(1));
    }
}
