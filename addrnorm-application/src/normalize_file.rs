use super::{load_addresses::*, save_results::*, *};
use crate::usecases::DuplicateGroup;
use std::{path::Path, time::Duration};

#[derive(Debug)]
pub struct NormalizationReport {
    /// Number of addresses read from the input file.
    pub total: usize,
    pub results: Vec<NormalizedAddress>,
    pub duplicates: Vec<DuplicateGroup>,
}

impl NormalizationReport {
    pub fn failed(&self) -> usize {
        self.total - self.results.len()
    }
}

/// Normalize all addresses of the input file and save the results.
///
/// Failing to read the input or to write the output aborts the run,
/// addresses that could not be resolved are left out.
pub fn normalize_file<G, I, O>(
    gateway: &G,
    input: I,
    output: O,
    delay: Duration,
) -> Result<NormalizationReport>
where
    G: GeoCodingGateway + ?Sized,
    I: AsRef<Path>,
    O: AsRef<Path>,
{
    let addresses = load_addresses_from_csv(input)?;
    let results = usecases::normalize_batch(gateway, &addresses, delay);
    let duplicates = usecases::find_duplicates(&results);
    save_results_to_csv(&results, output)?;
    let report = NormalizationReport {
        total: addresses.len(),
        results,
        duplicates,
    };
    if report.failed() > 0 {
        warn!(
            "{} of {} addresses could not be normalized",
            report.failed(),
            report.total
        );
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::prelude::*, *};
    use crate::prelude::load_results_from_csv;
    use std::fs;

    #[test]
    fn normalize_and_find_duplicates() {
        init_logging();
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("addresses.csv");
        let output = dir.path().join("normalized_addresses.csv");
        fs::write(
            &input,
            "123 Main Street 90210\n123 Main St Beverly Hills 90210\nunknown place\n123 MAIN ST BEVERLY HILLS\n",
        )
        .unwrap();
        let gw = MockGeoGW::default()
            .resolve("123 Main Street 90210", beverly_hills("123 Main Street 90210"))
            .resolve(
                "123 Main St Beverly Hills 90210",
                beverly_hills("123 Main St Beverly Hills 90210"),
            )
            .resolve(
                "123 MAIN ST BEVERLY HILLS",
                beverly_hills("123 MAIN ST BEVERLY HILLS"),
            );

        let report = normalize_file(&gw, &input, &output, Duration::ZERO).unwrap();
        assert_eq!(4, report.total);
        assert_eq!(3, report.results.len());
        assert_eq!(1, report.failed());
        assert_eq!(1, report.duplicates.len());
        assert_eq!(3, report.duplicates[0].members.len());
        assert_eq!(report.results, load_results_from_csv(&output).unwrap());
    }

    #[test]
    fn empty_input() {
        init_logging();
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("addresses.csv");
        let output = dir.path().join("normalized_addresses.csv");
        fs::write(&input, "").unwrap();

        let report =
            normalize_file(&MockGeoGW::default(), &input, &output, Duration::ZERO).unwrap();
        assert_eq!(0, report.total);
        assert!(report.results.is_empty());
        assert!(report.duplicates.is_empty());
        assert_eq!(
            "Original Address,Normalized Address,Confidence,Latitude,Longitude,Country,State,City,Postal Code\n",
            fs::read_to_string(&output).unwrap()
        );
    }

    #[test]
    fn missing_input_file_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("normalized_addresses.csv");
        let res = normalize_file(
            &MockGeoGW::default(),
            dir.path().join("missing.csv"),
            &output,
            Duration::ZERO,
        );
        assert!(res.is_err());
        assert!(!output.exists());
    }
}
