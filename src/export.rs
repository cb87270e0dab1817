use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use crate::currency::fixed2;
use crate::errors::Result;
use crate::types::AmortizationRow;

/// file name used by the schedule download
pub const EXPORT_FILE_NAME: &str = "amortization_schedule.csv";

const HEADERS: [&str; 5] = ["Month", "Payment", "Principal", "Interest", "Remaining Balance"];

/// write the amortization ledger as csv, monetary fields fixed to 2 decimals
pub fn write_schedule_csv<W: io::Write>(schedule: &[AmortizationRow], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(HEADERS)?;

    for row in schedule {
        csv_writer.write_record([
            row.month.to_string(),
            fixed2(row.payment),
            fixed2(row.principal),
            fixed2(row.interest),
            fixed2(row.balance),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// render the amortization ledger to a csv string
pub fn schedule_to_csv(schedule: &[AmortizationRow]) -> Result<String> {
    let mut buffer = Vec::new();
    write_schedule_csv(schedule, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// write `amortization_schedule.csv` into `dir` and return its path
pub fn export_schedule(schedule: &[AmortizationRow], dir: &Path) -> Result<PathBuf> {
    let path = dir.join(EXPORT_FILE_NAME);
    let file = File::create(&path)?;
    write_schedule_csv(schedule, file)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schedule() -> Vec<AmortizationRow> {
        vec![
            AmortizationRow {
                month: 1,
                payment: 100.0,
                principal: 90.0,
                interest: 10.0,
                balance: 910.0,
            },
            AmortizationRow {
                month: 2,
                payment: 100.0,
                principal: 90.9,
                interest: 9.1,
                balance: 819.1,
            },
        ]
    }

    #[test]
    fn test_csv_layout() {
        let csv = schedule_to_csv(&sample_schedule()).unwrap();

        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Month,Payment,Principal,Interest,Remaining Balance"
        );
        assert_eq!(lines.next().unwrap(), "1,100.00,90.00,10.00,910.00");
        assert_eq!(lines.next().unwrap(), "2,100.00,90.90,9.10,819.10");
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_empty_schedule_writes_header_only() {
        let csv = schedule_to_csv(&[]).unwrap();
        assert_eq!(csv.trim_end(), "Month,Payment,Principal,Interest,Remaining Balance");
    }

    #[test]
    fn test_export_to_directory() {
        let dir = std::env::temp_dir();
        let path = export_schedule(&sample_schedule(), &dir).unwrap();

        assert!(path.ends_with(EXPORT_FILE_NAME));
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("Month,Payment,Principal,Interest,Remaining Balance"));

        std::fs::remove_file(path).unwrap();
    }
}
