use std::fs::File;
use std::io::Error;
use std::path::Path;

/// Writes a purchases CSV with one row per (account, adult, child, infant)
/// tuple, matching the CLI's input format.
pub fn write_purchases_csv(path: &Path, rows: &[(u64, u32, u32, u32)]) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["account", "adult", "child", "infant"])?;
    for (account, adult, child, infant) in rows {
        wtr.write_record([
            account.to_string(),
            adult.to_string(),
            child.to_string(),
            infant.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
