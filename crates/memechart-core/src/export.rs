use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

use crate::{PriceHistorySet, Result};

/// Writes `timeframe,date,price` rows, timeframes in chart order.
pub fn write_csv<W: Write>(set: &PriceHistorySet, writer: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(["timeframe", "date", "price"])?;

    for (timeframe, points) in set.iter() {
        for point in points {
            writer.write_record([
                timeframe.label().to_string(),
                point.date.to_string(),
                point.price.to_string(),
            ])?;
        }
    }

    writer.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(set: &PriceHistorySet, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, set)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

pub fn export_csv(set: &PriceHistorySet, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    write_csv(set, BufWriter::new(File::create(path)?))?;
    info!("Exported {} timeframes to {}", set.len(), path.display());
    Ok(())
}

pub fn export_json(set: &PriceHistorySet, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    write_json(set, BufWriter::new(File::create(path)?))?;
    info!("Exported {} timeframes to {}", set.len(), path.display());
    Ok(())
}
