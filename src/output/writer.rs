use crate::output::error::WriteError;
use crate::output::table::ResultTable;
use log::info;
use polars::prelude::*;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Format of datetime columns in the written file.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Writes `table` as CSV with a header row to `data_dir/file_name`, creating
/// `data_dir` if needed. Returns the path written.
pub fn write_table(
    table: &mut ResultTable,
    data_dir: &Path,
    file_name: &str,
) -> Result<PathBuf, WriteError> {
    fs::create_dir_all(data_dir)
        .map_err(|e| WriteError::OutputDirCreation(data_dir.to_path_buf(), e))?;

    let path = data_dir.join(file_name);
    let mut file =
        File::create(&path).map_err(|e| WriteError::OutputFileCreation(path.clone(), e))?;

    CsvWriter::new(&mut file)
        .include_header(true)
        .with_datetime_format(Some(TIMESTAMP_FORMAT.to_string()))
        .finish(table.frame_mut())
        .map_err(|e| WriteError::CsvWrite(path.clone(), e))?;

    info!("Wrote {} rows to {:?}", table.height(), path);
    Ok(path)
}
