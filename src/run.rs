use std::path::{Path, PathBuf};

use csv::StringRecord;
use tempfile::Builder;

use crate::batch_sort::sort_batch;
use crate::config::Config;
use crate::error::{Result, SortError};

/// The product of the run generation phase: the run files in creation order
/// plus the schema they share.
pub(crate) struct RunSet {
    pub(crate) runs: Vec<PathBuf>,
    pub(crate) header: StringRecord,
    pub(crate) key_index: usize,
}

/// Split the input into sorted runs.
///
/// Reads the header, resolves the key column, then accumulates records into a
/// batch. Each time the batch reaches the configured limit it is sorted and
/// flushed to a new temporary run file; a final, possibly smaller run is
/// flushed after the input is exhausted. A header-only input produces zero
/// runs.
pub(crate) fn generate_runs(input: &Path, config: &Config) -> Result<RunSet> {
    let mut reader = csv::Reader::from_path(input)
        .map_err(|e| SortError::read(input, e))?;
    let header = reader.headers()
        .map_err(|e| SortError::read(input, e))?
        .clone();
    let key_index = resolve_key_index(&header, config.key_column())?;

    let mut runs = Vec::new();
    let mut batch: Vec<StringRecord> = Vec::with_capacity(config.batch_size());
    for record in reader.records() {
        let record = record.map_err(|e| SortError::read(input, e))?;
        batch.push(record);
        if batch.len() >= config.batch_size() {
            let full = std::mem::replace(&mut batch, Vec::with_capacity(config.batch_size()));
            runs.push(write_run(sort_batch(full, key_index, config.order()), config)?);
        }
    }
    if !batch.is_empty() {
        runs.push(write_run(sort_batch(batch, key_index, config.order()), config)?);
    }

    Ok(
        RunSet {
            runs,
            header,
            key_index,
        }
    )
}

pub(crate) fn resolve_key_index(header: &StringRecord, key_column: &str) -> Result<usize> {
    let matches: Vec<usize> = header.iter()
        .enumerate()
        .filter(|(_, name)| *name == key_column)
        .map(|(index, _)| index)
        .collect();
    match matches.as_slice() {
        [index] => Ok(*index),
        _ => {
            Err(
                SortError::Schema {
                    column: key_column.to_string(),
                    count: matches.len(),
                    header: header.iter().map(String::from).collect(),
                }
            )
        }
    }
}

/// Persist one sorted batch to a new uniquely named temporary file and return
/// its path. Run files carry no header. The file is flushed before returning;
/// on any error the handle is dropped and therefore closed.
fn write_run(records: Vec<StringRecord>, config: &Config) -> Result<PathBuf> {
    let tmp_file = Builder::new()
        .prefix(config.tmp_prefix())
        .suffix(config.tmp_suffix())
        .tempfile_in(config.tmp())
        .map_err(|e| SortError::resource("create temp file in", config.tmp(), e))?;
    let (run_file, path) = tmp_file.keep()
        .map_err(|e| {
            let path = e.file.path().to_path_buf();
            SortError::resource("persist temp file", &path, e.error)
        })?;

    let mut writer = csv::Writer::from_writer(run_file);
    for record in records {
        writer.write_record(&record)
            .map_err(|e| SortError::write(&path, e))?;
    }
    writer.flush()
        .map_err(|e| SortError::resource("flush", &path, e))?;
    Ok(path)
}
