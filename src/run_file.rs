use std::fs::File;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter};

use crate::error::{Result, SortError};

/// A sorted run opened for a single read-to-exhaustion pass during the merge.
pub(crate) struct RunFile {
    path: PathBuf,
    records: StringRecordsIntoIter<File>,
}

impl RunFile {
    pub(crate) fn open(path: PathBuf) -> Result<RunFile> {
        // run files carry records only, no header
        let reader = ReaderBuilder::new()
            .has_headers(false)
            .from_path(&path)
            .map_err(|e| SortError::read(&path, e))?;
        Ok(
            RunFile {
                records: reader.into_records(),
                path,
            }
        )
    }

    pub(crate) fn next_record(&mut self) -> Result<Option<StringRecord>> {
        match self.records.next() {
            Some(Ok(record)) => Ok(Some(record)),
            Some(Err(e)) => Err(SortError::read(&self.path, e)),
            None => Ok(None),
        }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }
}
