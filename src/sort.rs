use std::cmp::max;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::{Result, SortError};
use crate::merge::merge_runs;
use crate::order::Order;
use crate::run::{generate_runs, resolve_key_index};

/// Sort a CSV file by a key column
///
/// # Examples
/// ```
/// use std::path::PathBuf;
/// use csv_file_sort::sort::Sort;
///
/// fn sort_by_cpf(input: PathBuf, output: PathBuf, tmp: PathBuf) -> Result<(), csv_file_sort::error::SortError> {
///     let mut csv_sort = Sort::new(input, "cpf", output);
///     // set the directory for intermediate runs. The default is the system temp dir -
///     // std::env::temp_dir(), however, for large files it is recommended to provide a
///     // dedicated directory for run files, preferably on the same file system as the
///     // output result.
///     csv_sort.with_tmp_dir(tmp);
///     csv_sort.sort()
/// }
/// ```
pub struct Sort {
    input: PathBuf,
    output: PathBuf,
    key_column: String,
    tmp: PathBuf,
    order: Order,
    batch_size: usize,
}

impl Sort {
    /// Create a default Sort definition.
    ///
    /// A default Sort definition will use the system temporary directory as
    /// defined by std::env::temp_dir() for intermediate run files.
    /// * the key column must appear exactly once in the input header
    /// * default Order is Asc
    /// * at most 10000 records are held in memory at a time
    pub fn new(input: PathBuf, key_column: &str, output: PathBuf) -> Sort {
        Sort {
            input,
            output,
            key_column: key_column.to_string(),
            tmp: std::env::temp_dir(),
            order: Order::Asc,
            batch_size: 10_000,
        }
    }

    /// Set directory for intermediate run files. By default use std::env::temp_dir()
    /// It is recommended for large files to create a dedicated directory for run files
    /// on the same file system as the output target
    pub fn with_tmp_dir(&mut self, tmp: PathBuf) {
        self.tmp = tmp;
    }

    /// Set [Order]
    pub fn with_order(&mut self, order: Order) {
        self.order = order
    }

    /// Set the maximum number of records sorted in memory at a time. Each full
    /// batch is persisted as one sorted run. Values below 1 are treated as 1.
    pub fn with_batch_size(&mut self, batch_size: usize) {
        self.batch_size = batch_size;
    }

    /// Sort the input file into the output file.
    ///
    /// Generates sorted runs bounded by the batch size, then merges them with
    /// a k-way merge. The output holds the header followed by every input
    /// record, sorted by the key column. The output file is overwritten if it
    /// exists. All intermediate run files are deleted before returning.
    pub fn sort(&self) -> Result<()> {
        let config = self.create_config();
        let run_set = generate_runs(&self.input, &config)?;
        log::info!("Created {} sorted runs for {}", run_set.runs.len(), self.input.display());
        merge_runs(&run_set, &config, &self.output)?;
        log::info!("Sort complete, output: {}", self.output.display());
        Ok(())
    }

    /// Check that the input file is already sorted by the key column.
    ///
    /// Compares adjacent raw key values with the same relation the in-memory
    /// sort uses. Returns false on the first out-of-order pair.
    pub fn check(&self) -> Result<bool> {
        let config = self.create_config();
        let mut reader = csv::Reader::from_path(&self.input)
            .map_err(|e| SortError::read(&self.input, e))?;
        let header = reader.headers()
            .map_err(|e| SortError::read(&self.input, e))?
            .clone();
        let key_index = resolve_key_index(&header, config.key_column())?;

        let mut previous: Option<String> = None;
        for record in reader.records() {
            let record = record.map_err(|e| SortError::read(&self.input, e))?;
            let current = record[key_index].to_string();
            if let Some(previous) = previous {
                let in_order = match config.order() {
                    Order::Asc => previous <= current,
                    Order::Desc => previous >= current,
                };
                if !in_order {
                    return Ok(false);
                }
            }
            previous = Some(current);
        }
        Ok(true)
    }

    fn create_config(&self) -> Config {
        Config::new(
            self.tmp.clone(),
            "run-".to_string(),
            ".csv".to_string(),
            self.key_column.clone(),
            self.order.clone(),
            max(self.batch_size, 1),
        )
    }
}
