//! This crate implements an external merge sort for CSV files - delimited record
//! files with a header row that are too large to sort in memory.
//!
//! The sort runs in two phases. The input is first split into sorted "runs" - batches
//! of records bounded by a configurable limit, each sorted in memory and persisted to
//! a temporary file. The runs are then combined by a k-way merge that holds one record
//! per run in a priority heap, so memory use stays bounded by the batch limit during
//! the first phase and by the number of runs during the second. Parsing and escaping
//! of the CSV format itself is delegated to the [csv](https://docs.rs/csv) crate.
//!
//! # Examples
//! ```
//! use std::path::PathBuf;
//! use csv_file_sort::sort::Sort;
//! use csv_file_sort::order::Order;
//!
//! // sort a CSV file by the "id" column, descending
//! fn sort_by_id(input: PathBuf, output: PathBuf, tmp: PathBuf) -> Result<(), csv_file_sort::error::SortError> {
//!     let mut csv_sort = Sort::new(input, "id", output);
//!     // set the directory for intermediate runs. The default is the system temp dir -
//!     // std::env::temp_dir(), however, for large files it is recommended to provide a
//!     // dedicated directory, preferably on the same file system as the output result.
//!     csv_sort.with_tmp_dir(tmp);
//!     csv_sort.with_order(Order::Desc);
//!     // at most 10000 records are held in memory at a time
//!     csv_sort.with_batch_size(10_000);
//!     csv_sort.sort()
//! }
//! ```
//!

pub(crate) mod batch_sort;
pub(crate) mod key;
pub(crate) mod config;
pub(crate) mod run;
pub(crate) mod run_file;
pub(crate) mod merge;

pub mod sort;
pub mod order;
pub mod error;
