use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fs;
use std::path::Path;

use csv::StringRecord;

use crate::config::Config;
use crate::error::{Result, SortError};
use crate::key::MergeKey;
use crate::run::RunSet;
use crate::run_file::RunFile;

/// One record waiting in the merge frontier. Ordered by normalized key, then
/// by originating run index, so equal keys are emitted in increasing run
/// order. Wrapped in [Reverse] on the heap to get minimum-first behavior out
/// of the standard max-heap.
struct HeapEntry {
    key: MergeKey,
    source: usize,
    record: StringRecord,
}

impl Eq for HeapEntry {}

impl PartialEq<Self> for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.source == other.source
    }
}

impl PartialOrd<Self> for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key).then(self.source.cmp(&other.source))
    }
}

/// Merge all runs into the final output.
///
/// Opens every run, seeds a minimum heap with each run's first record, writes
/// the header, then repeatedly pops the globally smallest entry, writes its
/// record unmodified and refills the heap from the entry's source run. The
/// heap holds at most one record per open run at all times. All run files are
/// deleted once the merge loop ends, whether it completed or failed.
pub(crate) fn merge_runs(run_set: &RunSet, config: &Config, output: &Path) -> Result<()> {
    log::info!("Merging {} sorted runs into {}", run_set.runs.len(), output.display());
    let mut sources = Vec::with_capacity(run_set.runs.len());
    for path in &run_set.runs {
        sources.push(RunFile::open(path.clone())?);
    }

    let merge_result = merge_sources(&mut sources, run_set, config, output);

    // runs are consumed exactly once; remove them on the error path as well
    let mut remove_result = Ok(());
    for source in &sources {
        if let Err(e) = fs::remove_file(source.path()) {
            if remove_result.is_ok() {
                remove_result = Err(SortError::resource("remove", source.path(), e));
            }
        }
    }
    merge_result.and(remove_result)
}

fn merge_sources(sources: &mut [RunFile], run_set: &RunSet, config: &Config, output: &Path) -> Result<()> {
    let mut frontier = BinaryHeap::with_capacity(sources.len());
    for (source, run) in sources.iter_mut().enumerate() {
        if let Some(record) = run.next_record()? {
            frontier.push(Reverse(entry(record, source, run_set.key_index, config)));
        }
    }

    let mut writer = csv::Writer::from_path(output)
        .map_err(|e| SortError::write(output, e))?;
    writer.write_record(&run_set.header)
        .map_err(|e| SortError::write(output, e))?;

    while let Some(Reverse(HeapEntry { source, record, .. })) = frontier.pop() {
        writer.write_record(&record)
            .map_err(|e| SortError::write(output, e))?;
        if let Some(next) = sources[source].next_record()? {
            frontier.push(Reverse(entry(next, source, run_set.key_index, config)));
        }
    }
    writer.flush()
        .map_err(|e| SortError::resource("flush", output, e))?;
    Ok(())
}

fn entry(record: StringRecord, source: usize, key_index: usize, config: &Config) -> HeapEntry {
    HeapEntry {
        key: MergeKey::new(&record[key_index], config.order()),
        source,
        record,
    }
}
