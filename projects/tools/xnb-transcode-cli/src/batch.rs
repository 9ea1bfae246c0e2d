//! Runs every scanned file through the transcode pipeline.
//!
//! A failing file never stops the batch: its error is recorded as a
//! [`FileFailure`] and processing moves on. Only a missing or unreadable input
//! root aborts the run, before any file is touched.

use crate::config::RunConfig;
use crate::exit_codes;
use crate::scan::{scan, FileEntry, ScanError};
use crate::util::destination_path;
use std::collections::hash_map::{Entry, HashMap};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use xnb_transcode_file_formats_api::pipeline::{transcode_file, FailureStage};
use xnb_transcode_file_formats_api::{ContainerReader, RasterEncoder};

/// A single file that could not be converted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    pub path: PathBuf,
    pub stage: FailureStage,
    pub message: String,
}

/// Aggregate result of a completed batch.
///
/// `succeeded + failures.len() == total` always holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchResult {
    pub succeeded: usize,
    /// Failures in scan order.
    pub failures: Vec<FileFailure>,
    pub total: usize,
}

impl BatchResult {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    fn record(&mut self, outcome: Result<(), FileFailure>) {
        match outcome {
            Ok(()) => self.succeeded += 1,
            Err(failure) => self.failures.push(failure),
        }
    }
}

#[derive(Debug)]
pub enum RunOutcome {
    Completed(BatchResult),
    /// The input root could not be scanned.
    Aborted(ScanError),
}

impl RunOutcome {
    /// The process exit status for this outcome.
    ///
    /// Per-file failures only affect the status when `strict` is set.
    pub fn exit_code(&self, strict: bool) -> i32 {
        match self {
            RunOutcome::Aborted(_) => exit_codes::ABORTED,
            RunOutcome::Completed(result) if strict && result.has_failures() => {
                exit_codes::FAILURES
            }
            RunOutcome::Completed(_) => exit_codes::OK,
        }
    }
}

/// Receives progress as files finish.
///
/// Calls are never concurrent, even for parallel runs. `processed` counts up
/// from 1 to `total` but, for parallel runs, need not follow scan order.
pub trait BatchObserver {
    fn on_file_finished(
        &mut self,
        processed: usize,
        total: usize,
        path: &Path,
        failure: Option<&FileFailure>,
    );
}

/// Reports progress through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingObserver;

impl BatchObserver for LoggingObserver {
    fn on_file_finished(
        &mut self,
        processed: usize,
        total: usize,
        path: &Path,
        failure: Option<&FileFailure>,
    ) {
        match failure {
            None => info!("{processed}/{total} processed: {}", path.display()),
            Some(failure) => error!(
                stage = %failure.stage,
                "{processed}/{total} failed: {}: {}",
                path.display(),
                failure.message
            ),
        }
    }
}

/// Scans `config.input_root` and converts every matching file with the first
/// of `readers` that accepts it, writing through `encoder`.
pub fn run_batch<E, O>(
    config: &RunConfig,
    readers: &[&dyn ContainerReader],
    encoder: &E,
    observer: &mut O,
) -> RunOutcome
where
    E: RasterEncoder,
    O: BatchObserver + Send,
{
    let report = match scan(&config.input_root, &config.extension) {
        Ok(report) => report,
        Err(e) => {
            error!("Aborting: {e}");
            return RunOutcome::Aborted(e);
        }
    };

    if !report.skipped.is_empty() {
        warn!("Skipped {} unreadable paths", report.skipped.len());
    }
    info!(
        "Found {} .{} files under {}",
        report.entries.len(),
        config.extension,
        report.root.display()
    );

    let job = Job { readers, encoder };
    let planned = plan_destinations(
        &report.entries,
        &report.root,
        &config.output_root,
        encoder.extension(),
    );

    let result = if config.parallel {
        process_parallel(&job, &planned, observer)
    } else {
        process_sequential(&job, &planned, observer)
    };

    info!(
        succeeded = result.succeeded,
        failed = result.failed(),
        total = result.total,
        "Batch finished"
    );
    RunOutcome::Completed(result)
}

struct Job<'a, E> {
    readers: &'a [&'a dyn ContainerReader],
    encoder: &'a E,
}

/// A scanned file paired with the output it will be written to.
struct PlannedFile<'a> {
    entry: &'a FileEntry,
    destination: PathBuf,
    /// Earlier entry that already writes `destination`.
    claimed_by: Option<&'a Path>,
}

/// Derives every destination up front.
///
/// Inputs whose names differ only in extension case map to the same output.
/// The first one in scan order keeps the destination; the rest are marked so
/// no two files ever write the same path.
fn plan_destinations<'a>(
    entries: &'a [FileEntry],
    input_root: &Path,
    output_root: &Path,
    extension: &str,
) -> Vec<PlannedFile<'a>> {
    let mut claimed: HashMap<PathBuf, &'a Path> = HashMap::with_capacity(entries.len());

    entries
        .iter()
        .map(|entry| {
            let destination = destination_path(input_root, output_root, entry.path(), extension);
            let claimed_by = match claimed.entry(destination.clone()) {
                Entry::Occupied(owner) => Some(*owner.get()),
                Entry::Vacant(slot) => {
                    slot.insert(entry.path());
                    None
                }
            };
            PlannedFile {
                entry,
                destination,
                claimed_by,
            }
        })
        .collect()
}

impl<E: RasterEncoder> Job<'_, E> {
    fn process(&self, planned: &PlannedFile<'_>) -> Result<(), FileFailure> {
        let source = planned.entry.path();

        if let Some(owner) = planned.claimed_by {
            return Err(FileFailure {
                path: source.to_path_buf(),
                stage: FailureStage::Conflict,
                message: format!(
                    "Destination {} is already written for {}",
                    planned.destination.display(),
                    owner.display()
                ),
            });
        }

        transcode_file(self.readers, self.encoder, source, &planned.destination).map_err(|e| {
            FileFailure {
                path: source.to_path_buf(),
                stage: e.stage(),
                message: e.to_string(),
            }
        })
    }
}

fn process_sequential<E, O>(
    job: &Job<'_, E>,
    planned: &[PlannedFile<'_>],
    observer: &mut O,
) -> BatchResult
where
    E: RasterEncoder,
    O: BatchObserver,
{
    let total = planned.len();
    let mut result = BatchResult {
        total,
        ..Default::default()
    };

    for (index, file) in planned.iter().enumerate() {
        let outcome = job.process(file);
        observer.on_file_finished(index + 1, total, file.entry.path(), outcome.as_ref().err());
        result.record(outcome);
    }
    result
}

#[cfg(feature = "multithreaded")]
fn process_parallel<E, O>(
    job: &Job<'_, E>,
    planned: &[PlannedFile<'_>],
    observer: &mut O,
) -> BatchResult
where
    E: RasterEncoder,
    O: BatchObserver + Send,
{
    use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Mutex, PoisonError};

    let total = planned.len();
    let processed = AtomicUsize::new(0);
    let observer = Mutex::new(observer);

    // `collect` keeps scan order regardless of completion order.
    let outcomes: Vec<Result<(), FileFailure>> = planned
        .par_iter()
        .map(|file| {
            let outcome = job.process(file);
            let mut observer = observer.lock().unwrap_or_else(PoisonError::into_inner);
            let done = processed.fetch_add(1, Ordering::SeqCst) + 1;
            observer.on_file_finished(done, total, file.entry.path(), outcome.as_ref().err());
            outcome
        })
        .collect();

    let mut result = BatchResult {
        total,
        ..Default::default()
    };
    for outcome in outcomes {
        result.record(outcome);
    }
    result
}

#[cfg(not(feature = "multithreaded"))]
fn process_parallel<E, O>(
    job: &Job<'_, E>,
    planned: &[PlannedFile<'_>],
    observer: &mut O,
) -> BatchResult
where
    E: RasterEncoder,
    O: BatchObserver + Send,
{
    warn!("Built without the `multithreaded` feature; processing sequentially");
    process_sequential(job, planned, observer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn failure(name: &str) -> FileFailure {
        FileFailure {
            path: PathBuf::from(name),
            stage: FailureStage::Read,
            message: "bad".into(),
        }
    }

    fn completed(succeeded: usize, failed: usize) -> RunOutcome {
        RunOutcome::Completed(BatchResult {
            succeeded,
            failures: (0..failed).map(|i| failure(&format!("{i}.xnb"))).collect(),
            total: succeeded + failed,
        })
    }

    #[rstest]
    #[case(completed(3, 0), false, exit_codes::OK)]
    #[case(completed(3, 0), true, exit_codes::OK)]
    #[case(completed(0, 0), true, exit_codes::OK)]
    #[case(completed(2, 1), false, exit_codes::OK)]
    #[case(completed(2, 1), true, exit_codes::FAILURES)]
    #[case(RunOutcome::Aborted(ScanError::RootMissing("x".into())), false, exit_codes::ABORTED)]
    #[case(RunOutcome::Aborted(ScanError::RootMissing("x".into())), true, exit_codes::ABORTED)]
    fn exit_codes_follow_outcome(
        #[case] outcome: RunOutcome,
        #[case] strict: bool,
        #[case] expected: i32,
    ) {
        assert_eq!(outcome.exit_code(strict), expected);
    }

    #[test]
    fn colliding_destinations_keep_first_owner() {
        let entries = vec![
            FileEntry::new(PathBuf::from("/in/a/x.xnb")),
            FileEntry::new(PathBuf::from("/in/a/y.xnb")),
            FileEntry::new(PathBuf::from("/in/a/x.XNB")),
            FileEntry::new(PathBuf::from("/in/a/x.Xnb")),
        ];

        let planned = plan_destinations(&entries, Path::new("/in"), Path::new("/out"), "png");

        let destinations: Vec<_> = planned.iter().map(|p| p.destination.clone()).collect();
        assert_eq!(
            destinations,
            vec![
                PathBuf::from("/out/a/x.png"),
                PathBuf::from("/out/a/y.png"),
                PathBuf::from("/out/a/x.png"),
                PathBuf::from("/out/a/x.png"),
            ]
        );
        let owners: Vec<_> = planned.iter().map(|p| p.claimed_by).collect();
        assert_eq!(
            owners,
            vec![
                None,
                None,
                Some(Path::new("/in/a/x.xnb")),
                Some(Path::new("/in/a/x.xnb")),
            ]
        );
    }

    #[test]
    fn record_keeps_order() {
        let mut result = BatchResult::default();
        result.record(Err(failure("b.xnb")));
        result.record(Ok(()));
        result.record(Err(failure("a.xnb")));

        assert_eq!(result.succeeded, 1);
        assert_eq!(result.failed(), 2);
        assert_eq!(result.failures[0].path, PathBuf::from("b.xnb"));
        assert_eq!(result.failures[1].path, PathBuf::from("a.xnb"));
    }
}
