//! Parallel number surveys
//!
//! This module runs the numeric checks over whole integer ranges. The range
//! is cut into fixed-size chunks that rayon processes in parallel; results
//! are merged in range order, so the output does not depend on scheduling.

use crate::constants::{PROGRESS_INTERVAL, SURVEY_CHUNK_SIZE};
use crate::domain::numbers::armstrong::is_armstrong_number;
use crate::domain::numbers::collatz::{self, CollatzError};
use crate::domain::numbers::perfect_numbers::{self, Classification, PerfectError};
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info};

/// Options for a survey run
#[derive(Clone)]
pub struct SurveyOptions<F = fn(u64, u64)> {
    /// Numbers per parallel task (default: SURVEY_CHUNK_SIZE)
    pub chunk_size: u64,
    /// Progress callback (current, total)
    pub on_progress: Option<F>,
}

impl Default for SurveyOptions<fn(u64, u64)> {
    fn default() -> Self {
        Self {
            chunk_size: SURVEY_CHUNK_SIZE,
            on_progress: None,
        }
    }
}

impl<F> SurveyOptions<F> {
    /// Set the chunk size (clamped to at least 1)
    pub fn with_chunk_size(mut self, chunk_size: u64) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// Set the progress callback
    pub fn with_progress<G>(self, callback: G) -> SurveyOptions<G> {
        SurveyOptions {
            chunk_size: self.chunk_size,
            on_progress: Some(callback),
        }
    }
}

/// Longest Collatz sequence found in a range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollatzRecord {
    pub start: u64,
    pub steps: u32,
}

impl CollatzRecord {
    /// More steps wins; ties go to the smaller start
    fn better(self, other: Self) -> Self {
        if other.steps > self.steps || (other.steps == self.steps && other.start < self.start) {
            other
        } else {
            self
        }
    }
}

/// Classification counts over a range
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassificationSummary {
    pub deficient: u64,
    pub perfect: u64,
    pub abundant: u64,
    /// Perfect numbers found, ascending
    pub perfect_numbers: Vec<u64>,
}

impl ClassificationSummary {
    fn record(&mut self, number: u64, classification: Classification) {
        match classification {
            Classification::Deficient => self.deficient += 1,
            Classification::Perfect => {
                self.perfect += 1;
                self.perfect_numbers.push(number);
            }
            Classification::Abundant => self.abundant += 1,
        }
    }

    fn merge(mut self, other: Self) -> Self {
        self.deficient += other.deficient;
        self.perfect += other.perfect;
        self.abundant += other.abundant;
        self.perfect_numbers.extend(other.perfect_numbers);
        self
    }

    /// Numbers classified
    pub fn total(&self) -> u64 {
        self.deficient + self.perfect + self.abundant
    }
}

// =============================================================================
// Chunked parallel driver
// =============================================================================

/// Number of integers in the range, saturating at u64::MAX
fn range_len(range: &RangeInclusive<u64>) -> u64 {
    let (start, end) = (*range.start(), *range.end());
    if start > end {
        return 0;
    }
    (end - start).saturating_add(1)
}

/// Run `visit` over each chunk of the range in parallel
///
/// Chunk results are returned in range order. Progress is reported roughly
/// every PROGRESS_INTERVAL numbers and once more at completion.
fn survey_chunks<F, T, V>(range: RangeInclusive<u64>, options: SurveyOptions<F>, visit: V) -> Vec<T>
where
    F: Fn(u64, u64) + Sync,
    T: Send,
    V: Fn(RangeInclusive<u64>) -> T + Sync,
{
    let SurveyOptions {
        chunk_size,
        on_progress,
    } = options;
    let chunk_size = chunk_size.max(1);

    let total = range_len(&range);
    let start = *range.start();
    let end = *range.end();
    let chunk_count = total.div_ceil(chunk_size);
    let progress = AtomicU64::new(0);

    debug!(start, end, chunk_size, chunk_count, "survey chunks planned");

    let results = (0..chunk_count)
        .into_par_iter()
        .map(|index| {
            let lo = start + index * chunk_size;
            let hi = lo.saturating_add(chunk_size - 1).min(end);
            let result = visit(lo..=hi);

            if let Some(ref callback) = on_progress {
                let len = hi - lo + 1;
                let before = progress.fetch_add(len, Ordering::Relaxed);
                let after = before + len;
                if after / PROGRESS_INTERVAL > before / PROGRESS_INTERVAL {
                    callback(after, total);
                }
            }
            result
        })
        .collect();

    if let Some(ref callback) = on_progress {
        callback(total, total);
    }
    results
}

// =============================================================================
// Surveys
// =============================================================================

/// All Armstrong numbers in the range, ascending
pub fn armstrong_numbers<F>(range: RangeInclusive<u64>, options: SurveyOptions<F>) -> Vec<u64>
where
    F: Fn(u64, u64) + Sync,
{
    info!(start = *range.start(), end = *range.end(), "armstrong survey started");

    let found: Vec<u64> = survey_chunks(range, options, |chunk| {
        chunk.filter(|&n| is_armstrong_number(n)).collect::<Vec<_>>()
    })
    .into_iter()
    .flatten()
    .collect();

    info!(found = found.len(), "armstrong survey finished");
    found
}

/// Start with the most Collatz steps in the range
///
/// Returns `None` for an empty range. Zero in the range is an error, as is
/// a sequence that overflows u64.
pub fn longest_collatz<F>(
    range: RangeInclusive<u64>,
    options: SurveyOptions<F>,
) -> Result<Option<CollatzRecord>, CollatzError>
where
    F: Fn(u64, u64) + Sync,
{
    if range_len(&range) > 0 && *range.start() == 0 {
        return Err(CollatzError::NotPositive);
    }
    info!(start = *range.start(), end = *range.end(), "collatz survey started");

    let chunk_bests: Vec<Option<CollatzRecord>> = survey_chunks(
        range,
        options,
        |chunk| -> Result<Option<CollatzRecord>, CollatzError> {
            let mut best: Option<CollatzRecord> = None;
            for start in chunk {
                let record = CollatzRecord {
                    start,
                    steps: collatz::steps(start)?,
                };
                best = Some(best.map_or(record, |b| b.better(record)));
            }
            Ok(best)
        },
    )
    .into_iter()
    .collect::<Result<_, CollatzError>>()?;

    let best = chunk_bests
        .into_iter()
        .flatten()
        .reduce(CollatzRecord::better);

    if let Some(record) = best {
        info!(start = record.start, steps = record.steps, "collatz survey finished");
    }
    Ok(best)
}

/// Count deficient, perfect and abundant numbers in the range
pub fn classify_numbers<F>(
    range: RangeInclusive<u64>,
    options: SurveyOptions<F>,
) -> Result<ClassificationSummary, PerfectError>
where
    F: Fn(u64, u64) + Sync,
{
    info!(start = *range.start(), end = *range.end(), "classification survey started");

    let summary = survey_chunks(
        range,
        options,
        |chunk| -> Result<ClassificationSummary, PerfectError> {
            let mut summary = ClassificationSummary::default();
            for number in chunk {
                summary.record(number, perfect_numbers::classify(number)?);
            }
            Ok(summary)
        },
    )
    .into_iter()
    .try_fold(ClassificationSummary::default(), |acc, chunk| {
        chunk.map(|summary| acc.merge(summary))
    })?;

    info!(
        deficient = summary.deficient,
        perfect = summary.perfect,
        abundant = summary.abundant,
        "classification survey finished"
    );
    Ok(summary)
}
