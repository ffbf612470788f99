//! Sorting records by a named attribute.
//!
//! The adapter turns a (field, algorithm, direction) triple into one run of
//! the [sort engine](crate::algo) over a caller-owned slice of [`Record`]s.
//! Comparison algorithms use the field's comparator. [`Algorithm::Radix`]
//! extracts one integer key per record, radix sorts `(key, index)` pairs and
//! applies the resulting permutation, so records are never cloned.
//!
//! Radix keys are lossy: the extractor truncates, so records with distinct
//! field values can share a key. Records that share a key keep their input
//! order.

use crate::algo::{
    apply_permutation, merge_sort, quick_sort, radix_sort_by_key, selectionsort, shellsort,
};
use crate::core::{Algorithm, Comparator, Direction, Record, SortRequest};
use crate::error::{SortError, SortResult};
use std::cmp::Ordering;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// What one sort invocation did and how long it took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortReport<F> {
    pub field: F,
    pub algorithm: Algorithm,
    pub direction: Direction,
    pub len: usize,
    pub elapsed: Duration,
}

/// Sorts `records` by `field` with the chosen algorithm and direction.
///
/// This is the main entry point. On error the records are left unmodified.
///
/// # Errors
///
/// - [`SortError::UnknownField`] if `algorithm` is [`Algorithm::Radix`] and
///   the field has no integer key.
/// - [`SortError::InvalidInput`] if a radix key comes out negative.
///
/// # Examples
///
/// ```
/// use attrsort::prelude::*;
///
/// let mut records = vec![
///     WeatherRecord { temperature: 20.0, ..Default::default() },
///     WeatherRecord { temperature: 5.5, ..Default::default() },
/// ];
///
/// let report = sort(
///     &mut records,
///     WeatherField::Temperature,
///     Algorithm::Merge,
///     Direction::Ascending,
/// )
/// .unwrap();
///
/// assert_eq!(records[0].temperature, 5.5);
/// assert_eq!(report.len, 2);
/// ```
pub fn sort<R: Record>(
    records: &mut [R],
    field: R::Field,
    algorithm: Algorithm,
    direction: Direction,
) -> SortResult<SortReport<R::Field>> {
    debug!(
        %field,
        %algorithm,
        %direction,
        len = records.len(),
        "sorting records"
    );

    let start = Instant::now();
    sort_by_comparator(records, field, algorithm, direction)?;
    let elapsed = start.elapsed();

    debug!(?elapsed, "sort finished");

    Ok(SortReport {
        field,
        algorithm,
        direction,
        len: records.len(),
        elapsed,
    })
}

/// Like [`sort`], but resolves the three selectors from their names first.
///
/// Names are matched case-insensitively with spaces, `_` and `-` ignored,
/// so `"Wind Speed"`, `"wind_speed"` and `"windspeed"` are the same field.
///
/// # Errors
///
/// [`SortError::UnknownField`] or [`SortError::UnknownAlgorithm`] for an
/// unrecognized name, checked before any record is touched, plus everything
/// [`sort`] reports.
pub fn sort_by_name<R: Record>(
    records: &mut [R],
    field: &str,
    algorithm: &str,
    direction: &str,
) -> SortResult<SortReport<R::Field>> {
    let request = SortRequest::<R::Field>::parse(field, algorithm, direction)
        .inspect_err(|err| warn!(%err, "rejected sort request"))?;
    request.apply(records)
}

impl<F: Copy> SortRequest<F> {
    /// Runs this request over `records`. See [`sort`].
    pub fn apply<R: Record<Field = F>>(&self, records: &mut [R]) -> SortResult<SortReport<F>> {
        sort(records, self.field, self.algorithm, self.direction)
    }
}

/// Looks up the ascending comparator for a field given by name.
///
/// # Errors
///
/// [`SortError::UnknownField`] if no field has that name.
pub fn resolve_comparator<R: Record>(field: &str) -> SortResult<Comparator<R>> {
    let field: R::Field = field
        .parse()
        .inspect_err(|err| warn!(%err, "no comparator for field"))?;
    Ok(R::comparator(field))
}

/// Returns `cmp` for ascending order, or its reverse for descending order.
pub fn apply_direction<R>(cmp: Comparator<R>, direction: Direction) -> impl Fn(&R, &R) -> Ordering {
    move |a, b| direction.apply(cmp(a, b))
}

/// Runs the selected algorithm without timing or logging.
///
/// [`Algorithm::Radix`] is forwarded to [`sort_by_radix`].
pub fn sort_by_comparator<R: Record>(
    records: &mut [R],
    field: R::Field,
    algorithm: Algorithm,
    direction: Direction,
) -> SortResult<()> {
    let cmp = apply_direction(R::comparator(field), direction);

    match algorithm {
        Algorithm::Quick => quick_sort(records, cmp),
        Algorithm::Merge => merge_sort(records, cmp),
        Algorithm::Shell => shellsort(records, cmp),
        Algorithm::Selection => selectionsort(records, cmp),
        Algorithm::Library => records.sort_by(cmp),
        Algorithm::Radix => return sort_by_radix(records, field, direction),
    }

    Ok(())
}

/// Radix sorts `records` ascending by the integer key of `field`.
///
/// # Errors
///
/// See [`sort_by_radix`].
pub fn radix_sort_records<R: Record>(records: &mut [R], field: R::Field) -> SortResult<()> {
    sort_by_radix(records, field, Direction::Ascending)
}

/// Radix sorts `records` by the integer key of `field`.
///
/// Stable in both directions: records with equal keys stay in input order.
///
/// # Errors
///
/// - [`SortError::UnknownField`] if the field has no integer key.
/// - [`SortError::InvalidInput`] if any record's key is negative.
///
/// The records are unmodified in both cases.
pub fn sort_by_radix<R: Record>(
    records: &mut [R],
    field: R::Field,
    direction: Direction,
) -> SortResult<()> {
    let Some(key) = R::radix_key(field) else {
        warn!(%field, "field has no radix key");
        return Err(SortError::UnknownField(format!(
            "{field} has no integer key for radix sort"
        )));
    };

    let mut pairs = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let value = key(record);
            u64::try_from(value).map(|k| (k, index)).map_err(|_| {
                warn!(%field, index, value, "negative radix key");
                SortError::InvalidInput(format!(
                    "{field} key {value} of record {index} is negative"
                ))
            })
        })
        .collect::<SortResult<Vec<(u64, usize)>>>()?;

    radix_sort_by_key(&mut pairs, |&(k, _)| k);

    if direction == Direction::Descending {
        // Flip the key groups but keep input order inside each group.
        pairs.reverse();
        pairs
            .chunk_by_mut(|a, b| a.0 == b.0)
            .for_each(|group| group.reverse());
    }

    apply_permutation(records, pairs.into_iter().map(|(_, index)| index).collect());
    Ok(())
}
