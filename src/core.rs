//! Core traits and selector types for attrsort.
//!
//! This module defines:
//! - [`Record`]: The trait a row type implements so its fields can be sorted by name.
//! - [`Algorithm`] and [`Direction`]: The closed sets of dispatch keys.
//! - [`SortRequest`]: One parsed (field, algorithm, direction) triple.

use crate::error::{SortError, SortResult};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A total-order function over two records.
pub type Comparator<R> = fn(&R, &R) -> Ordering;

/// Extracts the integer radix key of one record.
///
/// Keys may come out negative (e.g. a sub-zero temperature); the radix path
/// rejects those with [`SortError::InvalidInput`].
pub type KeyExtractor<R> = fn(&R) -> i64;

/// A trait for reading named fields of a tabular row.
///
/// The adapter never constructs or owns records; it only compares them and
/// reads integer keys through the functions returned here.
///
/// # Examples
///
/// ```
/// use attrsort::core::{Comparator, KeyExtractor, Record};
/// use attrsort::SortError;
/// use std::fmt;
/// use std::str::FromStr;
///
/// struct Reading {
///     celsius: f64,
/// }
///
/// #[derive(Debug, Clone, Copy)]
/// struct Celsius;
///
/// impl fmt::Display for Celsius {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         f.write_str("celsius")
///     }
/// }
///
/// impl FromStr for Celsius {
///     type Err = SortError;
///
///     fn from_str(s: &str) -> Result<Self, SortError> {
///         match s {
///             "celsius" => Ok(Celsius),
///             other => Err(SortError::UnknownField(other.to_string())),
///         }
///     }
/// }
///
/// impl Record for Reading {
///     type Field = Celsius;
///
///     fn comparator(_: Celsius) -> Comparator<Self> {
///         |a, b| a.celsius.total_cmp(&b.celsius)
///     }
///
///     fn radix_key(_: Celsius) -> Option<KeyExtractor<Self>> {
///         let key: KeyExtractor<Self> = |r| r.celsius as i64;
///         Some(key)
///     }
/// }
/// ```
pub trait Record: Sized {
    /// Selector naming one sortable attribute.
    type Field: Copy + fmt::Debug + fmt::Display + FromStr<Err = SortError>;

    /// Returns the ascending comparator for `field`.
    fn comparator(field: Self::Field) -> Comparator<Self>;

    /// Returns the integer key extractor for `field`, or `None` when the
    /// field has no integer representation.
    fn radix_key(field: Self::Field) -> Option<KeyExtractor<Self>>;
}

/// Sort order requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    /// Applies this direction to an ascending ordering.
    #[inline(always)]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Ascending => "ascending",
            Direction::Descending => "descending",
        })
    }
}

impl FromStr for Direction {
    type Err = SortError;

    fn from_str(s: &str) -> SortResult<Self> {
        match normalize_name(s).as_str() {
            "ascending" | "asc" => Ok(Direction::Ascending),
            "descending" | "desc" => Ok(Direction::Descending),
            _ => Err(SortError::InvalidInput(format!("unknown direction: {s}"))),
        }
    }
}

/// Sorting algorithm selector.
///
/// `Library` delegates to the standard library's stable `sort_by`. Parallel
/// sorting is left to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    /// Recursion depth grows linearly on already sorted input, so large
    /// presorted slices can overflow the stack. Prefer `Merge` or `Library`
    /// for those.
    Quick,
    Merge,
    Shell,
    Selection,
    Radix,
    Library,
}

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Quick,
        Algorithm::Merge,
        Algorithm::Shell,
        Algorithm::Selection,
        Algorithm::Radix,
        Algorithm::Library,
    ];

    /// The algorithms that order records through a comparator.
    pub const COMPARISON: [Algorithm; 5] = [
        Algorithm::Quick,
        Algorithm::Merge,
        Algorithm::Shell,
        Algorithm::Selection,
        Algorithm::Library,
    ];

    /// Whether equal elements keep their input order.
    pub fn is_stable(self) -> bool {
        matches!(self, Algorithm::Merge | Algorithm::Radix | Algorithm::Library)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Algorithm::Quick => "quick",
            Algorithm::Merge => "merge",
            Algorithm::Shell => "shell",
            Algorithm::Selection => "selection",
            Algorithm::Radix => "radix",
            Algorithm::Library => "library",
        })
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    fn from_str(s: &str) -> SortResult<Self> {
        match normalize_name(s).as_str() {
            "quick" | "quicksort" => Ok(Algorithm::Quick),
            "merge" | "mergesort" => Ok(Algorithm::Merge),
            "shell" | "shellsort" => Ok(Algorithm::Shell),
            "selection" | "selectionsort" => Ok(Algorithm::Selection),
            "radix" | "radixsort" => Ok(Algorithm::Radix),
            "sort" | "default" | "library" => Ok(Algorithm::Library),
            _ => Err(SortError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// One sort invocation: which field, which algorithm, which order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SortRequest<F> {
    pub field: F,
    pub algorithm: Algorithm,
    #[cfg_attr(feature = "serde", serde(default))]
    pub direction: Direction,
}

impl<F> SortRequest<F> {
    pub fn new(field: F, algorithm: Algorithm, direction: Direction) -> Self {
        Self {
            field,
            algorithm,
            direction,
        }
    }
}

impl<F: FromStr<Err = SortError>> SortRequest<F> {
    /// Resolves the three selector names, field first.
    pub fn parse(field: &str, algorithm: &str, direction: &str) -> SortResult<Self> {
        Ok(Self {
            field: field.parse()?,
            algorithm: algorithm.parse()?,
            direction: direction.parse()?,
        })
    }
}

/// Lowercases a selector name and drops spaces, `_` and `-`, so that
/// "Wind Speed", "wind_speed" and "windspeed" resolve to the same key.
pub(crate) fn normalize_name(name: &str) -> String {
    name.trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}
