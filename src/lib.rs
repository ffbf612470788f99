//! # attrsort
//!
//! `attrsort` is a small sorting toolkit for tabular records. It pairs a
//! generic, comparator-driven sort engine with an adapter that sorts rows by
//! a named column, in either direction, with an algorithm picked at runtime.
//!
//! ## Key Features
//!
//! - **Pluggable algorithms**: Quicksort (Hoare partition), merge sort, shell sort,
//!   selection sort, a base-10 LSD radix sort, and the standard library's `sort_by`.
//! - **Typed selectors**: Fields, algorithms and directions are closed enums. Names
//!   such as `"Wind Speed"` or `"merge"` are parsed once, and unknown names come back
//!   as [`SortError`] values before any record is touched.
//! - **Radix by attribute**: Numeric fields with an integer key can be radix sorted.
//!   Records are reordered by an index permutation, stably and without cloning.
//! - **Timing**: Every adapter sort returns a [`SortReport`] with the elapsed time.
//!
//! ## Usage
//!
//! ### Sorting Records
//!
//! ```rust
//! use attrsort::prelude::*;
//!
//! let mut records = vec![
//!     WeatherRecord { temperature: 20.0, humidity: 0.81, ..Default::default() },
//!     WeatherRecord { temperature: 5.5, humidity: 0.92, ..Default::default() },
//!     WeatherRecord { temperature: 30.0, humidity: 0.40, ..Default::default() },
//! ];
//!
//! sort_by_name(&mut records, "Temperature", "Quick", "Descending").unwrap();
//! assert_eq!(records[0].temperature, 30.0);
//!
//! radix_sort_records(&mut records, WeatherField::Humidity).unwrap();
//! assert_eq!(records[0].humidity, 0.40);
//!
//! let err = sort_by_name(&mut records, "nonexistent", "merge", "ascending").unwrap_err();
//! assert_eq!(err, SortError::UnknownField("nonexistent".to_string()));
//! ```
//!
//! ### Using the Engine Directly
//!
//! The engine works on any slice with any comparator.
//!
//! ```rust
//! use attrsort::algo::{merge_sort, shellsort};
//!
//! let mut words = vec!["pear", "fig", "apple", "kiwi"];
//! merge_sort(&mut words, |a, b| a.len().cmp(&b.len()));
//! assert_eq!(words, vec!["fig", "pear", "kiwi", "apple"]);
//!
//! shellsort(&mut words, |a, b| b.cmp(a));
//! assert_eq!(words, vec!["pear", "kiwi", "fig", "apple"]);
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Quicksort**: O(n log n) on average, O(n^2) on sorted input since the pivot is
//!   always the first element of the range.
//! - **Merge sort**: O(n log n), stable, O(n) scratch per merge.
//! - **Shell sort**: Between O(n log^2 n) and O(n^2) for halving gaps.
//! - **Selection sort**: Always exactly n(n-1)/2 comparisons.
//! - **Radix sort**: O(d * (n + 10)) for d decimal digits in the largest key.
//!
//! Sorting is synchronous. Running it off the caller's main thread is left to the caller.

pub mod algo;
pub mod attribute;
pub mod core;
pub mod error;
pub mod weather;

pub use crate::attribute::{
    SortReport, radix_sort_records, resolve_comparator, sort, sort_by_name, sort_by_radix,
};
pub use crate::core::{Algorithm, Direction, Record, SortRequest};
pub use crate::error::{SortError, SortResult};
pub use crate::weather::{WeatherField, WeatherRecord};

pub mod prelude {
    pub use crate::algo::{
        merge_sort, mergesort, quick_sort, quicksort, radix_sort, selectionsort, shellsort,
    };
    pub use crate::attribute::{
        SortReport, apply_direction, radix_sort_records, resolve_comparator, sort, sort_by_comparator,
        sort_by_name, sort_by_radix,
    };
    pub use crate::core::{Algorithm, Direction, Record, SortRequest};
    pub use crate::error::{SortError, SortResult};
    pub use crate::weather::{WeatherField, WeatherRecord};
}
