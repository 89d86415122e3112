//! Recap engine subsystem
//!
//! Consumes a raw record batch and answers screen queries over it.
//!
//! # Pipeline (strict order)
//!
//! 1. Group/accumulate raw records by subject key
//! 2. Filter the grouped set (declared filters AND free-text search)
//! 3. Sort the filtered set (stable projection from canonical order)
//! 4. Cut the requested page window
//!
//! Everything is synchronous and deterministic: same batch + same query
//! = same page. The canonical grouped set is never mutated by a query.

mod engine;
mod errors;
mod filters;
mod grouping;
mod highlight;
mod pager;
mod query;
mod result;
mod sorter;

pub use engine::RecapEngine;
pub use errors::{RecapError, RecapResult};
pub use highlight::{contains_ci, highlight, Highlight, Span};
pub use pager::{page_count, visible_page_numbers};
pub use query::{RecapQuery, SortDirection, SortKey, SortSpec};
pub use result::{Page, RecapRow};
