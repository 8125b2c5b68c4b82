//! Quill Index - per-column sorted index for the quill query engine.
//!
//! This crate provides:
//!
//! - `Border`: one endpoint of a range query (bound value plus an
//!   inclusive/exclusive flag)
//! - `SortedIndex`: an ascending `(key, row-id)` array with stable
//!   insertion and binary-search range queries
//!
//! # Example
//!
//! ```rust
//! use quill_index::{Border, SortedIndex};
//!
//! let mut index = SortedIndex::new();
//! index.insert(b"b".to_vec(), 0);
//! index.insert(b"a".to_vec(), 1);
//! index.insert(b"b".to_vec(), 2);
//!
//! // Point query: both borders inclusive on the same bound.
//! let bound = Border::inclusive(b"b".to_vec());
//! let ids: Vec<u64> = index.range(&bound, &bound).iter().map(|(_, id)| *id).collect();
//! assert_eq!(ids, vec![0, 2]);
//! ```

#![no_std]

extern crate alloc;

mod border;
mod sorted;

pub use border::Border;
pub use sorted::SortedIndex;
