//! An ordered dictionary over `(label, type)` keys for Rust.
//!
//! This crate provides [`Dictionary`], a store of [`Record`]s ordered by
//! [`Key`], and the engine underneath it, [`OrderedTree`], a binary search
//! tree whose nodes link back to their parents:
//!
//! - [`get`](Dictionary::get), [`put`](Dictionary::put) and [`remove`](Dictionary::remove)
//! - [`successor`](Dictionary::successor) and [`predecessor`](Dictionary::predecessor),
//!   which step through the parent links instead of rescanning from the root
//! - [`smallest`](Dictionary::smallest) and [`largest`](Dictionary::largest)
//! - [`prefix_scan`](Dictionary::prefix_scan), every record whose label starts with a prefix
//!
//! # Example
//!
//! ```
//! use lexi_tree::{Dictionary, Key, Record};
//!
//! let mut dictionary = Dictionary::new();
//! dictionary.put(Record::new(Key::new("Owl", 1), "A nocturnal bird.")).unwrap();
//! dictionary.put(Record::new(Key::new("owl", 3), "hoot.wav")).unwrap();
//! dictionary.put(Record::new(Key::new("ant", 1), "A small insect.")).unwrap();
//!
//! // Labels are lowercased, so this is the first record's key.
//! let owl = Key::new("OWL", 1);
//! assert_eq!(dictionary.get(&owl).map(|record| record.data()), Some("A nocturnal bird."));
//!
//! // Keys order by label, then by type.
//! let next = dictionary.successor(&owl).unwrap();
//! assert_eq!(next.data(), "hoot.wav");
//! assert_eq!(dictionary.predecessor(&owl).unwrap().key().label(), "ant");
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Errors on mutation, `None` on lookup** - inserting a present key or removing an
//!   absent one is an [`Error`]; a lookup miss is simply `None`
//! - **Seed text and commands** - [`Dictionary::from_seed`] and [`Command`] cover the
//!   line formats of the interactive dictionary this engine was built for
//!
//! # Implementation
//!
//! Nodes live in an arena and refer to each other by index, which gives every
//! node a parent link without reference counting. The tree is never rebalanced,
//! so its height depends on insertion order: sorted input degrades to a chain.
//! Removing a node with two children moves its in-order successor's entry into
//! it and unlinks the successor's node instead.

#![no_std]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod dictionary;
mod error;
mod key;
mod keyed;
mod ordered_tree;
mod raw;
mod record;

pub use dictionary::{Command, Dictionary, Reply};
pub use error::{Error, Result};
pub use key::{Key, RecordType};
pub use keyed::Keyed;
pub use ordered_tree::{Iter, OrderedTree};
pub use record::Record;
