//! strdb is a library to index STR DNA profiles in a binary search tree and
//! to flag the profiles matching two reference sequences.
//!
//! Core functionality provided:
//! - Index: [ProfileIndex] is an (unbalanced) binary search tree mapping full
//!   names (`"Last, First"`) to [Profile]s, supporting insertion, deletion,
//!   counting and level-order collection of flagged/unflagged profiles.
//! - Classification: a profile is *of interest* if at least half (rounded
//!   up) of its STR markers occur exactly as often in the two reference
//!   sequences as observed. See [crate::matching].
//! - Cleanup: [`ProfileIndex::prune_unmarked()`] removes all profiles not of
//!   interest.
//! - Loading: profile databases in a simple plain-text format are read with
//!   [crate::database].
//!
//! Limitations:
//! - The tree is not balanced; sorted input yields a degenerate tree. All
//!   traversals are iterative, so this costs time but not stack.
//! - Names are assumed to be distinct (see [`ProfileIndex::try_insert()`]
//!   to enforce it).
//! - Single-threaded use only.
//!
//! # Usage patterns
//! 1. Quick functions load a database with default settings, see
//!    [load_database_file] and [load_database_str].
//! 2. Configure a parser using
//!    [DatabaseParserBuilder](crate::database::DatabaseParserBuilder), or
//!    fill a [ProfileIndex] yourself.
//!
//! ## Example
//! ```
//! use strdb::load_database_str;
//!
//! let database = "\
//! AGATAGATAGAT
//! TATCTATC
//! 3
//! Jane Doe 2 AGAT 3 TATC 2
//! Rick Roe 2 AGAT 1 TATC 5
//! Ann Bee 1 TATC 2
//! ";
//!
//! let mut index = load_database_str(database)?;
//! index.classify();
//! assert_eq!(index.count_matching(true), 2);
//! assert_eq!(index.collect_by_flag(false), vec!["Roe, Rick"]);
//!
//! index.prune_unmarked();
//! let names: Vec<&str> = index.iter().map(|node| node.key()).collect();
//! assert_eq!(names, vec!["Bee, Ann", "Doe, Jane"]);
//! # Ok::<(), strdb::parser::ParsingError>(())
//! ```

pub mod database;
pub mod matching;
pub mod model;
pub mod parser;

pub use crate::model::{Marker, Profile, ProfileIndex};

use crate::parser::ParsingError;
use std::path::Path;

// ============================================================================
// Quick Database API
// ============================================================================
/// Loads a profile database file using default settings.
///
/// See [`database::parse_file`] for full documentation.
pub fn load_database_file<P: AsRef<Path>>(path: P) -> Result<ProfileIndex, ParsingError> {
    database::parse_file(path)
}

/// Loads a profile database given as string using default settings.
///
/// See [`database::parse_str`] for full documentation.
pub fn load_database_str<S: AsRef<str>>(input: S) -> Result<ProfileIndex, ParsingError> {
    database::parse_str(input)
}
