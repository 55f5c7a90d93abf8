//! Profile database parser.
//!
//! This module reads the plain-text profile database format into a
//! [ProfileIndex]. Use [DatabaseParserBuilder] for full control, or the
//! quick functions with default settings:
//! * [`parse_file`] - parses a database file
//! * [`parse_str`] - parses a database given as string
//!
//! # Format
//! ```text
//! <first reference sequence>
//! <second reference sequence>
//! <number of people p>
//! p times: <first name> <last name> <k> k times: <marker> <occurrences>
//! ```
//! The reference sequences each occupy one full line. Everything after the
//! header is whitespace separated, so a person may span several lines.
//! People are stored under the key `"<last name>, <first name>"`.
//!
//! Example:
//! ```text
//! AGATAGATTATCTATC
//! GATAAGATAGAT
//! 2
//! Jane Doe 2 AGAT 4 TATC 2
//! Rick Roe 1 GATA 3
//! ```

pub mod parser;

pub use parser::{DatabaseParser, DatabaseParserBuilder, DuplicatePolicy};

use crate::model::ProfileIndex;
use crate::parser::ParsingError;
use std::path::Path;

// ============================================================================
// QUICK PARSING API (pub)
// ============================================================================
/// Parses a profile database file with default settings.
///
/// # Arguments
/// * `path` - Path to the file (accepting `&str`, `String`, `Path`, or `PathBuf`)
///
/// # Returns
/// * [ProfileIndex] - All people of the file with the two reference sequences
/// * [ParsingError] - If reading the file fails or its format is invalid
///
/// # Example
/// ```no_run
/// use strdb::database::parse_file;
///
/// let index = parse_file("suspects.txt")?;
/// println!("Loaded {} profiles", index.len());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<ProfileIndex, ParsingError> {
    DatabaseParserBuilder::for_file(path)?.build()?.into_index()
}

/// Parses a profile database given as string with default settings.
///
/// # Example
/// ```
/// use strdb::database::parse_str;
///
/// let index = parse_str("AGAT\nTATC\n1\nJane Doe 1 AGAT 1")?;
/// assert_eq!(index.len(), 1);
/// assert_eq!(index.first_sequence(), "AGAT");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse_str<S: AsRef<str>>(input: S) -> Result<ProfileIndex, ParsingError> {
    DatabaseParserBuilder::for_str(input.as_ref())
        .build()?
        .into_index()
}
