//! Structs and logic to parse profile database files.
//!
//! This module provides the [DatabaseParserBuilder] and [DatabaseParser]
//! structs, which offer methods to read a profile database with different
//! configurations.

use crate::model::{Marker, Profile, ProfileIndex};
use crate::parser::byte_parser::ByteParser;
use crate::parser::byte_source::ByteSource;
use crate::parser::in_memory_byte_source::InMemoryByteSource;
use crate::model::IndexError;
use crate::parser::parsing_error::ParsingError;
use std::collections::HashSet;
use std::iter::FusedIterator;
use std::path::Path;
use tracing::{debug, info};

/// Upper bound for preallocating markers, as counts come from the input
const MAX_PREALLOCATED_MARKERS: usize = 64;

// =#========================================================================#=
// DUPLICATE POLICY
// =#========================================================================#=
/// How the parser handles a person whose full name was already read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Insert anyway; the duplicate ends up in the right subtree of the
    /// first person with that name. This is the default.
    #[default]
    Allow,

    /// Fail with [InvalidEntry](crate::parser::ParsingErrorType::InvalidEntry)
    /// pointing at the second entry.
    Reject,
}

// =#========================================================================#=
// DATABASE PARSER BUILDER
// =#========================================================================#=
/// Builder for configuring and creating a [DatabaseParser].
///
/// # Configuration Options
/// * **Duplicates**: [`with_duplicate_policy()`](Self::with_duplicate_policy)
///   or the shorthand [`reject_duplicates()`](Self::reject_duplicates)
/// * **Trailing content**: [`with_strict_trailing()`](Self::with_strict_trailing)
///   makes content after the last announced person an error
///   (ignored by default)
///
/// Calling [`build()`](Self::build) reads the header (reference sequences
/// and number of people).
///
/// # Example
/// ```
/// use strdb::database::DatabaseParserBuilder;
///
/// let input = "AGATAGAT\nTATC\n1\nJane Doe 1 AGAT 2\n";
/// let parser = DatabaseParserBuilder::for_str(input)
///     .reject_duplicates()
///     .with_strict_trailing()
///     .build()?;
/// assert_eq!(parser.num_people(), 1);
///
/// let index = parser.into_index()?;
/// assert!(index.contains("Doe, Jane"));
/// # Ok::<(), strdb::parser::ParsingError>(())
/// ```
pub struct DatabaseParserBuilder<S: ByteSource> {
    byte_parser: ByteParser<S>,
    duplicate_policy: DuplicatePolicy,
    strict_trailing: bool,
}

// ============================================================================
// Building - InMemory-ByteSource specific (pub)
// ============================================================================
impl DatabaseParserBuilder<InMemoryByteSource> {
    /// Creates a new builder reading the entire file at `path` into memory.
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read
    pub fn for_file<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        Ok(Self::for_byte_parser(ByteParser::from_file(path)?))
    }

    /// Creates a new builder for a database given as string.
    pub fn for_str(input: &str) -> Self {
        Self::for_byte_parser(ByteParser::for_str(input))
    }
}

// ============================================================================
// Building - Generic (pub)
// ============================================================================
impl<S: ByteSource> DatabaseParserBuilder<S> {
    /// Creates a new builder on top of the given [ByteParser], with defaults:
    /// duplicates allowed, trailing content ignored.
    pub fn for_byte_parser(byte_parser: ByteParser<S>) -> Self {
        Self {
            byte_parser,
            duplicate_policy: DuplicatePolicy::default(),
            strict_trailing: false,
        }
    }

    /// Configure how duplicate full names are handled.
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    /// Configure the parser to fail on duplicate full names.
    pub fn reject_duplicates(self) -> Self {
        self.with_duplicate_policy(DuplicatePolicy::Reject)
    }

    /// Configure the parser to fail if content follows the last person.
    pub fn with_strict_trailing(mut self) -> Self {
        self.strict_trailing = true;
        self
    }

    /// Reads the header and returns the initialized [DatabaseParser].
    ///
    /// # Errors
    /// Returns a [ParsingError] if the header is incomplete or the number
    /// of people is not a non-negative integer.
    pub fn build(self) -> Result<DatabaseParser<S>, ParsingError> {
        let mut byte_parser = self.byte_parser;

        let first_sequence = byte_parser.parse_line()?;
        let second_sequence = byte_parser.parse_line()?;
        let num_people = byte_parser.parse_number()?;
        debug!(
            first_len = first_sequence.len(),
            second_len = second_sequence.len(),
            num_people,
            "read database header"
        );

        Ok(DatabaseParser {
            byte_parser,
            duplicate_policy: self.duplicate_policy,
            strict_trailing: self.strict_trailing,
            first_sequence,
            second_sequence,
            num_people,
            num_parsed: 0,
            seen_names: HashSet::new(),
            finished: false,
        })
    }
}

// =#========================================================================#=
// DATABASE PARSER
// =#========================================================================#=
/// Parser of a profile database, created by a [DatabaseParserBuilder].
///
/// The header has already been read. People can be retrieved one at a time
/// with [`next_person()`](Self::next_person) (or by iterating), or all
/// (remaining) at once as [ProfileIndex] with
/// [`into_index()`](Self::into_index). The duplicate policy and strict
/// trailing mode apply to all three.
///
/// After the first error the parser is finished and yields no more people.
pub struct DatabaseParser<S: ByteSource> {
    byte_parser: ByteParser<S>,
    duplicate_policy: DuplicatePolicy,
    strict_trailing: bool,
    first_sequence: String,
    second_sequence: String,
    num_people: usize,
    num_parsed: usize,
    /// Names returned so far, only tracked under [DuplicatePolicy::Reject]
    seen_names: HashSet<String>,
    finished: bool,
}

impl<S: ByteSource> DatabaseParser<S> {
    /// Returns the first reference sequence.
    pub fn first_sequence(&self) -> &str {
        &self.first_sequence
    }

    /// Returns the second reference sequence.
    pub fn second_sequence(&self) -> &str {
        &self.second_sequence
    }

    /// Returns the number of people announced in the header.
    pub fn num_people(&self) -> usize {
        self.num_people
    }

    /// Parses the next person, returning their full name (`"Last, First"`)
    /// and profile, or `None` once all announced people were read.
    ///
    /// # Errors
    /// Returns a [ParsingError] if the entry is incomplete, a count is not
    /// a non-negative integer, the name was already returned under
    /// [DuplicatePolicy::Reject], or (in strict mode) content follows the
    /// last announced person.
    pub fn next_person(&mut self) -> Result<Option<(String, Profile)>, ParsingError> {
        if self.finished {
            return Ok(None);
        }

        let result = self.parse_next_person();
        if !matches!(result, Ok(Some(_))) {
            self.finished = true;
        }
        result
    }

    /// Parses all remaining people into a [ProfileIndex] holding the two
    /// reference sequences, inserting them in input order.
    ///
    /// # Errors
    /// See [`next_person()`](Self::next_person).
    pub fn into_index(mut self) -> Result<ProfileIndex, ParsingError> {
        let mut index = ProfileIndex::with_sequences(
            std::mem::take(&mut self.first_sequence),
            std::mem::take(&mut self.second_sequence),
        );

        while let Some((name, profile)) = self.next_person()? {
            index.insert(name, profile);
        }

        info!(profiles = index.len(), "loaded profile database");
        Ok(index)
    }

    fn parse_next_person(&mut self) -> Result<Option<(String, Profile)>, ParsingError> {
        if self.num_parsed >= self.num_people {
            self.check_trailing()?;
            return Ok(None);
        }

        self.byte_parser.skip_whitespace();
        let start = self.byte_parser.position();
        let first_name = self.byte_parser.parse_token()?;
        let last_name = self.byte_parser.parse_token()?;
        let profile = self.parse_profile()?;
        let name = format!("{last_name}, {first_name}");

        if self.duplicate_policy == DuplicatePolicy::Reject
            && !self.seen_names.insert(name.clone())
        {
            self.byte_parser.set_position(start);
            return Err(ParsingError::invalid_entry(
                &self.byte_parser,
                IndexError::DuplicateKey(name),
            ));
        }

        self.num_parsed += 1;
        Ok(Some((name, profile)))
    }

    /// Checks for content after the last announced person.
    fn check_trailing(&mut self) -> Result<(), ParsingError> {
        self.byte_parser.skip_whitespace();
        if self.byte_parser.is_eof() {
            return Ok(());
        }

        if self.strict_trailing {
            return Err(ParsingError::trailing_content(&self.byte_parser));
        }
        debug!(
            position = self.byte_parser.position(),
            "ignoring content after last profile"
        );
        Ok(())
    }

    /// Parses marker count followed by that many `name occurrences` pairs.
    fn parse_profile(&mut self) -> Result<Profile, ParsingError> {
        let num_markers = self.byte_parser.parse_number()?;

        let mut markers = Vec::with_capacity(num_markers.min(MAX_PREALLOCATED_MARKERS));
        for _ in 0..num_markers {
            let name = self.byte_parser.parse_token()?;
            let occurrences = self.byte_parser.parse_number()?;
            markers.push(Marker::new(name, occurrences));
        }

        Ok(Profile::new(markers))
    }
}

impl<S: ByteSource> Iterator for DatabaseParser<S> {
    type Item = Result<(String, Profile), ParsingError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_person().transpose()
    }
}

impl<S: ByteSource> FusedIterator for DatabaseParser<S> {}
