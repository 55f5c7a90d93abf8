//! STR marker of a DNA profile.

// =#========================================================================#=
// MARKER
// =#========================================================================#=
/// A short tandem repeat (STR) marker: a short DNA motif (e.g. `AGAT`)
/// together with the number of times it was observed for a person.
///
/// Markers are immutable after construction.
///
/// # Example
/// ```
/// use strdb::model::Marker;
///
/// let marker = Marker::new("AGAT", 5);
/// assert_eq!(marker.name(), "AGAT");
/// assert_eq!(marker.occurrences(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Marker {
    /// Motif of the repeat
    name: String,
    /// Observed number of (non-overlapping) occurrences
    occurrences: usize,
}

impl Marker {
    /// Creates a new marker.
    ///
    /// # Arguments
    /// * `name` - The repeated motif
    /// * `occurrences` - How often the motif was observed
    pub fn new(name: impl Into<String>, occurrences: usize) -> Self {
        Self {
            name: name.into(),
            occurrences,
        }
    }

    /// Returns the motif of this marker.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the observed number of occurrences.
    pub fn occurrences(&self) -> usize {
        self.occurrences
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.name, self.occurrences)
    }
}
