//! DNA profile of a person.

use crate::matching;
use crate::model::Marker;

// =#========================================================================#=
// PROFILE
// =#========================================================================#=
/// The STR markers of one person together with the flag whether the person
/// is of interest.
///
/// The flag starts out `false`. Classification ([`Profile::classify()`])
/// only ever sets it to `true`, never back.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Profile {
    /// Markers in input order
    markers: Vec<Marker>,
    /// Whether this profile was flagged as of interest
    of_interest: bool,
}

impl Profile {
    /// Creates a new, unflagged profile.
    ///
    /// # Arguments
    /// * `markers` - The markers of the person, in input order
    pub fn new(markers: Vec<Marker>) -> Self {
        Self {
            markers,
            of_interest: false,
        }
    }

    /// Returns the markers of this profile.
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Returns the number of markers.
    pub fn num_markers(&self) -> usize {
        self.markers.len()
    }

    /// Returns whether this profile is flagged as of interest.
    pub fn is_of_interest(&self) -> bool {
        self.of_interest
    }

    /// Sets the interest flag explicitly.
    pub fn set_of_interest(&mut self, of_interest: bool) {
        self.of_interest = of_interest;
    }

    /// Flags this profile if at least half (rounded up) of its markers match
    /// the two reference sequences. An already flagged profile stays flagged.
    ///
    /// # Returns
    /// Whether the profile is of interest afterwards.
    ///
    /// # Example
    /// ```
    /// use strdb::model::{Marker, Profile};
    ///
    /// let mut profile = Profile::new(vec![Marker::new("A", 3), Marker::new("B", 9)]);
    /// assert!(!profile.classify("AB", "C"));
    /// assert!(profile.classify("AAB", "A"));
    /// // Never reset by a later non-matching pass
    /// assert!(profile.classify("", ""));
    /// ```
    pub fn classify(&mut self, first: &str, second: &str) -> bool {
        if matching::meets_threshold(&self.markers, first, second) {
            self.of_interest = true;
        }
        self.of_interest
    }
}

impl FromIterator<Marker> for Profile {
    fn from_iter<I: IntoIterator<Item = Marker>>(iter: I) -> Self {
        Profile::new(iter.into_iter().collect())
    }
}
