//! Animal registry domain types.
//!
//! The registry stores one record per animal kept in the park. Writes go
//! through [`AnimalDraft`], which validates content before it reaches a
//! repository, so adapters never see an empty name or a nonsense age.

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

/// Longest accepted name or species designation, in characters.
pub const MAX_NAME_LEN: usize = 64;

/// Upper bound on a plausible age in years.
///
/// Generous on purpose: some of the park's reptiles are very old, but a
/// five-digit age is always a data-entry mistake.
pub const MAX_AGE_YEARS: i32 = 300;

/// A registered animal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animal {
    /// Primary key (UUID v4, assigned by the repository).
    pub id: Uuid,
    /// Individual name, e.g. "Dino".
    pub name: String,
    /// Species designation, e.g. "Velociraptor".
    pub species: String,
    /// Age in years.
    pub age: i32,
    /// Record creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Validation errors returned when constructing an [`AnimalDraft`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AnimalValidationError {
    /// Name is empty after trimming whitespace.
    #[error("name must not be empty")]
    EmptyName,
    /// Name exceeds [`MAX_NAME_LEN`] characters.
    #[error("name must be at most {MAX_NAME_LEN} characters")]
    NameTooLong,
    /// Species is empty after trimming whitespace.
    #[error("species must not be empty")]
    EmptySpecies,
    /// Species exceeds [`MAX_NAME_LEN`] characters.
    #[error("species must be at most {MAX_NAME_LEN} characters")]
    SpeciesTooLong,
    /// Age is negative.
    #[error("age must not be negative")]
    NegativeAge,
    /// Age exceeds [`MAX_AGE_YEARS`].
    #[error("age must be at most {MAX_AGE_YEARS} years")]
    ImplausibleAge,
}

/// Validated content for creating or replacing an animal record.
///
/// # Examples
/// ```
/// use cretaceous_api::domain::AnimalDraft;
///
/// let draft = AnimalDraft::new("Dino", "Velociraptor", 7).expect("valid draft");
/// assert_eq!(draft.name(), "Dino");
/// assert!(AnimalDraft::new("", "Velociraptor", 7).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimalDraft {
    name: String,
    species: String,
    age: i32,
}

impl AnimalDraft {
    /// Construct a draft after validating its parts.
    ///
    /// Surrounding whitespace on `name` and `species` is trimmed before
    /// validation and storage.
    pub fn new(
        name: impl Into<String>,
        species: impl Into<String>,
        age: i32,
    ) -> Result<Self, AnimalValidationError> {
        let name = name.into().trim().to_owned();
        let species = species.into().trim().to_owned();

        if name.is_empty() {
            return Err(AnimalValidationError::EmptyName);
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(AnimalValidationError::NameTooLong);
        }
        if species.is_empty() {
            return Err(AnimalValidationError::EmptySpecies);
        }
        if species.chars().count() > MAX_NAME_LEN {
            return Err(AnimalValidationError::SpeciesTooLong);
        }
        if age < 0 {
            return Err(AnimalValidationError::NegativeAge);
        }
        if age > MAX_AGE_YEARS {
            return Err(AnimalValidationError::ImplausibleAge);
        }

        Ok(Self { name, species, age })
    }

    /// Borrow the validated name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Borrow the validated species.
    pub fn species(&self) -> &str {
        &self.species
    }

    /// Age in years.
    pub fn age(&self) -> i32 {
        self.age
    }
}

/// Filter criteria for listing animals.
///
/// All criteria are optional and combined with logical AND. Name and
/// species match exactly but case-insensitively; `minimum_age` is
/// inclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnimalFilter {
    species: Option<String>,
    name: Option<String>,
    minimum_age: Option<i32>,
}

impl AnimalFilter {
    /// Restrict results to a species.
    #[must_use]
    pub fn with_species(mut self, species: impl Into<String>) -> Self {
        self.species = Some(species.into());
        self
    }

    /// Restrict results to animals with a given name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Restrict results to animals at least `age` years old.
    #[must_use]
    pub fn with_minimum_age(mut self, age: i32) -> Self {
        self.minimum_age = Some(age);
        self
    }

    /// Species criterion, if any.
    pub fn species(&self) -> Option<&str> {
        self.species.as_deref()
    }

    /// Name criterion, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Minimum-age criterion, if any.
    pub fn minimum_age(&self) -> Option<i32> {
        self.minimum_age
    }

    /// Whether an animal satisfies every criterion in this filter.
    ///
    /// # Examples
    /// ```
    /// use cretaceous_api::domain::AnimalFilter;
    ///
    /// let filter = AnimalFilter::default().with_species("velociraptor");
    /// assert!(filter.species().is_some());
    /// ```
    pub fn matches(&self, animal: &Animal) -> bool {
        if let Some(species) = &self.species
            && !animal.species.eq_ignore_ascii_case(species)
        {
            return false;
        }
        if let Some(name) = &self.name
            && !animal.name.eq_ignore_ascii_case(name)
        {
            return false;
        }
        if let Some(minimum_age) = self.minimum_age
            && animal.age < minimum_age
        {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn animal(name: &str, species: &str, age: i32) -> Animal {
        Animal {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            species: species.to_owned(),
            age,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[rstest]
    fn draft_trims_and_accepts_valid_input() {
        let draft = AnimalDraft::new("  Dino ", " Velociraptor ", 7).expect("valid draft");
        assert_eq!(draft.name(), "Dino");
        assert_eq!(draft.species(), "Velociraptor");
        assert_eq!(draft.age(), 7);
    }

    #[rstest]
    #[case("", "Velociraptor", 7, AnimalValidationError::EmptyName)]
    #[case("   ", "Velociraptor", 7, AnimalValidationError::EmptyName)]
    #[case("Dino", "", 7, AnimalValidationError::EmptySpecies)]
    #[case("Dino", "Velociraptor", -1, AnimalValidationError::NegativeAge)]
    #[case("Dino", "Velociraptor", 301, AnimalValidationError::ImplausibleAge)]
    fn draft_rejects_invalid_input(
        #[case] name: &str,
        #[case] species: &str,
        #[case] age: i32,
        #[case] expected: AnimalValidationError,
    ) {
        assert_eq!(AnimalDraft::new(name, species, age), Err(expected));
    }

    #[rstest]
    fn draft_rejects_overlong_fields() {
        let long = "x".repeat(MAX_NAME_LEN + 1);
        assert_eq!(
            AnimalDraft::new(long.clone(), "Velociraptor", 7),
            Err(AnimalValidationError::NameTooLong)
        );
        assert_eq!(
            AnimalDraft::new("Dino", long, 7),
            Err(AnimalValidationError::SpeciesTooLong)
        );
    }

    #[rstest]
    fn draft_accepts_boundary_values() {
        let longest = "x".repeat(MAX_NAME_LEN);
        assert!(AnimalDraft::new(longest.clone(), longest, 0).is_ok());
        assert!(AnimalDraft::new("Methuselah", "Tuatara", MAX_AGE_YEARS).is_ok());
    }

    #[rstest]
    fn empty_filter_matches_everything() {
        assert!(AnimalFilter::default().matches(&animal("Dino", "Velociraptor", 7)));
    }

    #[rstest]
    fn filter_matches_case_insensitively() {
        let filter = AnimalFilter::default()
            .with_species("VELOCIRAPTOR")
            .with_name("dino");
        assert!(filter.matches(&animal("Dino", "Velociraptor", 7)));
    }

    #[rstest]
    fn filter_minimum_age_is_inclusive() {
        let filter = AnimalFilter::default().with_minimum_age(7);
        assert!(filter.matches(&animal("Dino", "Velociraptor", 7)));
        assert!(!filter.matches(&animal("Junior", "Velociraptor", 6)));
    }

    #[rstest]
    fn filter_criteria_combine_with_and() {
        let filter = AnimalFilter::default()
            .with_species("Velociraptor")
            .with_minimum_age(10);
        assert!(!filter.matches(&animal("Dino", "Velociraptor", 7)));
        assert!(!filter.matches(&animal("Old Tom", "Triceratops", 40)));
        assert!(filter.matches(&animal("Elder", "Velociraptor", 12)));
    }
}
