//! Job details record and the field edit-state machine.
//!
//! The optimizer form edits one field at a time. That invariant is
//! structural: [`EditState`] is a tagged variant holding at most one
//! [`JobField`], not a set of per-field booleans.
//!
//! Edits apply to the in-memory [`JobDetails`] immediately as the user
//! types. Save and cancel only toggle the editing flag; cancel does
//! not revert typed text.

/// Identifier for one editable field of the job details form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobField {
    CompanyName,
    JobRole,
    JobDescription,
}

impl JobField {
    /// All fields in form order.
    pub const ALL: [Self; 3] = [Self::CompanyName, Self::JobRole, Self::JobDescription];

    /// Display label for the field row.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CompanyName => "Company Name",
            Self::JobRole => "Job Role",
            Self::JobDescription => "Job Description",
        }
    }

    /// Whether the field is edited in a textarea. Enter commits only
    /// single-line fields.
    #[must_use]
    pub const fn is_multiline(self) -> bool {
        matches!(self, Self::JobDescription)
    }
}

/// The three-field record describing a target job posting.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobDetails {
    pub company_name: String,
    pub job_role: String,
    pub job_description: String,
}

impl JobDetails {
    /// Sample content the optimizer page starts from.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            company_name: "Tech Solutions Inc.".into(),
            job_role: "Senior Frontend Developer".into(),
            job_description: "Developing and maintaining web applications...".into(),
        }
    }

    /// Current value of `field`.
    #[must_use]
    pub fn get(&self, field: JobField) -> &str {
        match field {
            JobField::CompanyName => &self.company_name,
            JobField::JobRole => &self.job_role,
            JobField::JobDescription => &self.job_description,
        }
    }

    /// Overwrite `field` with `value`. Applied immediately on input;
    /// there is no draft buffer.
    pub fn set(&mut self, field: JobField, value: impl Into<String>) {
        let slot = match field {
            JobField::CompanyName => &mut self.company_name,
            JobField::JobRole => &mut self.job_role,
            JobField::JobDescription => &mut self.job_description,
        };
        *slot = value.into();
    }
}

/// Which field, if any, is currently being edited.
///
/// At most one field is editable at a time; selecting another field
/// implicitly deselects the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditState {
    /// Every field is read-only.
    #[default]
    Idle,
    /// Exactly one field shows an input.
    Editing(JobField),
}

impl EditState {
    /// Start editing `field`, deselecting any previously editing field.
    pub fn begin(&mut self, field: JobField) {
        *self = Self::Editing(field);
    }

    /// Save action: return every field to read-only. Values were
    /// already applied as typed, so there is nothing else to do.
    pub fn commit(&mut self) {
        *self = Self::Idle;
    }

    /// Escape action: leave editing mode. Typed text is not reverted.
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }

    /// The field currently being edited, if any.
    #[must_use]
    pub const fn editing(self) -> Option<JobField> {
        match self {
            Self::Idle => None,
            Self::Editing(field) => Some(field),
        }
    }

    /// Whether `field` is the one being edited.
    #[must_use]
    pub fn is_editing(self, field: JobField) -> bool {
        self.editing() == Some(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_contains_every_field() {
        // If you add a JobField variant, update ALL and this count.
        assert_eq!(JobField::ALL.len(), 3);
        let mut seen = std::collections::HashSet::new();
        for field in JobField::ALL {
            assert!(seen.insert(field), "duplicate field in ALL");
        }
    }

    #[test]
    fn only_description_is_multiline() {
        assert!(JobField::JobDescription.is_multiline());
        assert!(!JobField::CompanyName.is_multiline());
        assert!(!JobField::JobRole.is_multiline());
    }

    #[test]
    fn at_most_one_field_editing_across_any_sequence() {
        let mut state = EditState::default();
        assert_eq!(state.editing(), None);

        // Arbitrary begin/begin/commit/begin/cancel sequence: the state
        // can never name more than one field.
        state.begin(JobField::CompanyName);
        assert!(state.is_editing(JobField::CompanyName));
        assert!(!state.is_editing(JobField::JobRole));

        // Selecting a second field implicitly deselects the first.
        state.begin(JobField::JobRole);
        assert!(state.is_editing(JobField::JobRole));
        assert!(!state.is_editing(JobField::CompanyName));

        state.commit();
        assert_eq!(state, EditState::Idle);

        state.begin(JobField::JobDescription);
        state.cancel();
        assert_eq!(state.editing(), None);
    }

    #[test]
    fn edits_apply_immediately_and_cancel_does_not_revert() {
        let mut details = JobDetails::sample();
        let mut state = EditState::default();

        state.begin(JobField::JobRole);
        details.set(JobField::JobRole, "Staff Engineer");
        // Visible as committed even before save.
        assert_eq!(details.get(JobField::JobRole), "Staff Engineer");

        // Escape clears editing mode but leaves the value as typed.
        state.cancel();
        assert_eq!(state, EditState::Idle);
        assert_eq!(details.get(JobField::JobRole), "Staff Engineer");
    }

    #[test]
    fn enter_commit_returns_field_to_read_only() {
        let mut details = JobDetails::sample();
        let mut state = EditState::default();

        state.begin(JobField::JobRole);
        details.set(JobField::JobRole, "Backend Developer");
        state.commit();

        assert_eq!(state.editing(), None);
        assert_eq!(details.get(JobField::JobRole), "Backend Developer");
    }

    #[test]
    fn sample_details_have_every_field_populated() {
        let details = JobDetails::sample();
        for field in JobField::ALL {
            assert!(!details.get(field).is_empty(), "{field:?} is empty");
        }
    }

    #[test]
    fn set_overwrites_wholesale() {
        let mut details = JobDetails::default();
        details.set(JobField::CompanyName, "Acme");
        details.set(JobField::CompanyName, "Initech");
        assert_eq!(details.company_name, "Initech");
        // Other fields untouched.
        assert_eq!(details.job_role, "");
    }
}
