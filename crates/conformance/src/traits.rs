use narrowbar_core::{PeopleDirectory, TermSyntax};

/// Result type for a single conformance check.
pub type CheckResult = Result<(), String>;

/// The collaborators under test.
///
/// The directory must know every user in [`crate::fixtures::roster`] with
/// the same guest, deactivated and inaccessible markings as
/// [`crate::fixtures::directory`], and the grammar must accept terms
/// naming those users.
pub trait TestableSearch {
    fn syntax(&self) -> &dyn TermSyntax;

    fn people(&self) -> &dyn PeopleDirectory;
}
