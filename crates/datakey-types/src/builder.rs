//! The [`ResettableBuilder`] trait for builders that can be reused.

/// A builder that can be cleared, or seeded with every field of an existing
/// value of the type it produces.
///
/// Implement this only where copying an existing value's fields is legitimate.
/// Builders of identity-bearing values, whose ids must be declared exactly
/// once, leave it unimplemented so the template path cannot be expressed.
pub trait ResettableBuilder<T>: Sized {
    /// Replace every field of this builder with the fields of `template`.
    fn from_template(self, template: &T) -> Self;

    /// Clear every field, returning the builder to its initial state.
    fn reset(self) -> Self;
}
