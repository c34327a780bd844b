//! Fallible construction trait.
//!
//! | Pattern | Use When |
//! |---------|----------|
//! | `new()` | Construction always succeeds |
//! | [`TryNew`] | Construction validates its input and may fail |
//! | `TryFrom<T>` | Converting from another type |
//! | `FromStr` | Parsing user text |
//!
//! [`Hour`](crate::Hour) is the main implementor: an hour is a plain
//! integer, but only `0..=24` is meaningful.
//!
//! # Example
//!
//! ```
//! use rolegate_types::{Hour, TryNew};
//!
//! assert!(Hour::try_new(14).is_ok());
//! assert!(Hour::try_new(25).is_err());
//! ```

/// Trait for fallible construction with validation.
///
/// Types implementing `TryNew` should not also expose a plain `new()`
/// that performs the same validation; the `try_` prefix keeps
/// fallibility visible at the call site.
pub trait TryNew {
    /// The error returned when validation fails.
    type Error;

    /// Arguments required for construction (a tuple for several).
    type Args;

    /// Attempts to create a new instance.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` if the arguments violate the type's invariant.
    fn try_new(args: Self::Args) -> Result<Self, Self::Error>
    where
        Self: Sized;
}
