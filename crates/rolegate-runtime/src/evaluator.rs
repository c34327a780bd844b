//! One round of the pipeline: validate, then decide.
//!
//! ```text
//! (role, action, hour) ──validate──► ValidatedRequest ──policy──► Verdict
//!          │                                                        │
//!          └──── ValidationError ────► Outcome::Invalid             └──► Outcome::Decided
//! ```

use crate::validation::{validate, ValidatedRequest, ValidationError};
use rolegate_auth::{PermissionPolicy, Verdict};
use tracing::debug;

/// Result of one evaluated round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The input was not well-formed; no rule was consulted.
    Invalid(ValidationError),
    /// The request was well-formed and the policy ruled on it.
    Decided {
        request: ValidatedRequest,
        verdict: Verdict,
    },
}

impl Outcome {
    /// Exit status for command mode.
    pub const EXIT_GRANTED: i32 = 0;
    pub const EXIT_INVALID: i32 = 1;
    pub const EXIT_DENIED: i32 = 2;

    /// The line shown to the user.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Invalid(err) => err.to_string(),
            Self::Decided { verdict, .. } => verdict.to_string(),
        }
    }

    /// Returns `true` only for a granted request.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Decided { verdict, .. } if verdict.is_allowed())
    }

    /// Maps the outcome to `0` (granted), `1` (invalid) or `2` (denied).
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Invalid(_) => Self::EXIT_INVALID,
            Self::Decided { verdict, .. } if verdict.is_allowed() => Self::EXIT_GRANTED,
            Self::Decided { .. } => Self::EXIT_DENIED,
        }
    }
}

/// Runs validation and permission evaluation against a policy.
///
/// # Example
///
/// ```
/// use rolegate_runtime::{DefaultPolicy, Evaluator};
///
/// let evaluator = Evaluator::new(DefaultPolicy::new());
///
/// let outcome = evaluator.check("viewer", "read", 10);
/// assert!(outcome.is_allowed());
/// assert_eq!(
///     outcome.message(),
///     "Acción permitida viewer. Verifico sus permisos de viewer, accion de read a las 10 a.m."
/// );
///
/// assert_eq!(evaluator.check("viewer", "read", 20).exit_code(), 2);
/// assert_eq!(evaluator.check("viewer", "fly", 20).exit_code(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Evaluator<P> {
    policy: P,
}

impl<P: PermissionPolicy> Evaluator<P> {
    /// Creates an evaluator over `policy`.
    pub fn new(policy: P) -> Self {
        Self { policy }
    }

    /// Returns the underlying policy.
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Decides a request that already passed validation.
    pub fn evaluate(&self, validated: &ValidatedRequest) -> Verdict {
        let verdict = self.policy.evaluate(&validated.request);
        debug!(
            role = %validated.request.role,
            action = %validated.request.action,
            hour = validated.request.hour.value(),
            status = verdict.status_str(),
            axis = verdict.denial().map(|d| d.axis()),
            "Evaluated request"
        );
        verdict
    }

    /// Validates raw input and, if well-formed, decides it.
    pub fn check(&self, role: &str, action: &str, hour: i64) -> Outcome {
        match validate(role, action, hour) {
            Ok(request) => {
                let verdict = self.evaluate(&request);
                Outcome::Decided { request, verdict }
            }
            Err(err) => {
                debug!(field = err.field(), error = %err, "Rejected malformed request");
                Outcome::Invalid(err)
            }
        }
    }
}
