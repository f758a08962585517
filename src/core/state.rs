//! Core State trait for session states.
//!
//! Anything recorded in a [`StateHistory`](super::StateHistory) implements
//! this trait. Methods are pure inspections of an immutable value.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for states tracked by the session.
///
/// # Required Traits
///
/// - `Clone`: states are copied into history records
/// - `PartialEq`: transitions that do not change the state are not recorded
/// - `Debug`: states show up in logs and test failures
/// - `Serialize` + `Deserialize`: history can be exported for inspection
///
/// # Example
///
/// ```rust
/// use splitbill::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Panel {
///     Closed,
///     Open,
/// }
///
/// impl State for Panel {
///     fn name(&self) -> &str {
///         match self {
///             Self::Closed => "Closed",
///             Self::Open => "Open",
///         }
///     }
///
///     fn is_idle(&self) -> bool {
///         matches!(self, Self::Closed)
///     }
/// }
///
/// assert!(Panel::Closed.is_idle());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is the resting state nothing is focused in.
    ///
    /// Default implementation returns `false`.
    fn is_idle(&self) -> bool {
        false
    }
}
