//! Model-View-Intent base traits.
//!
//! ```text
//! Intent ──→ Reducer ──→ Model ──→ View
//!    ↑                             │
//!    └─────────────────────────────┘
//! ```
//!
//! The reducer is the only place transitions happen; it is a pure function
//! `(Model, Intent) -> Model`. Side effects (persistence, logging, input
//! validation) live in the store that drives it.

/// Marker trait for intents: user actions, navigation, and the small set of
/// external signals (connectivity, geolocation, timers).
pub trait Intent: Send + 'static {}

/// Marker trait for model objects: cloneable, comparable, self-contained.
pub trait Model: Clone + PartialEq + Default + Send + 'static {}

/// Pure state transition.
pub trait Reducer {
    type Model: Model;
    type Intent: Intent;

    fn reduce(model: Self::Model, intent: Self::Intent) -> Self::Model;
}
