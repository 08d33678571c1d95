//! Browser collaborators for the timeline core.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module isolates one browser capability behind a plain function so the
//! components stay testable without a DOM. Outside `hydrate` builds they fall
//! back to fixed answers: wide viewport, no intersection observation, built-in
//! stage list.

pub mod intersection;
pub mod stage_source;
pub mod viewport;
