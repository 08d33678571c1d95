//! Timeline view components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Timeline` owns the reveal controller and the viewport signal; each
//! `StageRowView` renders one row of the draw tree and owns that stage's
//! intersection observer.

pub mod stage_row;
pub mod timeline;
