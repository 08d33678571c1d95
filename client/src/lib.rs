//! # client
//!
//! Leptos components for the pipeline timeline, rendered to HTML by the host
//! (`ssr`) and mounted live in the browser (`hydrate`).
//!
//! The `timeline` crate decides layout and reveal state; this crate supplies
//! the browser collaborators it needs: a `matchMedia` breakpoint signal, one
//! `IntersectionObserver` per stage, and the stage list the host embedded in
//! the page. Without the `hydrate` feature every browser hook is absent and
//! the timeline renders fully revealed.

pub mod app;
pub mod components;
pub mod util;
