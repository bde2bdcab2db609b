//! Staged preprocessing pipeline.
//!
//! The pipeline composes four statically-dispatched stages — normalize,
//! script-filter, segment, stopword-remove — threading typed artifacts
//! between them and notifying an observer at each stage boundary.

pub mod artifacts;
pub mod observer;
pub mod runner;
pub mod traits;
