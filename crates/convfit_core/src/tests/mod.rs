//! Integration tests for the convergence analysis pipeline
//!
//! Tests are organized by topic:
//! - `fit` - Power-law fitting and its algebraic properties
//! - `analysis` - The series-to-fits pipeline and its error taxonomy

mod analysis;
