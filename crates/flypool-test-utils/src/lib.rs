//! Test utilities for flypool development.
//!
//! Provides a sample record layout ([`NodeLayout`]) exercising every field
//! type, deterministic create/free workloads ([`ChurnScript`]) with a
//! reference model of live indices ([`LiveModel`]), and byte pattern
//! helpers for raw record copies.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod churn;
pub mod fixtures;

pub use churn::{ChurnScript, LiveModel, Op};
pub use fixtures::{pattern, Node, NodeLayout};
