//! Derivative-free solvers for Wayfind objectives.
//!
//! Solvers here only see an [`Objective`]: a box to start in and a cost to
//! minimize. They never look at what the cost means.
//!
//! [`Objective`]: wayfind_core::Objective

pub mod optimization;
