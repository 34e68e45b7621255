//! Derived queries answered by walking a freshly built index.
//!
//! Each query comes in a suffix array and a suffix tree flavor with the
//! same result, so either structure can be benchmarked against the other
//! or chosen per workload.

pub mod common;
pub mod repeated;
