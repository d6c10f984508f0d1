//! Chart data components.

pub mod degree_flow;
