//! Integration tests for dirusage.

mod util;

mod arg_tests;
mod capacity_tests;
mod size_tests;
