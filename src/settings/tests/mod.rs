//! Settings module tests

#[cfg(test)]
mod controller_tests;
