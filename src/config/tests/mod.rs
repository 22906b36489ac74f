//! Config module tests

#[cfg(test)]
mod preferences_tests;
