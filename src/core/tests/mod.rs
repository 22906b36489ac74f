//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Catalog filter and search tests
//! - Form validation tests
//! - Slider and accordion state tests
//! - Counter animation tests
