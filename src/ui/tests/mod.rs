//! UI module tests

#[cfg(test)]
mod chrome_tests;
#[cfg(test)]
mod page_tests;
#[cfg(test)]
mod render_tests;
