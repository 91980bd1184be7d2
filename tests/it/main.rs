//! Single test binary entry point.
//!
//! This consolidates all tests into a single binary following matklad's
//! best practices, reducing linking overhead from 3x to 1x.
//!
//! Structure:
//! - helpers: builders and fixtures shared across suites
//! - unit: single-component tests that need the public API
//! - integration: multi-component workflow tests

mod helpers;
mod integration;
