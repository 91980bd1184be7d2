//! Multi-component workflow tests.

mod loader_tests;
mod pagination_tests;
