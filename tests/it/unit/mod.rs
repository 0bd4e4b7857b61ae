//! Unit tests for ideaboard.

mod document_tests;
mod hit_testing_tests;
