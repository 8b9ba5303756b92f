//! Property-based tests for the synchronizer and ignore list.
