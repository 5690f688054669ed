//! Property-based tests for insertion and counting
