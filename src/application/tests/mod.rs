//! Unit tests for the application lifecycle module.
