//! Unit tests for the simulation layer.
