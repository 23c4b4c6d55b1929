//! Unit tests for dialogue-graph-cli, organized by module.
//!
//! Tests are BDD-style with Given/When/Then comments and descriptive names.
