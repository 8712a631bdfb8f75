//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `board_ops.rs` - board state operations and FEN
//! - `patterns.rs` - per-piece move pattern rules
//! - `obstruction.rs` - blocking-piece detection
//! - `check.rs` - check detection and safety filtering
//! - `checkmate.rs` - checkmate search
//! - `proptest.rs` - property-based tests

mod patterns;
