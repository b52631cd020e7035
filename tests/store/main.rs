//! Integration tests for Layer 2: Store
//!
//! Tests for option definition, typed access, codecs, and strictness.

mod access;
