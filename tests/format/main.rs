//! Integration tests for Layer 1: Format
//!
//! Tests for the lexer, parser, and writer of the INI-like text format.

mod writer;
