//! Shared utilities.
//!
//! Test helpers for writing throwaway landmine scripts.
