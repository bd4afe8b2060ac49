//! Shared utilities for the Showcase backend.
//!
//! This crate provides common functionality used across all other crates:
//! - Cryptographic utilities (hashing, token generation, constant-time comparison)
//! - Common field validation logic

pub mod crypto;
pub mod validation;
