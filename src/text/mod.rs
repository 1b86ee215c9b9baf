//! Text utilities for terminal applications.
//!
//! Small, stateless helpers the terminal UI leans on: MD5 hex digests for
//! credential checks ([`hash`]) and GB2312 pinyin first-letter sort keys for
//! indexed list lookup ([`sort_key`]).

/// MD5 hex digests.
pub mod hash;

/// GB2312 pinyin first-letter sort keys.
pub mod sort_key;
