//! Built-in read-only vector tables
//!
//! Suites shipped with the harness. Tables are plain `const` data so
//! they land in read-only program memory on embedded targets.

pub mod aes128;
