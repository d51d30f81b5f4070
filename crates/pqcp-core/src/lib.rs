//! # PQCP Core — Periodic Quasi-Complementary Pair Verification
//!
//! This crate decides whether two binary (±1) sequences of common length
//! L form an (L,4)-periodic quasi-complementary pair: the elementwise sum
//! of their periodic autocorrelation functions must stay within ±4 at
//! every nonzero cyclic shift. Perfect periodic complementary pairs
//! (summed sidelobes identically zero) do not exist at most lengths, so
//! the quasi-complementary bound is the practical target when designing
//! spreading or synchronization sequences.
//!
//! ## Processing Flow
//!
//! ```text
//! "+-++…" ──parse──► BinarySequence ──┐
//!                                     ├──► PACF sum ──► sidelobe check ──► PairVerdict
//! "-++-…" ──parse──► BinarySequence ──┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use pqcp_core::{analyze_pair, AnalyzerConfig, BinarySequence};
//!
//! let a = BinarySequence::parse("++-+").unwrap();
//! let b = BinarySequence::parse("+++-").unwrap();
//! let verdict = analyze_pair(&a, &b, &AnalyzerConfig::default()).unwrap();
//!
//! assert!(verdict.passed);
//! assert_eq!(verdict.max_psl, 0);
//! ```

pub mod error;
pub mod pair_analyzer;
pub mod periodic_autocorrelation;
pub mod report;
pub mod sequence;

pub use error::{VerifyError, VerifyResult};
pub use pair_analyzer::{analyze_pair, AnalyzerConfig, PairVerdict, ShiftRow};
pub use periodic_autocorrelation::{peak_sidelobe_level, periodic_autocorrelation};
pub use sequence::BinarySequence;
