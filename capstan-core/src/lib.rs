//! Capstan Core
//!
//! Core types and abstractions for the Capstan pipeline-job reconciler.
//!
//! This crate contains:
//! - Domain types: the declared definition, the host-persisted record, and
//!   mirrors of the remote server's job state
//! - Codec: the fixed-shape configuration document encoder/extractor
//! - Diagnostics: the ordered warning/error list returned to the host

pub mod codec;
pub mod diagnostics;
pub mod domain;
