// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`alert`]: Alert types ([`AlertRecord`](alert::AlertRecord),
//!   [`AlertKind`](alert::AlertKind), [`HistoryCapacity`](alert::HistoryCapacity))
//! - [`error`]: Domain error types ([`IntakeError`](error::IntakeError))
//! - [`intake`]: File intake types ([`CandidateFile`](intake::CandidateFile),
//!   [`IntakePolicy`](intake::IntakePolicy), [`Rejection`](intake::Rejection))

pub mod alert;
pub mod error;
pub mod intake;
