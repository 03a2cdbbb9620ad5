// SPDX-License-Identifier: MPL-2.0
//! Shared helpers for unit tests.
//!
//! Alert progress is an `f32` ratio, so assertions on it go through
//! `approx` instead of `assert_eq!`.

pub use approx::assert_abs_diff_eq;

/// Tolerance for progress ratios.
pub const F32_EPSILON: f32 = 1e-6;
