// SPDX-License-Identifier: MPL-2.0
//! `crimewatch` is the alert and upload core of a mock crime-detection dashboard.
//!
//! It tracks transient alerts with bounded lifetimes, validates files offered
//! for (simulated) analysis against an intake policy, and produces mock
//! detection traffic. Rendering, routing and real inference stay with the host.

#![doc(html_root_url = "https://docs.rs/crimewatch/0.3.0")]

pub mod alerts;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod intake;
pub mod logging;
pub mod simulation;

#[cfg(test)]
pub(crate) mod test_utils;
