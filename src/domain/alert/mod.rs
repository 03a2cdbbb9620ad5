// SPDX-License-Identifier: MPL-2.0
//! Alert domain types.
//!
//! Records are immutable once built; their lifecycle is owned by
//! [`crate::alerts::AlertManager`].

pub mod kind;
pub mod newtypes;
pub mod record;

pub use kind::{AlertKind, UnknownAlertKind};
pub use newtypes::{DetectionPeriod, HistoryCapacity, TickInterval};
pub use record::{AlertId, AlertRecord, DEFAULT_LIFETIME};
