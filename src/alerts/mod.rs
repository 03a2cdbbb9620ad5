// SPDX-License-Identifier: MPL-2.0
//! Transient alert system for user feedback.
//!
//! Alerts appear temporarily to inform users about detections, upload
//! outcomes and errors without blocking interaction.
//!
//! # Components
//!
//! - [`manager`] - `AlertManager` owning the active set and its lifecycle
//! - [`history`] - bounded list of recently removed alerts
//!
//! # Usage
//!
//! ```
//! use crimewatch::alerts::AlertManager;
//! use crimewatch::domain::alert::{AlertKind, AlertRecord};
//! use std::time::Duration;
//!
//! let mut manager = AlertManager::new();
//! manager.on_removed(|id| println!("drop {id} from the view"));
//!
//! manager.add(AlertRecord::new("1", AlertKind::Success, "Upload successful", "2 file(s)"));
//!
//! // Driven by the host's timer, e.g. every 100ms.
//! manager.tick(Duration::from_millis(100));
//! assert_eq!(manager.len(), 1);
//! ```

mod history;
mod manager;

pub use history::{AlertHistory, RemovalCause, RemovedAlert};
pub use manager::{ActiveAlert, AlertManager, Message, RemovalCallback};
