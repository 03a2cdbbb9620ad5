// SPDX-License-Identifier: MPL-2.0
//! Mock alert producers standing in for a detection backend.

mod feed;

pub use feed::{
    DetectionFeed, DetectionTemplate, DEFAULT_CHANCE, DEFAULT_PERIOD, DETECTION_LIFETIME,
    DETECTION_TEMPLATES,
};
