//! Common test utilities for integration tests
//!
//! This module provides:
//! - Tolerance-based float assertions
//! - Reference temperatures known in all three scales

#![allow(dead_code)]

use thermoscale_core::Scale;

/// Tolerance used for every approximate comparison
pub const TOLERANCE: f64 = 1e-6;

/// A physical reference point expressed in every scale
#[derive(Debug, Clone, Copy)]
pub struct ReferencePoint {
    pub name: &'static str,
    pub celsius: f64,
    pub fahrenheit: f64,
    pub kelvin: f64,
}

impl ReferencePoint {
    /// Value of this reference point in `scale`
    pub fn in_scale(&self, scale: Scale) -> f64 {
        match scale {
            Scale::Celsius => self.celsius,
            Scale::Fahrenheit => self.fahrenheit,
            Scale::Kelvin => self.kelvin,
        }
    }
}

/// Well-known temperatures with their exact values in each scale
pub const REFERENCE_POINTS: [ReferencePoint; 5] = [
    ReferencePoint { name: "absolute zero", celsius: -273.15, fahrenheit: -459.67, kelvin: 0.0 },
    ReferencePoint { name: "crossover", celsius: -40.0, fahrenheit: -40.0, kelvin: 233.15 },
    ReferencePoint { name: "water freezing", celsius: 0.0, fahrenheit: 32.0, kelvin: 273.15 },
    ReferencePoint { name: "body temperature", celsius: 37.0, fahrenheit: 98.6, kelvin: 310.15 },
    ReferencePoint { name: "water boiling", celsius: 100.0, fahrenheit: 212.0, kelvin: 373.15 },
];

/// Assert `actual` is within [`TOLERANCE`] of `expected`
#[track_caller]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {expected}, got {actual} (difference {})",
        (actual - expected).abs()
    );
}
