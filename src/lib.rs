//! Kinematic 2D character controller for bevy and avian2d.
//!
//! A body is moved by sweeping its axis-aligned box through static terrain,
//! clipping the frame's displacement at every hit and classifying the hit
//! surface as floor, ceiling or wall. See [`movement::resolver`] for the
//! collision pass and [`movement::KinematicController`] for the per-frame step.

pub mod content;
#[cfg(feature = "dev-tools")]
pub mod debug;
pub mod movement;
pub mod terrain;
