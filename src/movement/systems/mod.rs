//! Movement domain: system modules for kinematic actors.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::report_contact_changes;
pub(crate) use input::{drive_patrols, read_input};
pub(crate) use movement::apply_movement;
