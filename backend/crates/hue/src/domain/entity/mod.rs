//! Entity Module

pub mod hue_record;
pub mod submission;
