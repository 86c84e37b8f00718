//! Value Object Module

pub mod hue_choices;
pub mod hue_color;
pub mod record_range;
pub mod user_data;
