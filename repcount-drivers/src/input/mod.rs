//! User inputs

pub mod button;

pub use button::TargetButton;
