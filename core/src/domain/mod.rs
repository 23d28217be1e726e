pub mod common;
pub mod localization;
pub mod menu;
pub mod ordering;
