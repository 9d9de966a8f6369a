//! Stardew checkup library crate.
//!
//! Reads a farm save and reports progress toward every in-game achievement,
//! the main milestones and grandpa's evaluation, with what is still missing.
//! Hosts add [`save::SavePlugin`] and [`checkup::CheckupPlugin`] to a bevy
//! `App`; the evaluators can also be called directly through [`report`].

pub mod shared;
pub mod data;
pub mod save;
pub mod checkup;
pub mod report;
pub mod settings;
