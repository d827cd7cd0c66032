//! A library for building power consumption profiles of applications statically scheduled on multicore platforms.
//!
//! Given a schedule (start and finish times of tasks and their mapping to cores) and the power consumption of each
//! task, the library produces time-resolved per-core power profiles for thermal and energy simulation:
//!
//! - [partition::partition] builds a profile with a variable time step which changes only when some core switches
//! its power consumption.
//! - [sample::sample] builds a profile with a fixed sampling interval.
//! - [progress::Progress] computes the power consumption at arbitrary time moments.
//!
//! [dynamic::DynamicPower] derives task power consumption from a [system::Platform] and a [system::Application],
//! and [leakage] provides temperature-dependent leakage power models.

#![warn(missing_docs)]

pub mod breakpoints;
pub mod dynamic;
pub mod leakage;
pub mod partition;
pub mod profile;
pub mod progress;
pub mod regression;
pub mod sample;
pub mod schedule;
pub mod system;
mod util;
