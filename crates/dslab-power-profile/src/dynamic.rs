//! Dynamic power consumption of an application running on a platform.

use crate::partition::{partition, Partition};
use crate::profile::PowerProfile;
use crate::progress::Progress;
use crate::sample::sample;
use crate::schedule::Schedule;
use crate::system::{Application, Platform};

/// Computes dynamic power profiles of schedules of an application on a platform.
///
/// The power consumption of a task is defined by the core it is mapped to and the task type. All profiles are
/// built by distributing the task power according to the schedule and passing it to [partition], [sample] or
/// [Progress].
#[derive(Clone, Debug)]
pub struct DynamicPower {
    platform: Platform,
    application: Application,
}

impl DynamicPower {
    /// Creates power model for `application` running on `platform`.
    pub fn new(platform: Platform, application: Application) -> Self {
        Self { platform, application }
    }

    /// Returns the platform.
    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    /// Returns the application.
    pub fn application(&self) -> &Application {
        &self.application
    }

    /// Checks that `schedule` is consistent and matches the platform and the application.
    pub fn validate(&self, schedule: &Schedule) -> Result<(), String> {
        schedule.validate()?;
        self.platform.validate(&self.application)?;
        if schedule.cores != self.platform.cores.len() {
            return Err(format!(
                "schedule uses {} cores while platform has {}",
                schedule.cores,
                self.platform.cores.len()
            ));
        }
        if schedule.tasks != self.application.tasks.len() {
            return Err(format!(
                "schedule has {} tasks while application has {}",
                schedule.tasks,
                self.application.tasks.len()
            ));
        }
        Ok(())
    }

    /// Returns the power consumption of each task with respect to the mapping of `schedule`.
    pub fn distribute(&self, schedule: &Schedule) -> Vec<f64> {
        schedule
            .mapping
            .iter()
            .zip(self.application.tasks.iter())
            .map(|(&core, task)| self.platform.cores[core].power[task.kind])
            .collect()
    }

    /// Computes a power profile with a variable time step, see [partition].
    pub fn partition(&self, schedule: &Schedule, points: &[f64], eps: f64) -> Partition {
        partition(&self.distribute(schedule), schedule, points, eps)
    }

    /// Computes a power profile with a fixed sampling interval, see [sample].
    pub fn sample(&self, schedule: &Schedule, dt: f64, ns: usize) -> PowerProfile {
        sample(&self.distribute(schedule), schedule, dt, ns)
    }

    /// Returns an object computing the power consumption at arbitrary time moments, see [Progress].
    pub fn progress<'a>(&self, schedule: &'a Schedule) -> Progress<'a> {
        Progress::new(self.distribute(schedule), schedule)
    }
}
