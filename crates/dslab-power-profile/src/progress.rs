//! Instantaneous power consumption.

use std::borrow::Cow;

use crate::schedule::Schedule;

/// Computes the power consumption of cores at arbitrary time moments according to a schedule.
///
/// The tasks of each core are collected once on creation. A query scans the tasks of every core in their original
/// order, and the first task whose `[start, finish]` interval contains the queried time defines the core power.
/// The interval is closed, so at the boundary between two back-to-back tasks the earlier-indexed one wins.
pub struct Progress<'a> {
    power: Cow<'a, [f64]>,
    schedule: &'a Schedule,
    mapping: Vec<Vec<usize>>,
}

impl<'a> Progress<'a> {
    /// Creates a query object for task power consumption `power` and `schedule`.
    pub fn new(power: impl Into<Cow<'a, [f64]>>, schedule: &'a Schedule) -> Self {
        let power = power.into();
        schedule.debug_validate(&power);

        let mut mapping = vec![Vec::new(); schedule.cores];
        for (task, &core) in schedule.mapping.iter().enumerate() {
            mapping[core].push(task);
        }

        Self {
            power,
            schedule,
            mapping,
        }
    }

    /// Returns the number of cores.
    pub fn cores(&self) -> usize {
        self.mapping.len()
    }

    /// Writes the power consumption of each core at `time` into `power`.
    ///
    /// The buffer should hold at least one value per core.
    pub fn compute(&self, time: f64, power: &mut [f64]) {
        debug_assert!(
            power.len() >= self.cores(),
            "buffer of size {} can't hold {} cores",
            power.len(),
            self.cores()
        );
        let (start, finish) = (&self.schedule.start, &self.schedule.finish);
        for (core, tasks) in self.mapping.iter().enumerate() {
            power[core] = tasks
                .iter()
                .find(|&&task| start[task] <= time && time <= finish[task])
                .map_or(0., |&task| self.power[task]);
        }
    }

    /// Returns the power consumption of each core at `time`.
    pub fn get(&self, time: f64) -> Vec<f64> {
        let mut power = vec![0.; self.cores()];
        self.compute(time, &mut power);
        power
    }
}
