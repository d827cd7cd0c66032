//! Power profile with variable time step.

use log::{debug, trace};

use crate::breakpoints::{merge, MergedPoints};
use crate::profile::PowerProfile;
use crate::schedule::Schedule;

/// Power profile with variable time step dictated by the moments of power switches.
#[derive(Clone, Debug)]
pub struct Partition {
    /// Power consumption of each core at each step.
    pub profile: PowerProfile,
    /// Durations of the steps.
    pub steps: Vec<f64>,
    /// Step index of each additional time point passed to [partition].
    pub points: Vec<usize>,
}

/// Computes a power profile with a variable time step.
///
/// The step boundaries are the start and finish times of the tasks together with the additional time `points`,
/// merged within tolerance `eps` by [merge]. Task `i` consumes `power[i]` on its core during every step between
/// the instants of its start and its finish, so tasks shorter than `eps` do not show up in the profile.
///
/// The step index of a point equals the number of steps preceding it, hence a point lying at the last merged
/// instant has index `steps.len()`.
pub fn partition(power: &[f64], schedule: &Schedule, points: &[f64], eps: f64) -> Partition {
    schedule.debug_validate(power);

    let nt = schedule.tasks;

    let mut time = Vec::with_capacity(2 * nt + points.len());
    time.extend_from_slice(&schedule.start);
    time.extend_from_slice(&schedule.finish);
    time.extend_from_slice(points);

    let MergedPoints { steps, mut indices } = merge(&time, eps);
    let point_steps = indices.split_off(2 * nt);
    let (start_steps, finish_steps) = indices.split_at(nt);

    debug!(
        "Merged {} time points into {} steps with tolerance {}",
        time.len(),
        steps.len(),
        eps
    );

    let mut profile = PowerProfile::new(schedule.cores, steps.len());
    for (i, &core) in schedule.mapping.iter().enumerate() {
        let (s, f) = (start_steps[i], finish_steps[i]);
        trace!("Task {} consumes {} on core {} during steps [{}, {})", i, power[i], core, s, f);
        profile.fill(core, s..f, power[i]);
    }

    Partition {
        profile,
        steps,
        points: point_steps,
    }
}
