//! Power profile with fixed sampling interval.

use log::{debug, trace};

use crate::profile::PowerProfile;
use crate::schedule::Schedule;

/// Computes a power profile with respect to sampling interval `dt`.
///
/// The returned profile always has `ns` rows. If the schedule span covers fewer than `ns` whole intervals, the
/// samples past the span are left zero. Task boundaries are rounded to the nearest sample, halves rounded up.
pub fn sample(power: &[f64], schedule: &Schedule, dt: f64, ns: usize) -> PowerProfile {
    schedule.debug_validate(power);
    debug_assert!(dt > 0., "sampling interval should be positive, got {}", dt);

    let mut profile = PowerProfile::new(schedule.cores, ns);

    let count = ((schedule.span / dt) as usize).min(ns);
    if count < ns {
        debug!(
            "Schedule span {} covers only {} of {} requested samples with interval {}",
            schedule.span, count, ns, dt
        );
    }

    for (i, &core) in schedule.mapping.iter().enumerate() {
        let s = round_half_up(schedule.start[i] / dt);
        let f = round_half_up(schedule.finish[i] / dt).min(count);
        trace!("Task {} consumes {} on core {} during samples [{}, {})", i, power[i], core, s, f);
        profile.fill(core, s..f, power[i]);
    }

    profile
}

// Truncation of a non-negative value is floor.
fn round_half_up(x: f64) -> usize {
    (x + 0.5) as usize
}

#[cfg(test)]
mod tests {
    use super::round_half_up;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(0.), 0);
        assert_eq!(round_half_up(1.49), 1);
        assert_eq!(round_half_up(1.5), 2);
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(2.999), 3);
    }
}
