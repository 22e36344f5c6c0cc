//! Algorithms for calculating the dynamic power.

use std::cmp::Ordering;

use application::Application;
use platform::Platform;
use profile::Profile;
use schedule::Schedule;

/// A power calculator.
///
/// The platform and application are borrowed and assumed to be consistent
/// with the schedules given to the operations: each task should be mapped
/// onto a processing element known to the platform, and each task kind
/// should have an entry in the element's power table.
pub struct Power<'l> {
    platform: &'l Platform,
    application: &'l Application,
}

/// An evaluator of the power consumption at arbitrary time moments.
pub struct Progress<'l> {
    schedule: &'l Schedule,
    power: Vec<f64>,
    mapping: Vec<Vec<usize>>,
}

impl<'l> Power<'l> {
    /// Create a power calculator.
    #[inline]
    pub fn new(platform: &'l Platform, application: &'l Application) -> Power<'l> {
        Power { platform: platform, application: application }
    }

    /// Compute the power consumption of the tasks of a schedule.
    pub fn distribute(&self, schedule: &Schedule) -> Vec<f64> {
        let elements = &self.platform.elements;
        let tasks = &self.application.tasks;
        let mut power = vec![0.0; self.application.len()];
        for (i, &j) in schedule.mapping.iter().enumerate() {
            power[i] = elements[j].power[tasks[i].kind];
        }
        power
    }

    /// Compute a power profile with a variable time step dictated by the
    /// start and finish times of the tasks of a schedule.
    ///
    /// Time moments that are within the tolerance from one another are
    /// merged. The function returns the profile along with the durations of
    /// its time steps. Each task occupies the time steps from the one its
    /// start time falls into up to, but not including, the one its finish
    /// time falls into.
    pub fn partition(&self, schedule: &Schedule, tolerance: f64) -> (Profile, Vec<f64>) {
        partition(&self.distribute(schedule), schedule, tolerance)
    }

    /// Compute a power profile with respect to a sampling interval.
    ///
    /// The number of time steps is fixed: short schedules are padded with
    /// zeros while long ones are truncated.
    pub fn sample(&self, schedule: &Schedule, time_step: f64, steps: usize) -> Profile {
        sample(&self.distribute(schedule), schedule, time_step, steps)
    }

    /// Create an evaluator of the power consumption at arbitrary time
    /// moments of a schedule.
    pub fn progress<'m>(&self, schedule: &'m Schedule) -> Progress<'m> {
        progress(self.distribute(schedule), schedule)
    }
}

impl<'l> Progress<'l> {
    /// Compute the power consumption at a time moment, writing one value per
    /// processing element into the result.
    ///
    /// A task contributes to a processing element whenever the time moment
    /// falls within the task's time interval, including both endpoints.
    pub fn compute(&self, time: f64, result: &mut [f64]) {
        let (start, finish) = (&self.schedule.start, &self.schedule.finish);
        for (i, tasks) in self.mapping.iter().enumerate() {
            result[i] = 0.0;
            for &j in tasks {
                if start[j] <= time && time <= finish[j] {
                    result[i] = self.power[j];
                    break;
                }
            }
        }
    }
}

fn partition(power: &[f64], schedule: &Schedule, tolerance: f64) -> (Profile, Vec<f64>) {
    let (units, tasks) = (schedule.units, schedule.tasks);

    let mut points = Vec::with_capacity(2 * tasks);
    points.extend_from_slice(&schedule.start);
    points.extend_from_slice(&schedule.finish);

    let (durations, steps) = traverse(&points, tolerance);

    let mut profile = Profile::new(units, durations.len());
    for i in 0..tasks {
        let j = schedule.mapping[i];
        let p = power[i];
        for k in steps[i]..steps[tasks + i] {
            profile.data[k * units + j] = p;
        }
    }

    (profile, durations)
}

fn progress<'l>(power: Vec<f64>, schedule: &'l Schedule) -> Progress<'l> {
    let (units, tasks) = (schedule.units, schedule.tasks);

    let mut mapping = Vec::with_capacity(units);
    for i in 0..units {
        let mut own = Vec::new();
        for j in 0..tasks {
            if schedule.mapping[j] == i {
                own.push(j);
            }
        }
        mapping.push(own);
    }

    Progress { schedule: schedule, power: power, mapping: mapping }
}

fn sample(power: &[f64], schedule: &Schedule, time_step: f64, steps: usize) -> Profile {
    debug_assert!(time_step > 0.0);

    let (units, tasks) = (schedule.units, schedule.tasks);

    let mut profile = Profile::new(units, steps);

    let count = (schedule.span / time_step) as usize;
    let limit = if count < steps { count } else { steps };

    for i in 0..tasks {
        let j = schedule.mapping[i];
        let p = power[i];

        let s = (schedule.start[i] / time_step + 0.5) as usize;
        let mut f = (schedule.finish[i] / time_step + 0.5) as usize;
        if f > limit {
            f = limit;
        }

        for k in s..f {
            profile.data[k * units + j] = p;
        }
    }

    profile
}

/// Merge the time points that are within the tolerance from the last
/// distinct one, measuring the durations between the distinct ones and
/// mapping each point to the index of the merged time step it falls into.
fn traverse(points: &[f64], tolerance: f64) -> (Vec<f64>, Vec<usize>) {
    debug_assert!(tolerance >= 0.0);

    let count = points.len();
    if count == 0 {
        return (vec![], vec![]);
    }

    let mut order = (0..count).collect::<Vec<_>>();
    order.sort_by(|&i, &j| {
        if points[i] < points[j] {
            Ordering::Less
        } else if points[i] > points[j] {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    });

    let mut durations = Vec::with_capacity(count - 1);
    let mut steps = vec![0; count];

    let mut j = 0;
    let mut x = points[order[0]];
    for i in 1..count {
        let delta = points[order[i]] - x;
        if delta > tolerance {
            x = points[order[i]];
            durations.push(delta);
            j += 1;
        }
        steps[order[i]] = j;
    }

    (durations, steps)
}
