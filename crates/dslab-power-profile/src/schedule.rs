//! Static schedule of application tasks on platform cores.

use serde::{Deserialize, Serialize};

use crate::util::{load_yaml, parse_yaml};

/// Represents a schedule produced by some external scheduler.
///
/// Task `i` runs on core `mapping[i]` during `[start[i], finish[i]]`. The schedule span is the total duration of
/// the schedule and is not less than any finish time.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Schedule {
    /// Number of cores.
    pub cores: usize,
    /// Number of tasks.
    pub tasks: usize,
    /// Start times of tasks.
    pub start: Vec<f64>,
    /// Finish times of tasks.
    pub finish: Vec<f64>,
    /// Core assigned to each task.
    pub mapping: Vec<usize>,
    /// Total duration of the schedule.
    pub span: f64,
}

#[derive(Debug, Deserialize)]
struct YamlSchedule {
    cores: usize,
    start: Vec<f64>,
    finish: Vec<f64>,
    mapping: Vec<usize>,
    span: Option<f64>,
}

impl Schedule {
    /// Creates new schedule with span equal to the latest finish time.
    pub fn new(cores: usize, start: Vec<f64>, finish: Vec<f64>, mapping: Vec<usize>) -> Self {
        let span = finish.iter().copied().fold(0., f64::max);
        Self {
            cores,
            tasks: mapping.len(),
            start,
            finish,
            mapping,
            span,
        }
    }

    /// Overrides the schedule span.
    pub fn with_span(mut self, span: f64) -> Self {
        self.span = span;
        self
    }

    /// Reads schedule from a YAML file.
    ///
    /// The file should contain `cores`, `start`, `finish` and `mapping` fields. The optional `span` field defaults to
    /// the latest finish time.
    pub fn from_yaml(file: &str) -> Self {
        Self::from_raw(load_yaml(file))
    }

    /// Parses schedule from a YAML string, see [from_yaml](Self::from_yaml).
    pub fn from_yaml_str(yaml: &str) -> Self {
        Self::from_raw(parse_yaml(yaml))
    }

    fn from_raw(raw: YamlSchedule) -> Self {
        let schedule = Self::new(raw.cores, raw.start, raw.finish, raw.mapping);
        match raw.span {
            Some(span) => schedule.with_span(span),
            None => schedule,
        }
    }

    /// Checks that the schedule is consistent.
    pub fn validate(&self) -> Result<(), String> {
        if self.start.len() != self.tasks || self.finish.len() != self.tasks || self.mapping.len() != self.tasks {
            return Err(format!(
                "inconsistent number of tasks: {} start times, {} finish times, {} mapped tasks, {} tasks expected",
                self.start.len(),
                self.finish.len(),
                self.mapping.len(),
                self.tasks
            ));
        }
        for i in 0..self.tasks {
            if self.mapping[i] >= self.cores {
                return Err(format!(
                    "task {} is mapped to core {} while there are only {} cores",
                    i, self.mapping[i], self.cores
                ));
            }
            if self.start[i] > self.finish[i] {
                return Err(format!(
                    "task {} starts at {} after its finish at {}",
                    i, self.start[i], self.finish[i]
                ));
            }
            if self.finish[i] > self.span {
                return Err(format!(
                    "task {} finishes at {} after the schedule span {}",
                    i, self.finish[i], self.span
                ));
            }
        }
        Ok(())
    }

    pub(crate) fn debug_validate(&self, power: &[f64]) {
        if cfg!(debug_assertions) {
            if let Err(e) = self.validate() {
                panic!("Invalid schedule: {}", e);
            }
            assert_eq!(power.len(), self.tasks, "Power should be given for each task");
        }
    }
}
