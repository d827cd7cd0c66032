//! Platform and application models.

use serde::{Deserialize, Serialize};

use crate::util::{load_yaml, parse_yaml};

/// Processing core described by its power consumption when running tasks of each type.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Core {
    /// Core name.
    pub name: String,
    /// Power consumption in W indexed by task type.
    pub power: Vec<f64>,
}

/// Set of cores tasks can be mapped to.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Platform {
    /// Platform cores.
    pub cores: Vec<Core>,
}

/// Application task.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Task {
    /// Task name.
    pub name: String,
    /// Task type used to look up the power consumption of a core.
    #[serde(rename = "type")]
    pub kind: usize,
}

/// Set of tasks.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Application {
    /// Application tasks.
    pub tasks: Vec<Task>,
}

impl Platform {
    /// Reads platform from a YAML file.
    pub fn from_yaml(file: &str) -> Self {
        load_yaml(file)
    }

    /// Parses platform from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> Self {
        parse_yaml(yaml)
    }

    /// Checks that every core defines power consumption for every task type used by `application`.
    pub fn validate(&self, application: &Application) -> Result<(), String> {
        let types = application.tasks.iter().map(|t| t.kind + 1).max().unwrap_or(0);
        for core in self.cores.iter() {
            if core.power.len() < types {
                return Err(format!(
                    "core {} defines power for {} task types while application uses {}",
                    core.name,
                    core.power.len(),
                    types
                ));
            }
        }
        Ok(())
    }
}

impl Application {
    /// Reads application from a YAML file.
    pub fn from_yaml(file: &str) -> Self {
        load_yaml(file)
    }

    /// Parses application from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> Self {
        parse_yaml(yaml)
    }
}
