use serde::de::DeserializeOwned;

pub(crate) fn load_yaml<T: DeserializeOwned>(file: &str) -> T {
    let yaml = std::fs::read_to_string(file).unwrap_or_else(|_| panic!("Can't read file {}", file));
    serde_yaml::from_str(&yaml).unwrap_or_else(|e| panic!("Can't parse YAML from file {}: {}", file, e))
}

pub(crate) fn parse_yaml<T: DeserializeOwned>(yaml: &str) -> T {
    serde_yaml::from_str(yaml).unwrap_or_else(|e| panic!("Can't parse YAML: {}", e))
}
