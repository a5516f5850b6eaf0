#[cfg(test)]
pub mod test {
    use std::fs;
    use std::path::Path;

    /// The mapping every fixture file decodes to.
    pub const EXPECTED_JSON: &str = r#"{
        "key-1": {"child-key-1": {"grandchild-key-1": "value-1"}},
        "key-2": {"child-key-2": {"grandchild-key-2": "value-2"}}
    }"#;

    pub const JSON_CONFIG: &str = r#"{
  "key-1": {
    "child-key-1": {
      "grandchild-key-1": "value-1"
    }
  },
  "key-2": {
    "child-key-2": {
      "grandchild-key-2": "value-2"
    }
  }
}
"#;

    pub const YAML_CONFIG: &str = "\
key-1:
  child-key-1:
    grandchild-key-1: value-1
key-2:
  child-key-2:
    grandchild-key-2: value-2
";

    /// Write `config.json`, `config.yaml` and `config.yml` into `dir`.
    pub fn write_config_set(dir: &Path) {
        fs::write(dir.join("config.yml"), YAML_CONFIG).unwrap();
        fs::write(dir.join("config.json"), JSON_CONFIG).unwrap();
        fs::write(dir.join("config.yaml"), YAML_CONFIG).unwrap();
    }

    pub fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn fixture_formats_agree() {
        let json: serde_json::Value = serde_json::from_str(JSON_CONFIG).unwrap();
        let yaml: serde_json::Value = serde_yaml::from_str(YAML_CONFIG).unwrap();
        let expected: serde_json::Value = serde_json::from_str(EXPECTED_JSON).unwrap();
        assert_eq!(json, expected);
        assert_eq!(yaml, expected);
    }
}
