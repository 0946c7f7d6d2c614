use {
    adder_math::OverflowMode,
    serde::{Deserialize, Serialize},
};

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub adder: AdderConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            adder: AdderConfig::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Default, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct AdderConfig {
    /// Overflow behavior used when a command doesn't specify one.
    pub overflow: OverflowMode,
}

#[cfg(test)]
mod tests {
    use {super::*, config_parser::parse_config, std::fs};

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg: Config = parse_config(dir.path().join("app.toml")).unwrap();

        assert_eq!(cfg.adder.overflow, OverflowMode::Wrapping);
    }

    #[test]
    fn file_round_trips_through_parser() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.toml");

        let expect = Config {
            log_level: "debug".to_string(),
            adder: AdderConfig {
                overflow: OverflowMode::Saturating,
            },
        };
        fs::write(&path, toml::to_string(&expect).unwrap()).unwrap();

        let cfg: Config = parse_config(&path).unwrap();
        assert_eq!(cfg.adder, expect.adder);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.toml");
        fs::write(&path, "[adder]\noverflow = \"checked\"\n").unwrap();

        let cfg: Config = parse_config(&path).unwrap();
        assert_eq!(cfg.adder.overflow, OverflowMode::Checked);
    }
}
