use {
    crate::Error,
    config::{Config, Environment, File, FileFormat},
    std::path::Path,
};

/// Load a config of type `D` from the TOML file at `path`, then apply
/// overrides from environment variables.
///
/// The file is optional: if it doesn't exist, every field comes from the
/// environment or from `D`'s serde defaults. Nested keys are separated by a
/// double underscore in variable names, e.g. `ADDER__OVERFLOW` overrides
/// `adder.overflow`.
pub fn parse_config<D, P>(path: P) -> Result<D, Error>
where
    D: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let env_override = Environment::default().separator("__");

    let config = Config::builder()
        .add_source(File::from(path.as_ref()).format(FileFormat::Toml).required(false))
        .add_source(env_override)
        .build()?;

    Ok(config.try_deserialize()?)
}
