use {anyhow::anyhow, std::path::PathBuf};

/// The CLI keeps its config file under this directory.
pub struct HomeDirectory {
    home: PathBuf,
}

impl HomeDirectory {
    pub fn new(home: PathBuf) -> Self {
        Self { home }
    }

    /// Use the given directory, or fall back to `~/.adder`.
    pub fn new_or_default(home: Option<PathBuf>) -> anyhow::Result<Self> {
        if let Some(home) = home {
            return Ok(Self::new(home));
        }

        let user_home =
            home::home_dir().ok_or_else(|| anyhow!("failed to find the user's home directory"))?;

        Ok(Self::new(user_home.join(".adder")))
    }

    pub fn config_file(&self) -> PathBuf {
        self.home.join("app.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_home_is_kept() {
        let dir = HomeDirectory::new_or_default(Some(PathBuf::from("/tmp/adder-home"))).unwrap();
        assert_eq!(dir.config_file(), PathBuf::from("/tmp/adder-home/app.toml"));
    }
}
