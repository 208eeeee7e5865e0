use std::fs;
use std::path::{Path, PathBuf};

use enchengeria_config::Config;
use serde::{Deserialize, Serialize};

/// Platform config folder for the app
pub fn config_root() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("enchengeria")
}

/// Represents a user profile
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

/// Profiles stored as `<root>/profiles/<name>.json`
pub struct ProfileStore {
    root: PathBuf,
}

impl ProfileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn profiles_dir(&self) -> PathBuf {
        self.root.join("profiles")
    }

    fn profile_path(&self, name: &str) -> PathBuf {
        self.profiles_dir().join(format!("{name}.json"))
    }

    /// Initialize user config folders and main profile if missing
    pub fn init_user_config(&self) -> anyhow::Result<()> {
        fs::create_dir_all(self.profiles_dir())?;

        let main_profile = self.profile_path("main");

        if !main_profile.exists() {
            let profile = Profile {
                name: "main".into(),
                value: Config::new(),
            };
            fs::write(&main_profile, serde_json::to_string_pretty(&profile)?)?;
            tracing::info!("Created main profile at {}", main_profile.display());
        }

        Ok(())
    }

    /// Load a user profile by name, defaulting to main if name not found
    pub fn load_user_profile(&self, name: &str) -> anyhow::Result<Config> {
        let profile_file = self.profile_path(name);

        if profile_file.exists() {
            return read_profile(&profile_file);
        }

        tracing::warn!("Profile {name} not found, falling back to main profile or defaults");
        let main_file = self.profile_path("main");
        if main_file.exists() {
            read_profile(&main_file)
        } else {
            // First-run fallback
            Ok(Config::new())
        }
    }

    /// Add a new profile cloned from main (or defaults if main missing)
    pub fn add_profile_from_default(&self, new_name: &str) -> anyhow::Result<PathBuf> {
        let default_config = self.load_user_profile("main")?;
        let profile = Profile {
            name: new_name.into(),
            value: default_config,
        };

        fs::create_dir_all(self.profiles_dir())?;
        let file = self.profile_path(new_name);
        fs::write(&file, serde_json::to_string_pretty(&profile)?)?;
        tracing::info!("Created new profile: {new_name}");
        Ok(file)
    }
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::new(config_root())
    }
}

fn read_profile(path: &Path) -> anyhow::Result<Config> {
    let data = fs::read_to_string(path)?;
    let profile: Profile = serde_json::from_str(&data)?;
    Ok(profile.value)
}
