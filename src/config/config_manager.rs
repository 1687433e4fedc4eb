use std::fs;
use std::path::PathBuf;
use crate::config::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, MIN_MAX_INPUT_BYTES, MIN_SCORE_THRESHOLD,
};
use crate::errors::{PatchlyzerError, PatchlyzerResult};
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .unwrap_or_default()
    }

    pub fn load() -> PatchlyzerResult<Config> {
        let path = Self::config_path();

        if path.exists() {
            log::info!("📋 Loading config from: {}", path.display());
            let content = fs::read_to_string(&path).map_err(|e| {
                PatchlyzerError::ConfigurationFileError {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                }
            })?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                PatchlyzerError::ConfigurationFileError {
                    path: path.display().to_string(),
                    reason: e.message().to_string(),
                }
            })?;
            return Ok(config);
        }

        Ok(Config::default())
    }

    pub fn create_sample_config() -> PatchlyzerResult<()> {
        let sample_config = r#"# Patchlyzer Configuration

[detection]
# Minimum weighted-signal score for text to count as a patch note.
# Signals: "patch notes" header, "changelog", "bug fix", "balance",
# a version token and bullet-list density.
score_threshold = 4

[guesser]
# Terms for which a numeric increase is a nerf, appended to the
# built-in list (cooldown, cost, mana cost, mp cost, delay,
# cast time, stagger). Matched as lowercase substrings.
extra_invert_keywords = []

[limits]
# Drafts beyond this many bytes are truncated before analysis.
max_input_bytes = 65536
"#;

        let path = Self::config_path();
        if path.exists() {
            return Err(PatchlyzerError::config_error(
                "configuration file already exists",
                None,
                Some(&format!("Edit {} directly or delete it first", path.display())),
            ));
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                PatchlyzerError::file_error(&parent.display().to_string(), "create directory", &e.to_string())
            })?;
        }

        fs::write(&path, sample_config).map_err(|e| {
            PatchlyzerError::file_error(&path.display().to_string(), "write", &e.to_string())
        })?;

        log::info!("📝 Sample configuration written to: {}", path.display());
        Ok(())
    }

    pub fn validate_config(config: &Config) -> PatchlyzerResult<()> {
        if config.detection.score_threshold < MIN_SCORE_THRESHOLD {
            return Err(PatchlyzerError::config_error(
                "score threshold must be at least 1",
                Some("detection.score_threshold"),
                Some("A threshold of 0 would accept arbitrary prose"),
            ));
        }

        if config.limits.max_input_bytes < MIN_MAX_INPUT_BYTES {
            return Err(PatchlyzerError::config_error(
                "input limit is too small to hold a patch note",
                Some("limits.max_input_bytes"),
                Some("Use at least 1024 bytes"),
            ));
        }

        if config.guesser.extra_invert_keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(PatchlyzerError::config_error(
                "invert keywords must not be blank",
                Some("guesser.extra_invert_keywords"),
                None,
            ));
        }

        Ok(())
    }
}
