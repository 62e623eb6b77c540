/// Survey configuration
///
/// Settings are resolved in priority order:
/// 1. Command-line flag (or its environment variable)
/// 2. TOML config file (`--config`, else `<config_dir>/texture-survey/config.toml`)
/// 3. Compiled default

use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::ConfigError;

/// Image folder used when nothing else is configured
pub const DEFAULT_IMAGE_DIR: &str = "Images";

/// Longest side of a displayed image, in pixels
pub const DEFAULT_MAX_DISPLAY_SIZE: u32 = 1280;

/// Command-line arguments
#[derive(Parser, Debug, Default)]
#[command(name = "texture-survey")]
#[command(about = "Perceptual survey for rating wood texture images")]
#[command(version)]
pub struct Args {
    /// Folder containing the texture images (searched recursively)
    #[arg(short, long, env = "TEXTURE_SURVEY_IMAGE_DIR")]
    pub image_dir: Option<PathBuf>,

    /// Also write results to this CSV file when the survey completes
    #[arg(short, long, env = "TEXTURE_SURVEY_RESULTS_FILE")]
    pub results_file: Option<PathBuf>,

    /// Seed for the image order (omit for a fresh random order)
    #[arg(long, env = "TEXTURE_SURVEY_SEED")]
    pub seed: Option<u64>,

    /// Longest side of a displayed image, in pixels
    #[arg(long, env = "TEXTURE_SURVEY_MAX_DISPLAY_SIZE")]
    pub max_display_size: Option<u32>,

    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Contents of the TOML config file; every key is optional
#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub image_dir: Option<PathBuf>,
    pub results_file: Option<PathBuf>,
    pub seed: Option<u64>,
    pub max_display_size: Option<u32>,
}

impl FileConfig {
    pub fn from_toml(path: &Path, content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Fully resolved survey settings
#[derive(Debug, Clone, PartialEq)]
pub struct SurveyConfig {
    pub image_dir: PathBuf,
    pub results_file: Option<PathBuf>,
    pub seed: Option<u64>,
    pub max_display_size: u32,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            image_dir: PathBuf::from(DEFAULT_IMAGE_DIR),
            results_file: None,
            seed: None,
            max_display_size: DEFAULT_MAX_DISPLAY_SIZE,
        }
    }
}

impl SurveyConfig {
    /// Resolve settings from parsed arguments and whichever config file applies
    pub fn load(args: &Args) -> Result<Self, ConfigError> {
        let file = match &args.config {
            // An explicit file must exist
            Some(path) => Some(read_config_file(path)?),
            None => match default_config_path() {
                Some(path) if path.exists() => Some(read_config_file(&path)?),
                _ => None,
            },
        };

        Self::merge(args, file.unwrap_or_default())
    }

    /// Apply flag > file > default priority
    pub fn merge(args: &Args, file: FileConfig) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let max_display_size = args
            .max_display_size
            .or(file.max_display_size)
            .unwrap_or(defaults.max_display_size);
        if max_display_size == 0 {
            return Err(ConfigError::Invalid(
                "max_display_size must be greater than zero".to_string(),
            ));
        }

        let config = Self {
            image_dir: args
                .image_dir
                .clone()
                .or(file.image_dir)
                .unwrap_or(defaults.image_dir),
            results_file: args.results_file.clone().or(file.results_file),
            seed: args.seed.or(file.seed),
            max_display_size,
        };

        debug!("⚙️  Resolved configuration: {:?}", config);
        Ok(config)
    }
}

/// Default config file location for the platform
/// - Linux: ~/.config/texture-survey/config.toml
/// - macOS: ~/Library/Application Support/texture-survey/config.toml
/// - Windows: %APPDATA%\texture-survey\config.toml
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("texture-survey").join("config.toml"))
}

fn read_config_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("📄 Reading config file {}", path.display());
    FileConfig::from_toml(path, &content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SurveyConfig::merge(&Args::default(), FileConfig::default()).unwrap();

        assert_eq!(config.image_dir, PathBuf::from("Images"));
        assert_eq!(config.results_file, None);
        assert_eq!(config.seed, None);
        assert_eq!(config.max_display_size, 1280);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let file = FileConfig::from_toml(
            Path::new("config.toml"),
            r#"
                image_dir = "/data/textures"
                results_file = "out/results.csv"
                seed = 7
            "#,
        )
        .unwrap();

        let config = SurveyConfig::merge(&Args::default(), file).unwrap();

        assert_eq!(config.image_dir, PathBuf::from("/data/textures"));
        assert_eq!(config.results_file, Some(PathBuf::from("out/results.csv")));
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.max_display_size, 1280);
    }

    #[test]
    fn test_flags_override_file() {
        let args = Args {
            image_dir: Some(PathBuf::from("cli-images")),
            seed: Some(1),
            ..Args::default()
        };
        let file = FileConfig {
            image_dir: Some(PathBuf::from("file-images")),
            seed: Some(2),
            max_display_size: Some(800),
            ..FileConfig::default()
        };

        let config = SurveyConfig::merge(&args, file).unwrap();

        assert_eq!(config.image_dir, PathBuf::from("cli-images"));
        assert_eq!(config.seed, Some(1));
        assert_eq!(config.max_display_size, 800);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let result = FileConfig::from_toml(Path::new("config.toml"), "image_folder = \"x\"");
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_zero_display_size_is_rejected() {
        let args = Args {
            max_display_size: Some(0),
            ..Args::default()
        };
        assert!(matches!(
            SurveyConfig::merge(&args, FileConfig::default()),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_explicit_missing_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let args = Args {
            config: Some(dir.path().join("missing.toml")),
            ..Args::default()
        };
        assert!(matches!(SurveyConfig::load(&args), Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_explicit_config_file_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("survey.toml");
        std::fs::write(&path, "max_display_size = 640\n").unwrap();

        let args = Args {
            config: Some(path),
            ..Args::default()
        };
        let config = SurveyConfig::load(&args).unwrap();

        assert_eq!(config.max_display_size, 640);
    }

    #[test]
    fn test_cli_parsing() {
        let args = Args::try_parse_from([
            "texture-survey",
            "--image-dir",
            "textures",
            "--seed",
            "99",
            "--results-file",
            "results.csv",
        ])
        .unwrap();

        assert_eq!(args.image_dir, Some(PathBuf::from("textures")));
        assert_eq!(args.seed, Some(99));
        assert_eq!(args.results_file, Some(PathBuf::from("results.csv")));
    }
}
