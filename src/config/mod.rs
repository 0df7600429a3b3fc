use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::models::course::CourseMap;

fn default_timeout_hours() -> i64 {
    4
}
fn default_retry_attempts() -> u32 {
    5
}
fn default_retry_delay_secs() -> u64 {
    1
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding one CSV sheet per course.
    pub workbook: String,
    /// Course code -> sheet name allow-list.
    #[serde(default)]
    pub courses: CourseMap,
    /// Hours before an idle session is forced out.
    #[serde(default = "default_timeout_hours")]
    pub session_timeout_hours: i64,
    #[serde(default = "default_retry_attempts")]
    pub retry_attempts: u32,
    #[serde(default = "default_retry_delay_secs")]
    pub retry_delay_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workbook: Self::workbook_dir().to_string_lossy().to_string(),
            courses: CourseMap::default(),
            session_timeout_hours: default_timeout_hours(),
            retry_attempts: default_retry_attempts(),
            retry_delay_secs: default_retry_delay_secs(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("chemlog")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".chemlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("chemlog.conf")
    }

    /// Return the default workbook directory
    pub fn workbook_dir() -> PathBuf {
        Self::config_dir().join("workbook")
    }

    /// Load configuration from the standard file, or return defaults if
    /// not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            Self::load_from(&path)
        } else {
            Config::default()
        }
    }

    /// Load configuration from an explicit path (the `--config` override)
    pub fn load_from(path: &std::path::Path) -> Self {
        let content = fs::read_to_string(path).expect("❌ Failed to read configuration file");
        serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
    }

    /// Initialize configuration file and workbook directory
    pub fn init_all(custom_workbook: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Workbook directory: user provided or default
        let workbook_path = if let Some(name) = custom_workbook {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::workbook_dir()
        };

        let config = Config {
            workbook: workbook_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config).unwrap();
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        fs::create_dir_all(&workbook_path)?;
        println!("✅ Workbook:    {:?}", workbook_path);

        Ok(())
    }
}
