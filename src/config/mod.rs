use crate::ui::messages::warning;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// One dashboard credential pair. Presentation-layer access control for
/// the stats dashboard, not a security boundary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdminUser {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// Branch used when checkin/checkout omit --city.
    #[serde(default)]
    pub default_city: Option<String>,
    /// Assumed program length in days for the trainee/preparatory
    /// completion-rate formula.
    #[serde(default = "default_program_days")]
    pub program_days: u32,
    #[serde(default = "default_admin_users")]
    pub admin_users: Vec<AdminUser>,
}

fn default_program_days() -> u32 {
    180
}

fn default_admin_users() -> Vec<AdminUser> {
    vec![
        AdminUser {
            username: "admin".to_string(),
            password: "admin123456".to_string(),
        },
        AdminUser {
            username: "specialist1".to_string(),
            password: "spec123".to_string(),
        },
        AdminUser {
            username: "specialist2".to_string(),
            password: "spec456".to_string(),
        },
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            default_city: None,
            program_days: default_program_days(),
            admin_users: default_admin_users(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("hudoor")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".hudoor")
        }
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("hudoor.conf")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("hudoor.sqlite")
    }

    /// Load configuration from file, or fall back to defaults when the
    /// file is missing or unreadable.
    pub fn load() -> Self {
        let path = Self::config_file();
        if !path.exists() {
            return Config::default();
        }
        match fs::read_to_string(&path) {
            Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
                warning(format!("Configuration file is unreadable, using defaults: {e}"));
                Config::default()
            }),
            Err(e) => {
                warning(format!("Failed to read configuration file, using defaults: {e}"));
                Config::default()
            }
        }
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = if let Some(name) = custom_name {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(io::Error::other)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }
        println!("✅ Database:    {:?}", db_path);

        Ok(())
    }

    /// Credential match against the configured list.
    pub fn is_admin(&self, username: &str, password: &str) -> bool {
        self.admin_users
            .iter()
            .any(|u| u.username == username && u.password == password)
    }
}
