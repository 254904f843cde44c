use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use ascent_core::{InMemoryGradeCatalog, SkillKind, DEFAULT_GRADING_SYSTEM};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AscentConfig {
    #[serde(default)]
    pub session: SessionSection,
    #[serde(default)]
    pub grades: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub skills: SkillsSection,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionSection {
    pub location: Option<String>,
    #[serde(default = "default_grading_system")]
    pub grading_system: String,
}

impl Default for SessionSection {
    fn default() -> Self {
        Self {
            location: None,
            grading_system: default_grading_system(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SkillsSection {
    #[serde(default)]
    pub physical: Vec<String>,
    #[serde(default)]
    pub technical: Vec<String>,
}

fn default_grading_system() -> String {
    DEFAULT_GRADING_SYSTEM.to_string()
}

const STARTER_YDS: &[&str] = &[
    "5.5", "5.6", "5.7", "5.8", "5.9", "5.10a", "5.10b", "5.10c", "5.10d", "5.11a", "5.11b",
    "5.11c", "5.11d", "5.12a", "5.12b", "5.12c", "5.12d", "5.13a", "5.13b", "5.13c", "5.13d",
];

const STARTER_V: &[&str] = &[
    "VB", "V0", "V1", "V2", "V3", "V4", "V5", "V6", "V7", "V8", "V9", "V10", "V11", "V12",
];

const STARTER_PHYSICAL: &[&str] = &[
    "crimp", "sloper", "pinch", "pocket", "jug", "undercling", "gaston", "endurance", "power",
];

const STARTER_TECHNICAL: &[&str] = &[
    "heel hook", "toe hook", "drop knee", "flagging", "smearing", "stemming", "mantle", "dyno",
];

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

impl AscentConfig {
    /// Config used by `init` and when no config file exists.
    pub fn starter(location: Option<String>, grading_system: Option<String>) -> Self {
        let mut grades = BTreeMap::new();
        grades.insert("yds".to_string(), owned(STARTER_YDS));
        grades.insert("v".to_string(), owned(STARTER_V));
        Self {
            session: SessionSection {
                location,
                grading_system: grading_system.unwrap_or_else(default_grading_system),
            },
            grades,
            skills: SkillsSection {
                physical: owned(STARTER_PHYSICAL),
                technical: owned(STARTER_TECHNICAL),
            },
        }
    }

    pub fn grade_catalog(&self) -> InMemoryGradeCatalog {
        InMemoryGradeCatalog::from(self.grades.clone())
    }

    /// Skill vocabulary offered by the picker.
    pub fn skill_options(&self, kind: SkillKind) -> &[String] {
        match kind {
            SkillKind::Physical => &self.skills.physical,
            SkillKind::Technical => &self.skills.technical,
        }
    }
}

impl Default for AscentConfig {
    fn default() -> Self {
        Self::starter(None, None)
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn read_config(path: &Path) -> anyhow::Result<AscentConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn write_config(path: &Path, config: &AscentConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("ascent"));
        }
    }
    Ok(home_dir()?.join(".config").join("ascent"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
