//! Terminal configuration.
//!
//! Everything page-specific lives here: element identifiers the commands
//! act on, the profile text shown by `cv`/`about`/`ls`, the theme table,
//! and terminal behaviour knobs. The defaults reproduce the stock
//! portfolio page, so a host that loads no file still gets a working site.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};

/// Name reserved by `cv` for "every section".
pub const CV_ALL: &str = "all";

/// Name reserved by `theme` for the theme listing.
pub const THEME_LIST: &str = "list";

/// Top-level terminal configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Prompt printed before echoed command lines.
    pub prompt: String,
    /// First line shown when the terminal boots.
    pub banner: String,
    /// Commands submitted once at boot, in order.
    pub startup_commands: Vec<String>,
    /// Maximum retained history entries (0 = unbounded).
    pub history_limit: usize,
    /// Whether `clear` also forgets the command history.
    pub clear_resets_history: bool,
    /// Delay between revealed characters of the header typing effect.
    /// Zero writes the whole text at once.
    pub typing_interval_ms: u64,
    /// Where the file-backed preference store keeps its data.
    pub preferences_path: Option<PathBuf>,
    /// Element identifiers on the host page.
    pub targets: PageTargets,
    /// Theme table and preference key.
    pub theme: ThemeConfig,
    /// Profile content rendered by informational commands.
    pub profile: Profile,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            prompt: "$ ".to_string(),
            banner: "Website Terminal v1.0 - Type \"help\" for commands".to_string(),
            startup_commands: vec![
                "time".to_string(),
                "date".to_string(),
                "openmenu projects".to_string(),
            ],
            history_limit: 100,
            clear_resets_history: false,
            typing_interval_ms: 150,
            preferences_path: None,
            targets: PageTargets::default(),
            theme: ThemeConfig::default(),
            profile: Profile::default(),
        }
    }
}

impl TerminalConfig {
    /// Parse a TOML document. Missing keys fall back to the defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        log::info!("Loaded terminal config from {}", path.display());
        Ok(config)
    }

    /// Reject configurations the command table cannot be built from.
    pub fn validate(&self) -> Result<()> {
        if self.targets.sections.is_empty() {
            return Err(FolioError::Config(
                "at least one navigable section is required".to_string(),
            ));
        }
        if self.targets.output.is_empty() {
            return Err(FolioError::Config("output target id is empty".to_string()));
        }
        if self.theme.themes.is_empty() {
            return Err(FolioError::Config("theme table is empty".to_string()));
        }
        if !self.theme.themes.iter().any(|t| t.name == self.theme.default) {
            return Err(FolioError::Config(format!(
                "default theme '{}' is not in the theme table",
                self.theme.default
            )));
        }
        if self.theme.themes.iter().any(|t| t.name == THEME_LIST) {
            return Err(FolioError::Config(format!(
                "'{THEME_LIST}' is reserved and cannot name a theme"
            )));
        }
        let mut seen = Vec::new();
        for section in &self.profile.cv {
            if section.name == CV_ALL {
                return Err(FolioError::Config(format!(
                    "'{CV_ALL}' is reserved and cannot name a CV section"
                )));
            }
            if seen.contains(&section.name.as_str()) {
                return Err(FolioError::Config(format!(
                    "duplicate CV section: {}",
                    section.name
                )));
            }
            seen.push(section.name.as_str());
        }
        Ok(())
    }

    /// Navigable section identifiers in configured order.
    pub fn section_ids(&self) -> Vec<String> {
        self.targets.sections.iter().map(|s| s.name.clone()).collect()
    }
}

/// Identifiers of the page elements the terminal touches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageTargets {
    /// Container receiving output lines.
    pub output: String,
    /// Text-entry control.
    pub input: String,
    /// Mobile navigation sidebar.
    pub sidebar: String,
    /// Header elements rewritten by `title` (desktop and mobile copies).
    pub headers: Vec<String>,
    /// Sections reachable with `nav`.
    pub sections: Vec<SiteEntry>,
    /// Menu containers switched by `openmenu`.
    pub menus: Vec<String>,
}

impl Default for PageTargets {
    fn default() -> Self {
        Self {
            output: "terminal-content".to_string(),
            input: "terminal-input".to_string(),
            sidebar: "sidebar".to_string(),
            headers: vec!["header-text".to_string()],
            sections: vec![
                SiteEntry::new("home", "Landing page"),
                SiteEntry::new("about", "Professional profile"),
                SiteEntry::new("work", "Experience & projects"),
                SiteEntry::new("terminal", "This interactive terminal"),
            ],
            menus: vec!["projects".to_string(), "articles".to_string()],
        }
    }
}

/// A named site location with a short description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteEntry {
    pub name: String,
    pub description: String,
}

impl SiteEntry {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
        }
    }
}

/// Available themes and where the choice is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Theme applied when no preference is stored.
    pub default: String,
    /// Preference key holding the chosen theme.
    pub storage_key: String,
    pub themes: Vec<ThemeEntry>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default: "dark".to_string(),
            storage_key: "websiteTheme".to_string(),
            themes: vec![
                ThemeEntry::new("dark", "Default dark theme"),
                ThemeEntry::new("light", "Light mode"),
                ThemeEntry::new("yildiz", "Yildiz Technical University colors"),
                ThemeEntry::new("contrast", "High contrast theme"),
            ],
        }
    }
}

impl ThemeConfig {
    /// Theme names in configured order.
    pub fn names(&self) -> Vec<String> {
        self.themes.iter().map(|t| t.name.clone()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.themes.iter().any(|t| t.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeEntry {
    pub name: String,
    pub description: String,
}

impl ThemeEntry {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
        }
    }
}

/// Profile content shown by `cv`, `about` and `ls`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub about: String,
    pub cv: Vec<CvSection>,
    /// Extra resources listed by `ls` below the sections.
    pub resources: Vec<SiteEntry>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            about: [
                "YILDIZ TECHNICAL UNIVERSITY",
                "",
                "- Founded: 1911",
                "- Location: Istanbul, Turkey",
                "- My Program: BSc Electrical Engineering",
                "- Expected Graduation: 2026",
                "",
                "Website: https://www.yildiz.edu.tr",
            ]
            .join("\n"),
            cv: vec![
                CvSection::new(
                    "education",
                    "YILDIZ TECHNICAL UNIVERSITY\n\
                     Bachelor of Science in Electrical Engineering\n\
                     - Expected Graduation: 2026\n\
                     - Istanbul, Turkiye",
                ),
                CvSection::new(
                    "experience",
                    "ALAS ELEKTRIK AYDINLATMA AR-GE (Intern)\n\
                     - Jul 2024 - Aug 2024\n\
                     - Lighting product testing (IEC/EN standards)\n\
                     \n\
                     YILDIZ TECHNICAL UNIVERSITY (Lab Assistant)\n\
                     - Nov 2023 - Present\n\
                     - PV panel measurements and analysis",
                ),
                CvSection::new(
                    "skills",
                    "TECHNICAL SKILLS:\n\
                     - Standards: IEC, EN, IEEE\n\
                     - Software: PSIM, MATLAB, AutoCAD, SOLIDWORKS\n\
                     - Programming: Python, Java, C, Rust, PLC",
                ),
                CvSection::new(
                    "languages",
                    "LANGUAGES:\n\
                     - Turkish (Native)\n\
                     - English (Fluent)\n\
                     - German (Basic)\n\
                     - French (Basic)",
                ),
                CvSection::new(
                    "contact",
                    "CONTACT:\n\
                     - LinkedIn: linkedin.com/in/emirkah001\n\
                     - GitHub: github.com/EmirKahraman",
                ),
            ],
            resources: vec![
                SiteEntry::new("cv", "Professional CV"),
                SiteEntry::new("contact", "Contact information"),
                SiteEntry::new("projects", "Technical projects"),
            ],
        }
    }
}

impl Profile {
    pub fn cv_names(&self) -> Vec<String> {
        self.cv.iter().map(|s| s.name.clone()).collect()
    }

    pub fn cv_section(&self, name: &str) -> Option<&CvSection> {
        self.cv.iter().find(|s| s.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CvSection {
    pub name: String,
    pub body: String,
}

impl CvSection {
    pub fn new(name: &str, body: &str) -> Self {
        Self {
            name: name.to_string(),
            body: body.to_string(),
        }
    }
}
