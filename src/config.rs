//! Dashboard configuration document.
//!
//! The document is plain data: a header and an ordered list of rows, each row
//! an ordered list of cards. It is read once and never mutated by the engine.

use crate::consts::cli_consts::paths::{CONFIG_DIR, CONFIG_FILE};
use crate::error::DashboardError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Screen identifier, used for display and debugging only.
    #[serde(default)]
    pub screen: String,
    pub header: Header,
    pub content: Vec<Row>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub title: String,
    pub background_color: String,
    pub text_color: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub row: Vec<Card>,
}

/// The only `type` value this build renders.
const CARD_TAG: &str = "card";

/// Kind of a dashboard item. A missing `type` means a regular card. Any other
/// value, string or not, is kept as written in `Unknown` so newer documents
/// still load and save back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CardKind {
    #[default]
    Card,
    Unknown(serde_json::Value),
}

impl Serialize for CardKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CardKind::Card => serializer.serialize_str(CARD_TAG),
            CardKind::Unknown(raw) => raw.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for CardKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        if raw.as_str() == Some(CARD_TAG) {
            Ok(CardKind::Card)
        } else {
            Ok(CardKind::Unknown(raw))
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    #[serde(rename = "type", default)]
    pub kind: CardKind,
    #[serde(default)]
    pub title: String,
    /// Semantic icon key, see [`crate::dashboard::icons`].
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub icon_color: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub full_width: bool,
    /// Explicit route segment. Takes precedence over the title-derived route.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_key: Option<String>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Card {
    /// Create a regular card with the given title, icon key, badge color and description.
    pub fn new(title: &str, icon: &str, icon_color: &str, description: &str) -> Self {
        Card {
            kind: CardKind::Card,
            title: title.to_string(),
            icon: icon.to_string(),
            icon_color: icon_color.to_string(),
            description: description.to_string(),
            full_width: false,
            route_key: None,
        }
    }

    pub fn full_width(mut self) -> Self {
        self.full_width = true;
        self
    }

    pub fn with_route_key(mut self, route_key: &str) -> Self {
        self.route_key = Some(route_key.to_string());
        self
    }
}

impl Row {
    pub fn new(cards: Vec<Card>) -> Self {
        Row { row: cards }
    }
}

impl Default for DashboardConfig {
    /// The bundled home dashboard.
    fn default() -> Self {
        let description = "Check your bank activities";
        DashboardConfig {
            screen: "HomeDashboard".to_string(),
            header: Header {
                title: "HomeDashboard".to_string(),
                background_color: "#FFC107".to_string(),
                text_color: "#FFFFFF".to_string(),
            },
            content: vec![
                Row::new(vec![
                    Card::new("Banking", "dollar-sign", "#673AB7", description),
                    Card::new("Ideas", "lightbulb", "#E91E63", description),
                ]),
                Row::new(vec![
                    Card::new("Add", "plus-circle", "#009688", description),
                    Card::new("Links", "paperclip", "#FFC107", description),
                ]),
                Row::new(vec![
                    Card::new("Add", "wifi", "#673AB7", description).full_width(),
                ]),
            ],
        }
    }
}

impl DashboardConfig {
    /// Parses a configuration document from a JSON string.
    ///
    /// # Errors
    /// Returns `DashboardError::MalformedConfig` if the JSON is invalid or a
    /// required field is missing.
    pub fn from_json(json: &str) -> Result<Self, DashboardError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns `DashboardError::Io` if reading fails and
    /// `DashboardError::MalformedConfig` if the document is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, DashboardError> {
        let buf = fs::read(path)?;
        let config: DashboardConfig = serde_json::from_slice(&buf)?;
        Ok(config)
    }

    /// Loads the document at `path` if one is given. Otherwise loads the file
    /// at the default location, falling back to the bundled dashboard when
    /// that file does not exist.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, DashboardError> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }
        let default_path = get_config_path()?;
        if default_path.exists() {
            log::debug!("Loading dashboard from {}", default_path.display());
            Self::load_from_file(&default_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    pub fn save(&self, path: &Path) -> Result<(), DashboardError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Iterates all cards, row by row, in presentation order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.content.iter().flat_map(|row| row.row.iter())
    }
}

/// Default location of the dashboard document: `$HOME/.home-dashboard/dashboard.json`.
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    let home_path = home::home_dir().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "Failed to get home directory")
    })?;
    Ok(home_path.join(CONFIG_DIR).join(CONFIG_FILE))
}
