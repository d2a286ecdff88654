use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Continent {
    Europe,
    Asia,
    Africa,
}

impl Continent {
    pub const ALL: [Continent; 3] = [Continent::Europe, Continent::Asia, Continent::Africa];
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Continent::Europe => write!(f, "EUROPE"),
            Continent::Asia => write!(f, "ASIA"),
            Continent::Africa => write!(f, "AFRICA"),
        }
    }
}

impl FromStr for Continent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "europe" => Ok(Continent::Europe),
            "asia" => Ok(Continent::Asia),
            "africa" => Ok(Continent::Africa),
            _ => Err(format!("Unknown continent: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Language {
    English,
    German,
    Arabic,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::German, Language::Arabic];
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::English => write!(f, "ENGLISH"),
            Language::German => write!(f, "GERMAN"),
            Language::Arabic => write!(f, "ARABIC"),
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "english" => Ok(Language::English),
            "german" => Ok(Language::German),
            "arabic" => Ok(Language::Arabic),
            _ => Err(format!("Unknown language: {}", s)),
        }
    }
}

/// A country record. Fields are read-only once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    name: String,
    continent: Continent,
    language: Language,
}

impl Country {
    pub fn new(name: impl Into<String>, continent: Continent, language: Language) -> Self {
        Self {
            name: name.into(),
            continent,
            language,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn continent(&self) -> Continent {
        self.continent
    }

    pub fn language(&self) -> Language {
        self.language
    }
}
