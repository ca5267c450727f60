use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(default)]
    pub general: ConfigGeneral,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct ConfigGeneral {
    #[serde(default)]
    pub json: bool,
    #[serde(default)]
    pub strict: bool,
}

/// Effective run options after merging the config file with CLI flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    pub json: bool,
    pub strict: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardTrial {
    pub values: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Door {
    Open,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlarmTrial {
    pub doors: Vec<Door>,
    /// Seconds the button keeps doors passable once pressed.
    pub duration: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    #[serde(rename = "YES")]
    Yes,
    #[serde(rename = "NO")]
    No,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Yes => f.write_str("YES"),
            Verdict::No => f.write_str("NO"),
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct CardAnswer {
    pub trial: usize,
    pub removals: usize,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct AlarmAnswer {
    pub trial: usize,
    pub verdict: Verdict,
}
