use serde::{Deserialize, Serialize};

/// Voices offered by the synthesis capability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Voice {
    #[default]
    Nova,
    Alloy,
    Echo,
    Fable,
    Onyx,
    Shimmer,
}

impl Voice {
    pub const ALL: [Voice; 6] = [
        Voice::Nova,
        Voice::Alloy,
        Voice::Echo,
        Voice::Fable,
        Voice::Onyx,
        Voice::Shimmer,
    ];

    /// Identifier sent to the synthesis capability
    pub fn as_str(&self) -> &'static str {
        match self {
            Voice::Nova => "nova",
            Voice::Alloy => "alloy",
            Voice::Echo => "echo",
            Voice::Fable => "fable",
            Voice::Onyx => "onyx",
            Voice::Shimmer => "shimmer",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Voice::Nova => "Nova (Female)",
            Voice::Alloy => "Alloy (Neutral)",
            Voice::Echo => "Echo (Male)",
            Voice::Fable => "Fable (British)",
            Voice::Onyx => "Onyx (Deep Male)",
            Voice::Shimmer => "Shimmer (Soft Female)",
        }
    }

    pub fn accent(&self) -> &'static str {
        match self {
            Voice::Fable => "British",
            _ => "American",
        }
    }
}

impl std::fmt::Display for Voice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Voice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Voice::ALL
            .into_iter()
            .find(|voice| voice.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown voice: {}", s))
    }
}

/// Entry of the voice catalogue served to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceOption {
    pub value: Voice,
    pub label: String,
    pub accent: String,
}

impl From<Voice> for VoiceOption {
    fn from(voice: Voice) -> Self {
        Self {
            value: voice,
            label: voice.label().to_string(),
            accent: voice.accent().to_string(),
        }
    }
}

pub fn voice_catalogue() -> Vec<VoiceOption> {
    Voice::ALL.into_iter().map(VoiceOption::from).collect()
}
