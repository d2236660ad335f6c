use serde::{Deserialize, Serialize};

pub const DEFAULT_NO_BUTTON_TEXT: &str = "No";

/// How the page reacts when the negative button is clicked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonAnimation {
    /// The affirmative button gets bigger on every refusal.
    #[default]
    Grow,
    /// The negative button jumps to a random spot inside its container.
    Random,
}

impl ButtonAnimation {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "grow" => Some(Self::Grow),
            "random" => Some(Self::Random),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Grow => "grow",
            Self::Random => "random",
        }
    }
}

/// Split newline-delimited text into the ordered phrase list cycled by the
/// negative button. Entries are trimmed and blank lines are dropped.
pub fn parse_phrases(raw: &str) -> Vec<String> {
    raw.split('\n')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageConfig {
    pub title: String,
    pub subtitle: String,
    pub first_image: String,
    pub second_image: String,
    pub yes_click_text: String,
    pub yes_button_text: String,
    pub no_button_text: String,
    pub no_button_phrases: Vec<String>,
    /// Raw value as given. Read it through [`PageConfig::background`], which
    /// treats a blank URL as absent.
    pub background_image: Option<String>,
    pub button_animation: ButtonAnimation,
}

impl PageConfig {
    pub fn new() -> Self {
        Self {
            no_button_text: DEFAULT_NO_BUTTON_TEXT.to_string(),
            ..Self::default()
        }
    }

    /// Replace the phrase list with the parsed form of newline-delimited text.
    pub fn with_phrases_text(mut self, raw: &str) -> Self {
        self.no_button_phrases = parse_phrases(raw);
        self
    }

    pub fn with_background(mut self, url: Option<String>) -> Self {
        self.background_image = url;
        self
    }

    /// The background URL to render. An empty or whitespace-only value
    /// counts as no background, however the page was built.
    pub fn background(&self) -> Option<&str> {
        self.background_image
            .as_deref()
            .filter(|u| !u.trim().is_empty())
    }

    /// Names of fields that will render blank.
    pub fn blank_fields(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        for (name, value) in [
            ("title", &self.title),
            ("subtitle", &self.subtitle),
            ("first_image", &self.first_image),
            ("second_image", &self.second_image),
            ("yes_click_text", &self.yes_click_text),
            ("yes_button_text", &self.yes_button_text),
        ] {
            if value.trim().is_empty() {
                out.push(name);
            }
        }
        out
    }
}
