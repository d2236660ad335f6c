use std::env;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::page::ButtonAnimation;

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct ConfigFile {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    #[serde(alias = "firstImage")]
    pub first_image: Option<String>,
    #[serde(alias = "secondImage")]
    pub second_image: Option<String>,
    #[serde(alias = "yesClickText")]
    pub yes_click_text: Option<String>,
    #[serde(alias = "yesButtonText")]
    pub yes_button_text: Option<String>,
    #[serde(alias = "noButtonText")]
    pub no_button_text: Option<String>,
    /// Newline-delimited, as typed into a textarea.
    #[serde(alias = "noButtonPhrases")]
    pub no_button_phrases: Option<String>,
    #[serde(alias = "backgroundImage")]
    pub background_image: Option<String>,
    #[serde(alias = "buttonAnimation")]
    pub button_animation: Option<ButtonAnimation>,
    pub output: Option<String>,
    pub no_color: Option<bool>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found '{}'", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read config '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid config path '{}'", path.display())]
    InvalidPath { path: PathBuf },

    #[error("failed to write config file '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(|| env::var_os("USERPROFILE").map(PathBuf::from))
        .or_else(|| {
            let drive = env::var_os("HOMEDRIVE")?;
            let path = env::var_os("HOMEPATH")?;
            Some(PathBuf::from(drive).join(path))
        })
}

pub fn default_config_path() -> Option<PathBuf> {
    Some(home_dir()?.join(".valentine").join("config.yml"))
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/").or_else(|| path.strip_prefix("~\\")) {
        if let Some(home) = home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

pub fn parse_config(path: &Path, contents: &str) -> Result<ConfigFile, ConfigError> {
    // An empty file deserializes to unit, not a mapping.
    if contents.trim().is_empty() {
        return Ok(ConfigFile::default());
    }
    serde_yaml::from_str::<ConfigFile>(contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_config(path: &Path, allow_missing: bool) -> Result<ConfigFile, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => parse_config(path, &contents),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
            Ok(ConfigFile::default())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(ConfigError::NotFound {
            path: path.to_path_buf(),
        }),
        Err(source) => Err(ConfigError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

pub fn default_config_yaml() -> String {
    r#"# Valentine page config
#
# Location (default):
#   ~/.valentine/config.yml
#
# Every value can be overridden on the command line, e.g. --title "Hi".

title: "Will you be my valentine?"
subtitle: "I have a very important question for you"

# Images are referenced by URL and loaded by the viewer's browser.
first_image: "https://media.tenor.com/f1xnRxTRxLAAAAAj/bears-with-heart.gif"
second_image: "https://media.tenor.com/gUiu1zyxfzYAAAAj/bear-kiss-bear-kisses.gif"
# background_image: https://example.com/background.jpg

yes_button_text: "Yes"
yes_click_text: "Yay! See you on the 14th"
no_button_text: "No"

# One phrase per line; the "No" button cycles through them.
no_button_phrases: |
  Are you sure?
  Really sure?
  Think again!
  Last chance!
  You're breaking my heart ;(

# grow   - the "Yes" button gets bigger every time "No" is clicked
# random - the "No" button jumps to a random spot
button_animation: grow

# Output (optional)
# output: ./valentine.html

# Output styling
no_color: false
"#
    .to_string()
}

pub fn ensure_default_config_file(path: &Path) -> Result<bool, ConfigError> {
    if path.exists() {
        return Ok(false);
    }
    let parent = path.parent().ok_or_else(|| ConfigError::InvalidPath {
        path: path.to_path_buf(),
    })?;
    if !parent.as_os_str().is_empty() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, default_config_yaml()).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_yaml_parses() {
        let cfg = parse_config(Path::new("default.yml"), &default_config_yaml()).unwrap();
        assert_eq!(cfg.button_animation, Some(ButtonAnimation::Grow));
        assert_eq!(cfg.yes_button_text.as_deref(), Some("Yes"));
        let phrases = crate::page::parse_phrases(cfg.no_button_phrases.as_deref().unwrap());
        assert_eq!(phrases.len(), 5);
        assert_eq!(phrases[0], "Are you sure?");
        assert!(cfg.background_image.is_none());
    }

    #[test]
    fn camel_case_keys_are_accepted() {
        let yaml = "firstImage: a.png\nyesClickText: yay\nbuttonAnimation: random\nnoButtonPhrases: \"Nope\\nNever\"\n";
        let cfg = parse_config(Path::new("c.yml"), yaml).unwrap();
        assert_eq!(cfg.first_image.as_deref(), Some("a.png"));
        assert_eq!(cfg.yes_click_text.as_deref(), Some("yay"));
        assert_eq!(cfg.button_animation, Some(ButtonAnimation::Random));
        assert_eq!(cfg.no_button_phrases.as_deref(), Some("Nope\nNever"));
    }

    #[test]
    fn unknown_animation_is_a_parse_error() {
        let err = parse_config(Path::new("bad.yml"), "button_animation: spin\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("bad.yml"));
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(
            parse_config(Path::new("e.yml"), "  \n").unwrap(),
            ConfigFile::default()
        );
    }

    #[test]
    fn missing_file_respects_allow_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yml");
        assert_eq!(load_config(&path, true).unwrap(), ConfigFile::default());
        assert!(matches!(
            load_config(&path, false),
            Err(ConfigError::NotFound { .. })
        ));
    }

    #[test]
    fn ensure_default_writes_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yml");
        assert!(ensure_default_config_file(&path).unwrap());
        std::fs::write(&path, "title: mine\n").unwrap();
        assert!(!ensure_default_config_file(&path).unwrap());
        let cfg = load_config(&path, false).unwrap();
        assert_eq!(cfg.title.as_deref(), Some("mine"));
    }

    #[test]
    fn expand_tilde_leaves_plain_paths() {
        assert_eq!(expand_tilde("./cfg.yml"), PathBuf::from("./cfg.yml"));
    }
}
