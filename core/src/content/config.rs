//! Content loading from TOML files.
//!
//! Builtin definitions ship with the engine; users may drop TOML files in
//! a config directory to override them by id or add new entries. Files
//! that fail to load are skipped so one bad file never takes down the
//! whole content set.

use std::fs;
use std::path::{Path, PathBuf};

use questline_types::{AchievementDefinition, Locale, QuestDefinition, SkillDefinition};
use serde::Deserialize;
use thiserror::Error;

use super::ContentSet;

/// Shape of a user content file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentFile {
    #[serde(default)]
    pub quest: Vec<QuestDefinition>,
    #[serde(default)]
    pub achievement: Vec<AchievementDefinition>,
    #[serde(default)]
    pub skill: Vec<SkillDefinition>,
}

/// Errors that can occur while loading content files.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Parse error in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Load the content set for a locale: builtin definitions, then any TOML
/// overrides found in `custom_dir`.
///
/// Override files are loaded in directory order; entries replace builtin
/// entries with the same id. A file that fails to read or parse is logged
/// and skipped.
pub fn load_content(locale: Locale, custom_dir: Option<&Path>) -> Result<ContentSet, ContentError> {
    let mut set = ContentSet::builtin(locale);

    if let Some(dir) = custom_dir {
        if dir.exists() {
            load_directory(&mut set, dir)?;
        }
    }

    Ok(set)
}

/// Load all TOML files from a directory into the set.
fn load_directory(set: &mut ContentSet, dir: &Path) -> Result<(), ContentError> {
    let entries = fs::read_dir(dir).map_err(|e| ContentError::Io {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry in entries.flatten() {
        let path = entry.path();

        if path.extension().is_some_and(|ext| ext == "toml") {
            match load_file(&path) {
                Ok(file) => {
                    let overridden = set.merge(file);
                    if !overridden.is_empty() {
                        tracing::debug!(?path, ?overridden, "content file overrides builtin ids");
                    }
                }
                Err(e) => {
                    // Skip the bad file, keep loading the rest.
                    tracing::warn!(?path, error = %e, "failed to load content file");
                }
            }
        }
    }

    Ok(())
}

/// Load a single TOML content file.
pub fn load_file(path: &Path) -> Result<ContentFile, ContentError> {
    let contents = fs::read_to_string(path).map_err(|e| ContentError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&contents).map_err(|e| ContentError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Default directory for user content files.
pub fn default_custom_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("questline").join("content"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ids;

    #[test]
    fn test_parse_content_toml() {
        let toml = r#"
[[quest]]
id = "q_custom"
title = "Night Shift"
description = "Run the suite after midnight."
target = 1
reward_xp = 150

[[achievement]]
id = "ach_custom"
title = "Night Owl"
xp_value = 100
"#;

        let file: ContentFile = toml::from_str(toml).unwrap();
        assert_eq!(file.quest.len(), 1);
        assert_eq!(file.achievement.len(), 1);
        assert!(file.skill.is_empty());
        assert_eq!(file.quest[0].id, "q_custom");
    }

    #[test]
    fn test_merge_overrides_by_id_in_place() {
        let mut set = ContentSet::builtin(Locale::En);
        let original_position = set
            .quests
            .iter()
            .position(|q| q.id == ids::QUEST_BUGS)
            .unwrap();

        let file: ContentFile = toml::from_str(
            r#"
[[quest]]
id = "q_bugs"
title = "Exterminator"
description = "Different text, same slot."
target = 3
reward_xp = 300
"#,
        )
        .unwrap();

        let overridden = set.merge(file);
        assert_eq!(overridden, vec!["q_bugs".to_string()]);

        let position = set
            .quests
            .iter()
            .position(|q| q.id == ids::QUEST_BUGS)
            .unwrap();
        assert_eq!(position, original_position);
        assert_eq!(set.quests[position].title, "Exterminator");
    }

    #[test]
    fn test_merge_appends_new_entries() {
        let mut set = ContentSet::builtin(Locale::En);
        let quest_count = set.quests.len();

        let file: ContentFile = toml::from_str(
            r#"
[[quest]]
id = "q_extra"
title = "Encore"
description = "One more thing."
target = 2
reward_xp = 200
"#,
        )
        .unwrap();

        assert!(set.merge(file).is_empty());
        assert_eq!(set.quests.len(), quest_count + 1);
        assert_eq!(set.quests.last().unwrap().id, "q_extra");
    }
}
