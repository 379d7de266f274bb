//! Shared types for the Questline engine.
//!
//! Pure data definitions consumed by both the engine core and whatever
//! presentation layer sits on top of it: content definitions (quests,
//! achievements, skills), display tags for transient effects, and the
//! identifiers for the navigable views.

use serde::{Deserialize, Serialize};

pub mod formatting;

/// Display language for quest text and toast labels.
///
/// Engine log templates are not affected by the locale; only content
/// strings handed to the presentation layer are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Tr,
    Es,
    Zh,
    Hi,
    Ar,
}

impl Default for Locale {
    fn default() -> Self {
        Locale::En
    }
}

/// Category tag on a toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastKind {
    Achievement,
    LevelUp,
    Quest,
}

/// Severity tag on a terminal log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Info,
    Warn,
    Error,
    Success,
    Command,
}

/// Presentation tag for a floating text effect.
///
/// The engine never renders anything; it only labels each effect so the
/// presentation layer can pick a style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FloatColor {
    White,
    Emerald,
    Blue,
    Yellow,
    Red,
}

/// One of the five navigable views of the workspace UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewId {
    Overview,
    About,
    Skills,
    History,
    Contact,
}

impl ViewId {
    /// All views, in tab order. Coverage is measured against this list.
    pub const ALL: [ViewId; 5] = [
        ViewId::Overview,
        ViewId::About,
        ViewId::Skills,
        ViewId::History,
        ViewId::Contact,
    ];

    /// The pseudo-file path shown in the tab bar and in navigation logs.
    pub fn path(&self) -> &'static str {
        match self {
            ViewId::Overview => "overview",
            ViewId::About => "about.md",
            ViewId::Skills => "skills.spec.ts",
            ViewId::History => "history.log",
            ViewId::Contact => "report_bug.form",
        }
    }
}

/// Quest template as declared in content files.
///
/// Runtime progress (`current`, `is_completed`) lives on the engine's own
/// quest records, not on the definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestDefinition {
    pub id: String,
    pub title: String,
    pub description: String,
    pub target: u32,
    pub reward_xp: u64,
}

/// Achievement template: a named one-time milestone and its XP reward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementDefinition {
    pub id: String,
    pub title: String,
    pub xp_value: u64,
}

/// Skill area shown on the skills view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Automation,
    Languages,
    Api,
    Devops,
    Tracking,
}

/// A skill card: clickable on the skills view, and fixture data for the
/// simulated test-suite run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillDefinition {
    pub id: String,
    pub name: String,
    /// Proficiency, 1-100.
    pub level: u8,
    pub category: SkillCategory,
    #[serde(default)]
    pub mastered: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quest_toml() {
        let toml = r#"
[[quest]]
id = "q_suite"
title = "First Light"
description = "Run the automation suite once."
target = 1
reward_xp = 150
"#;

        #[derive(Deserialize)]
        struct QuestFile {
            quest: Vec<QuestDefinition>,
        }

        let file: QuestFile = toml::from_str(toml).unwrap();
        assert_eq!(file.quest.len(), 1);
        assert_eq!(file.quest[0].id, "q_suite");
        assert_eq!(file.quest[0].target, 1);
        assert_eq!(file.quest[0].reward_xp, 150);
    }

    #[test]
    fn test_parse_skill_toml_defaults_mastered() {
        let toml = r#"
[[skill]]
id = "selenium"
name = "Selenium"
level = 95
category = "automation"
"#;

        #[derive(Deserialize)]
        struct SkillFile {
            skill: Vec<SkillDefinition>,
        }

        let file: SkillFile = toml::from_str(toml).unwrap();
        assert_eq!(file.skill[0].category, SkillCategory::Automation);
        assert!(!file.skill[0].mastered);
    }

    #[test]
    fn test_view_paths_are_distinct() {
        let mut paths: Vec<_> = ViewId::ALL.iter().map(|v| v.path()).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), ViewId::ALL.len());
    }
}
