//! Content definitions
//!
//! This module provides:
//! - **Builtin content**: the quest line, achievement catalog, and skill
//!   list shipped with the engine
//! - **Overrides**: user-supplied TOML files that replace builtin entries
//!   by id (loaded from a config directory)

mod config;

pub use config::{default_custom_dir, load_content, load_file, ContentError, ContentFile};

use questline_types::{AchievementDefinition, Locale, QuestDefinition, SkillCategory, SkillDefinition};

use crate::locale;

/// Stable ids for builtin content referenced by interaction handlers.
pub mod ids {
    pub const QUEST_SUITE: &str = "q_suite";
    pub const QUEST_BUGS: &str = "q_bugs";
    pub const QUEST_EXPLORE: &str = "q_explore";

    pub const ACH_SUITE: &str = "ach_automation_master";
    pub const ACH_BUGS: &str = "ach_bug_hunter";
    pub const ACH_COVERAGE: &str = "ach_full_coverage";
    pub const ACH_CONTACT: &str = "ach_social_butterfly";
}

/// The full set of definitions a session is built from.
#[derive(Debug, Clone, Default)]
pub struct ContentSet {
    /// Quests in declaration order (order defines the active-quest rule).
    pub quests: Vec<QuestDefinition>,
    pub achievements: Vec<AchievementDefinition>,
    pub skills: Vec<SkillDefinition>,
}

impl ContentSet {
    /// Builtin content for a locale.
    pub fn builtin(locale: Locale) -> Self {
        Self {
            quests: locale::quest_templates(locale),
            achievements: builtin_achievements(),
            skills: builtin_skills(),
        }
    }

    /// Merge a parsed content file, replacing entries with matching ids in
    /// place (position in the quest list is preserved) and appending new
    /// ones. Returns the ids that were overridden.
    pub fn merge(&mut self, file: ContentFile) -> Vec<String> {
        let mut overridden = Vec::new();

        for quest in file.quest {
            if let Some(existing) = self.quests.iter_mut().find(|q| q.id == quest.id) {
                overridden.push(quest.id.clone());
                *existing = quest;
            } else {
                self.quests.push(quest);
            }
        }

        for achievement in file.achievement {
            if let Some(existing) = self
                .achievements
                .iter_mut()
                .find(|a| a.id == achievement.id)
            {
                overridden.push(achievement.id.clone());
                *existing = achievement;
            } else {
                self.achievements.push(achievement);
            }
        }

        for skill in file.skill {
            if let Some(existing) = self.skills.iter_mut().find(|s| s.id == skill.id) {
                overridden.push(skill.id.clone());
                *existing = skill;
            } else {
                self.skills.push(skill);
            }
        }

        overridden
    }
}

/// The builtin achievement catalog.
pub fn builtin_achievements() -> Vec<AchievementDefinition> {
    vec![
        AchievementDefinition {
            id: ids::ACH_SUITE.to_string(),
            title: "Automation Master".to_string(),
            xp_value: 150,
        },
        AchievementDefinition {
            id: ids::ACH_BUGS.to_string(),
            title: "Bug Hunter".to_string(),
            xp_value: 200,
        },
        AchievementDefinition {
            id: ids::ACH_COVERAGE.to_string(),
            title: "Full Coverage".to_string(),
            xp_value: 500,
        },
        AchievementDefinition {
            id: ids::ACH_CONTACT.to_string(),
            title: "Social Butterfly".to_string(),
            xp_value: 100,
        },
    ]
}

/// The builtin skill cards. The first five feed the simulated test suite.
pub fn builtin_skills() -> Vec<SkillDefinition> {
    let skills = [
        ("selenium", "Selenium", 95, SkillCategory::Automation, true),
        ("appium", "Appium", 88, SkillCategory::Automation, true),
        ("cypress", "Cypress", 82, SkillCategory::Automation, false),
        ("postman", "Postman", 90, SkillCategory::Api, true),
        ("java", "Java", 85, SkillCategory::Languages, false),
        ("jenkins", "Jenkins", 78, SkillCategory::Devops, false),
        ("jira", "Jira", 92, SkillCategory::Tracking, true),
    ];

    skills
        .into_iter()
        .map(|(id, name, level, category, mastered)| SkillDefinition {
            id: id.to_string(),
            name: name.to_string(),
            level,
            category,
            mastered,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_ids_are_resolvable() {
        let content = ContentSet::builtin(Locale::En);
        assert!(content.quests.iter().any(|q| q.id == ids::QUEST_SUITE));
        assert!(content.quests.iter().any(|q| q.id == ids::QUEST_BUGS));
        assert!(content.quests.iter().any(|q| q.id == ids::QUEST_EXPLORE));
        for id in [ids::ACH_SUITE, ids::ACH_BUGS, ids::ACH_COVERAGE, ids::ACH_CONTACT] {
            assert!(content.achievements.iter().any(|a| a.id == id));
        }
        assert!(content.skills.len() >= 5);
    }
}
