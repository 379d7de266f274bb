//! Quest tracking.
//!
//! Quests form an ordered list built from localized templates. Progress is
//! clamped at the target and never decreases; the single "active" quest is
//! always the first incomplete one in declaration order. When the display
//! language changes the list is rebuilt from new templates with progress
//! preserved position-by-position.

use questline_types::QuestDefinition;
use serde::Serialize;

/// A quest with its runtime progress.
#[derive(Debug, Clone, Serialize)]
pub struct Quest {
    pub id: String,
    pub title: String,
    pub description: String,
    pub target: u32,
    pub current: u32,
    pub reward_xp: u64,
    pub is_completed: bool,
}

impl Quest {
    fn from_definition(def: &QuestDefinition) -> Self {
        Self {
            id: def.id.clone(),
            title: def.title.clone(),
            description: def.description.clone(),
            target: def.target,
            current: 0,
            reward_xp: def.reward_xp,
            is_completed: false,
        }
    }
}

/// Outcome of a progress update.
#[derive(Debug, Clone, PartialEq)]
pub enum QuestAdvance {
    /// Unknown quest id, or the quest was already completed. Nothing changed.
    Ignored,
    /// Progress moved but the target was not reached.
    Progressed { current: u32, target: u32 },
    /// This update reached the target. Completion side effects (reward,
    /// toast, log) are deferred by the caller.
    Finished { title: String, reward_xp: u64 },
}

/// Ordered quest list with progress tracking.
#[derive(Debug, Default)]
pub struct QuestTracker {
    quests: Vec<Quest>,
}

impl QuestTracker {
    /// Build the quest list from localized templates, all at zero progress.
    pub fn from_definitions(defs: &[QuestDefinition]) -> Self {
        Self {
            quests: defs.iter().map(Quest::from_definition).collect(),
        }
    }

    /// Advance a quest by `amount`, clamped at its target.
    ///
    /// Updates for unknown ids or already-completed quests are dropped
    /// silently; a completed quest never re-fires its completion.
    pub fn advance(&mut self, quest_id: &str, amount: u32) -> QuestAdvance {
        let Some(quest) = self.quests.iter_mut().find(|q| q.id == quest_id) else {
            return QuestAdvance::Ignored;
        };
        if quest.is_completed {
            return QuestAdvance::Ignored;
        }

        quest.current = (quest.current + amount).min(quest.target);
        if quest.current >= quest.target {
            quest.is_completed = true;
            QuestAdvance::Finished {
                title: quest.title.clone(),
                reward_xp: quest.reward_xp,
            }
        } else {
            QuestAdvance::Progressed {
                current: quest.current,
                target: quest.target,
            }
        }
    }

    /// Rebuild the list from freshly localized templates, copying progress
    /// from the same position of the old list. Positions with no
    /// predecessor start at zero progress.
    pub fn reinitialize(&mut self, defs: &[QuestDefinition]) {
        let relocalized = defs
            .iter()
            .enumerate()
            .map(|(i, def)| {
                let mut quest = Quest::from_definition(def);
                if let Some(prev) = self.quests.get(i) {
                    quest.current = prev.current;
                    quest.is_completed = prev.is_completed;
                }
                quest
            })
            .collect();
        self.quests = relocalized;
    }

    /// The first incomplete quest in declaration order, or `None` once all
    /// are done. Recomputed on every call so any list change is reflected.
    pub fn active(&self) -> Option<&Quest> {
        self.quests.iter().find(|q| !q.is_completed)
    }

    /// Look up a quest by id.
    pub fn get(&self, quest_id: &str) -> Option<&Quest> {
        self.quests.iter().find(|q| q.id == quest_id)
    }

    /// All quests in declaration order.
    pub fn quests(&self) -> &[Quest] {
        &self.quests
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defs() -> Vec<QuestDefinition> {
        vec![
            QuestDefinition {
                id: "q1".into(),
                title: "First".into(),
                description: "first quest".into(),
                target: 1,
                reward_xp: 150,
            },
            QuestDefinition {
                id: "q2".into(),
                title: "Second".into(),
                description: "second quest".into(),
                target: 5,
                reward_xp: 300,
            },
        ]
    }

    #[test]
    fn test_progress_clamps_at_target() {
        let mut tracker = QuestTracker::from_definitions(&defs());

        assert_eq!(
            tracker.advance("q2", 3),
            QuestAdvance::Progressed {
                current: 3,
                target: 5
            }
        );
        // 3 + 3 would overshoot; clamp to 5 and finish.
        assert_eq!(
            tracker.advance("q2", 3),
            QuestAdvance::Finished {
                title: "Second".into(),
                reward_xp: 300
            }
        );
        let quest = tracker.get("q2").unwrap();
        assert_eq!(quest.current, 5);
        assert!(quest.is_completed);
    }

    #[test]
    fn test_completed_quest_never_refires() {
        let mut tracker = QuestTracker::from_definitions(&defs());
        tracker.advance("q1", 1);

        assert_eq!(tracker.advance("q1", 1), QuestAdvance::Ignored);
        let quest = tracker.get("q1").unwrap();
        assert_eq!(quest.current, 1);
        assert!(quest.is_completed);
    }

    #[test]
    fn test_unknown_id_is_dropped() {
        let mut tracker = QuestTracker::from_definitions(&defs());
        assert_eq!(tracker.advance("nope", 1), QuestAdvance::Ignored);
    }

    #[test]
    fn test_active_is_first_incomplete() {
        let mut tracker = QuestTracker::from_definitions(&defs());
        assert_eq!(tracker.active().unwrap().id, "q1");

        tracker.advance("q1", 1);
        assert_eq!(tracker.active().unwrap().id, "q2");

        tracker.advance("q2", 5);
        assert!(tracker.active().is_none());
    }

    #[test]
    fn test_reinitialize_preserves_progress_positionally() {
        let mut tracker = QuestTracker::from_definitions(&defs());
        tracker.advance("q1", 1);
        tracker.advance("q2", 2);

        let localized = vec![
            QuestDefinition {
                id: "q1".into(),
                title: "Birinci".into(),
                description: "ilk görev".into(),
                target: 1,
                reward_xp: 150,
            },
            QuestDefinition {
                id: "q2".into(),
                title: "İkinci".into(),
                description: "ikinci görev".into(),
                target: 5,
                reward_xp: 300,
            },
        ];
        tracker.reinitialize(&localized);

        let first = tracker.get("q1").unwrap();
        assert_eq!(first.title, "Birinci");
        assert!(first.is_completed);

        let second = tracker.get("q2").unwrap();
        assert_eq!(second.title, "İkinci");
        assert_eq!(second.current, 2);
        assert!(!second.is_completed);

        // Active skips the completed first quest after the swap too.
        assert_eq!(tracker.active().unwrap().id, "q2");
    }

    #[test]
    fn test_reinitialize_length_mismatch_defaults_to_zero() {
        let mut tracker = QuestTracker::from_definitions(&defs()[..1]);
        tracker.advance("q1", 1);

        tracker.reinitialize(&defs());
        assert!(tracker.get("q1").unwrap().is_completed);

        let extra = tracker.get("q2").unwrap();
        assert_eq!(extra.current, 0);
        assert!(!extra.is_completed);
    }
}
