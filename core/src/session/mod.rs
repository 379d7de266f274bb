//! Session state and interaction routing.
//!
//! [`GameSession`] is the single owned state object behind the workspace
//! UI: it holds every tracker, routes user interactions through them, and
//! returns the resulting [`GameEvent`] list from each call. The caller
//! drives time by passing `now` into interactions and by calling
//! [`GameSession::tick`] regularly to reap expired effects and run
//! deferred actions.

mod log;

pub use log::{LogEntry, LogFeed};

use chrono::{Duration, NaiveDateTime};
use hashbrown::HashSet;
use questline_types::{
    formatting, FloatColor, Locale, LogLevel, QuestDefinition, SkillDefinition, ToastKind, ViewId,
};
use serde::Serialize;

use crate::achievements::{Achievement, AchievementRegistry};
use crate::content::{ids, ContentSet};
use crate::effects::{EffectId, EffectTracker, FloatingText, Toast};
use crate::events::GameEvent;
use crate::locale::{self, Strings};
use crate::progression::ProgressionTracker;
use crate::quests::{Quest, QuestAdvance, QuestTracker};
use crate::schedule::{ActionQueue, DeferredAction};

/// XP for visiting a view for the first time.
const XP_VIEW_VISIT: u64 = 50;
/// XP for squashing a bug marker.
const XP_BUG_CATCH: u64 = 100;
/// XP for poking a skill card.
const XP_SKILL_CLICK: u64 = 10;

/// Delay between a quest reaching its target and the reward payout, so the
/// progress bar can finish filling before the toast lands.
const QUEST_PAYOUT_DELAY_MS: i64 = 500;

/// Lead time before the first simulated test line.
const SUITE_LEAD_MS: i64 = 800;
/// Gap between simulated test steps.
const SUITE_STEP_MS: i64 = 200;
/// How many skills the simulated suite exercises.
const SUITE_SKILL_COUNT: usize = 5;

/// A clickable bug marker, positioned in percent screen coordinates.
#[derive(Debug, Clone, Serialize)]
pub struct BugMarker {
    pub id: String,
    pub x: f32,
    pub y: f32,
    pub caught: bool,
}

/// Aggregate HUD state for the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct HudSnapshot {
    pub xp: u64,
    pub level: u32,
    pub next_level_xp: u64,
    /// Progress toward the next level, 0-100.
    pub xp_percent: f32,
    pub coverage_percent: f32,
    pub achievement_count: usize,
    pub active_quest: Option<Quest>,
    pub floating_texts: Vec<FloatingText>,
    pub toasts: Vec<Toast>,
}

/// The gamification engine behind the workspace UI.
#[derive(Debug)]
pub struct GameSession {
    locale: Locale,
    strings: Strings,
    progression: ProgressionTracker,
    achievements: AchievementRegistry,
    quests: QuestTracker,
    effects: EffectTracker,
    schedule: ActionQueue,
    log: LogFeed,
    content: ContentSet,
    visited: HashSet<ViewId>,
    current_view: ViewId,
    bugs: Vec<BugMarker>,
}

impl GameSession {
    /// New session with builtin content for the given locale.
    pub fn new(locale: Locale) -> Self {
        Self::with_content(locale, ContentSet::builtin(locale))
    }

    /// New session with an explicit content set (builtin plus overrides).
    pub fn with_content(locale: Locale, content: ContentSet) -> Self {
        Self {
            locale,
            strings: locale::strings(locale),
            progression: ProgressionTracker::new(),
            achievements: AchievementRegistry::new(),
            quests: QuestTracker::from_definitions(&content.quests),
            effects: EffectTracker::new(),
            schedule: ActionQueue::new(),
            log: LogFeed::new(),
            content,
            visited: HashSet::new(),
            current_view: ViewId::Overview,
            bugs: seed_bugs(),
        }
    }

    // ─── Interactions ────────────────────────────────────────────────────────

    /// Switch to another view. First visits award XP, move the coverage
    /// meter, and tick the exploration quest; covering all views unlocks
    /// the coverage achievement. Re-selecting the current view is a no-op.
    pub fn navigate(&mut self, view: ViewId, now: NaiveDateTime) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if view == self.current_view {
            return events;
        }

        self.current_view = view;
        self.log
            .push(now, LogLevel::Info, format!("Navigating to ./{}", view.path()));

        if self.visited.insert(view) {
            events.push(GameEvent::CoverageChanged {
                visited: self.visited.len(),
                percent: self.coverage_percent(),
            });
            self.grant_xp(XP_VIEW_VISIT, None, now, &mut events);
            self.advance_quest(ids::QUEST_EXPLORE, 1, now, &mut events);

            if self.visited.len() == ViewId::ALL.len() {
                self.unlock_achievement(ids::ACH_COVERAGE, now, &mut events);
            }
        }

        events
    }

    /// Kick off the simulated test-suite run. Log lines for each of the
    /// first five skills are scheduled across the delay sequence; the
    /// result line, achievement, and quest tick land with the final step.
    pub fn run_test_suite(
        &mut self,
        origin: Option<(f32, f32)>,
        now: NaiveDateTime,
    ) -> Vec<GameEvent> {
        let mut events = Vec::new();

        if let Some((x, y)) = origin {
            self.effects
                .spawn_float("Running...", x, y, FloatColor::Blue, now);
        }
        self.log
            .push(now, LogLevel::Info, "Initializing Test Suite...");

        let tests = self.content.skills.len().min(SUITE_SKILL_COUNT);
        for (i, skill) in self.content.skills.iter().take(tests).enumerate() {
            let test_at = now + Duration::milliseconds(SUITE_LEAD_MS + i as i64 * SUITE_STEP_MS);
            self.schedule.push(
                test_at,
                DeferredAction::LogLine {
                    message: format!("TEST: Verifying proficiency in {}...", skill.name),
                    level: LogLevel::Info,
                },
            );
            self.schedule.push(
                test_at + Duration::milliseconds(SUITE_STEP_MS),
                DeferredAction::LogLine {
                    message: format!("PASS: Proficiency detected at {}%", skill.level),
                    level: LogLevel::Success,
                },
            );
        }

        let finish_at =
            now + Duration::milliseconds(SUITE_LEAD_MS + tests as i64 * SUITE_STEP_MS);
        self.schedule
            .push(finish_at, DeferredAction::SuiteFinish { tests });

        events.push(GameEvent::SuiteStarted);
        events
    }

    /// Squash a bug marker. Unknown or already-caught ids are dropped.
    /// Catching the last remaining bug unlocks the hunter achievement.
    pub fn catch_bug(
        &mut self,
        bug_id: &str,
        x: f32,
        y: f32,
        now: NaiveDateTime,
    ) -> Vec<GameEvent> {
        let mut events = Vec::new();
        let Some(bug) = self.bugs.iter_mut().find(|b| b.id == bug_id && !b.caught) else {
            return events;
        };
        bug.caught = true;
        let remaining = self.bugs.iter().filter(|b| !b.caught).count();
        tracing::debug!(bug_id, remaining, "bug caught");

        self.log
            .push(now, LogLevel::Success, "BUG SQUASHED! Fixed UI glitch.");
        self.effects
            .spawn_float("BUG SQUASHED!", x, y, FloatColor::Red, now);
        self.effects
            .spawn_float(format!("+{XP_BUG_CATCH} XP"), x, y - 30.0, FloatColor::Yellow, now);

        events.push(GameEvent::BugCaught {
            bug_id: bug_id.to_string(),
            remaining,
        });
        self.grant_xp(XP_BUG_CATCH, None, now, &mut events);
        self.advance_quest(ids::QUEST_BUGS, 1, now, &mut events);

        if remaining == 0 {
            self.unlock_achievement(ids::ACH_BUGS, now, &mut events);
        }

        events
    }

    /// Record a contact-form submission. The mail-composition handoff
    /// itself stays with the caller.
    pub fn submit_contact(&mut self, now: NaiveDateTime) -> Vec<GameEvent> {
        let mut events = Vec::new();

        self.log.push(
            now,
            LogLevel::Success,
            "Uplink established. Data transmitted.",
        );
        self.unlock_achievement(ids::ACH_CONTACT, now, &mut events);
        self.effects.spawn_toast(
            "Uplink Successful",
            self.strings.sent_success,
            ToastKind::Achievement,
            now,
        );
        events.push(GameEvent::ContactTransmitted);

        events
    }

    /// Poke a skill card: a "Running ..." marker plus a small XP award.
    /// Unknown skill ids are dropped.
    pub fn click_skill(
        &mut self,
        skill_id: &str,
        x: f32,
        y: f32,
        now: NaiveDateTime,
    ) -> Vec<GameEvent> {
        let mut events = Vec::new();
        let Some(skill) = self.content.skills.iter().find(|s| s.id == skill_id) else {
            return events;
        };

        let text = format!("Running {}...", skill.name);
        self.effects
            .spawn_float(text, x, y, FloatColor::Emerald, now);
        self.grant_xp(XP_SKILL_CLICK, Some((x, y - 20.0)), now, &mut events);

        events
    }

    /// Switch the display language. Label strings swap and the quest list
    /// is rebuilt from the new locale's templates with progress preserved
    /// position-by-position.
    pub fn set_locale(&mut self, locale: Locale) {
        if locale == self.locale {
            return;
        }
        tracing::debug!(?locale, "locale changed");
        self.locale = locale;
        self.strings = locale::strings(locale);
        self.quests.reinitialize(&locale::quest_templates(locale));
    }

    /// Rebuild the quest list from caller-supplied localized templates,
    /// preserving progress positionally. For sessions running custom
    /// content, call this after [`GameSession::set_locale`] with the
    /// re-localized custom list.
    pub fn reinitialize_quests(&mut self, templates: &[QuestDefinition]) {
        self.quests.reinitialize(templates);
    }

    /// Dismiss a toast before its expiry. Idempotent.
    pub fn dismiss_toast(&mut self, id: EffectId) -> bool {
        self.effects.dismiss_toast(id)
    }

    /// Advance time: reap expired effects and execute due deferred
    /// actions, returning the events those actions produce.
    pub fn tick(&mut self, now: NaiveDateTime) -> Vec<GameEvent> {
        let mut events = Vec::new();

        self.effects.tick(now);

        for action in self.schedule.take_due(now) {
            match action {
                DeferredAction::LogLine { message, level } => {
                    self.log.push(now, level, message);
                }
                DeferredAction::QuestPayout { quest_id } => {
                    self.quest_payout(&quest_id, now, &mut events);
                }
                DeferredAction::SuiteFinish { tests } => {
                    self.log.push(
                        now,
                        LogLevel::Success,
                        format!("SUITE RESULT: {tests}/{tests} TESTS PASSED"),
                    );
                    events.push(GameEvent::SuiteFinished {
                        passed: tests,
                        total: tests,
                    });
                    self.unlock_achievement(ids::ACH_SUITE, now, &mut events);
                    self.advance_quest(ids::QUEST_SUITE, 1, now, &mut events);
                }
            }
        }

        events
    }

    // ─── Internal effects ────────────────────────────────────────────────────

    /// Add XP, optionally with an XP float at `origin`. Crossing the level
    /// threshold spawns the level-up toast and log entry.
    fn grant_xp(
        &mut self,
        amount: u64,
        origin: Option<(f32, f32)>,
        now: NaiveDateTime,
        events: &mut Vec<GameEvent>,
    ) {
        if let Some((x, y)) = origin {
            self.effects
                .spawn_float(format!("+{amount} XP"), x, y, FloatColor::Emerald, now);
        }

        let leveled = self.progression.award(amount);
        events.push(GameEvent::XpAwarded {
            amount,
            total: self.progression.xp(),
        });

        if let Some(new_level) = leveled {
            tracing::debug!(new_level, "level up");
            self.effects.spawn_toast(
                format!("{} {}", self.strings.level_up, new_level),
                String::new(),
                ToastKind::LevelUp,
                now,
            );
            self.log.push(
                now,
                LogLevel::Success,
                format!("LEVEL UP! You are now Level {new_level}"),
            );
            events.push(GameEvent::LeveledUp { new_level });
        }
    }

    /// Unlock an achievement by content id. Duplicate unlocks change
    /// nothing and award nothing.
    fn unlock_achievement(
        &mut self,
        achievement_id: &str,
        now: NaiveDateTime,
        events: &mut Vec<GameEvent>,
    ) {
        let Some(def) = self
            .content
            .achievements
            .iter()
            .find(|a| a.id == achievement_id)
            .cloned()
        else {
            return;
        };

        if self.achievements.unlock(&def.title, def.xp_value).is_none() {
            return;
        }
        tracing::debug!(title = %def.title, "achievement unlocked");

        self.log.push(
            now,
            LogLevel::Success,
            format!("ACHIEVEMENT UNLOCKED: {}", def.title),
        );
        self.effects.spawn_toast(
            def.title.clone(),
            self.strings.achievement_unlocked,
            ToastKind::Achievement,
            now,
        );
        events.push(GameEvent::AchievementUnlocked {
            title: def.title,
            xp_value: def.xp_value,
        });
        self.grant_xp(def.xp_value, None, now, events);
    }

    /// Move a quest forward. Reaching the target defers the payout by the
    /// progress-bar delay.
    fn advance_quest(
        &mut self,
        quest_id: &str,
        amount: u32,
        now: NaiveDateTime,
        events: &mut Vec<GameEvent>,
    ) {
        match self.quests.advance(quest_id, amount) {
            QuestAdvance::Ignored => {}
            QuestAdvance::Progressed { current, target } => {
                events.push(GameEvent::QuestAdvanced {
                    quest_id: quest_id.to_string(),
                    current,
                    target,
                });
            }
            QuestAdvance::Finished { .. } => {
                let target = self
                    .quests
                    .get(quest_id)
                    .map(|q| q.target)
                    .unwrap_or_default();
                events.push(GameEvent::QuestAdvanced {
                    quest_id: quest_id.to_string(),
                    current: target,
                    target,
                });
                self.schedule.push(
                    now + Duration::milliseconds(QUEST_PAYOUT_DELAY_MS),
                    DeferredAction::QuestPayout {
                        quest_id: quest_id.to_string(),
                    },
                );
            }
        }
    }

    /// Completion payout: XP, then toast, then log entry. The active
    /// quest needs no explicit recompute; it is derived from the list on
    /// every read.
    fn quest_payout(&mut self, quest_id: &str, now: NaiveDateTime, events: &mut Vec<GameEvent>) {
        let Some((title, reward_xp)) = self
            .quests
            .get(quest_id)
            .map(|q| (q.title.clone(), q.reward_xp))
        else {
            return;
        };
        tracing::debug!(quest_id, reward_xp, "quest completed");

        self.grant_xp(reward_xp, None, now, events);
        self.effects.spawn_toast(
            title.clone(),
            format!("{}! +{} XP", self.strings.quest_complete, reward_xp),
            ToastKind::Quest,
            now,
        );
        self.log
            .push(now, LogLevel::Success, format!("QUEST COMPLETE: {title}"));
        events.push(GameEvent::QuestCompleted {
            quest_id: quest_id.to_string(),
            title,
            reward_xp,
        });
    }

    // ─── Accessors ───────────────────────────────────────────────────────────

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn xp(&self) -> u64 {
        self.progression.xp()
    }

    pub fn level(&self) -> u32 {
        self.progression.level()
    }

    pub fn next_level_xp(&self) -> u64 {
        self.progression.next_level_xp()
    }

    /// Share of views visited this session, 0-100.
    pub fn coverage_percent(&self) -> f32 {
        formatting::coverage_percent(self.visited.len(), ViewId::ALL.len())
    }

    pub fn achievement_count(&self) -> usize {
        self.achievements.count()
    }

    pub fn achievements(&self) -> impl Iterator<Item = &Achievement> {
        self.achievements.iter()
    }

    /// First incomplete quest in declaration order, or `None` when all are
    /// done.
    pub fn active_quest(&self) -> Option<&Quest> {
        self.quests.active()
    }

    pub fn quests(&self) -> &[Quest] {
        self.quests.quests()
    }

    pub fn floating_texts(&self) -> &[FloatingText] {
        self.effects.floating_texts()
    }

    pub fn toasts(&self) -> &[Toast] {
        self.effects.toasts()
    }

    pub fn log(&self) -> &LogFeed {
        &self.log
    }

    pub fn log_mut(&mut self) -> &mut LogFeed {
        &mut self.log
    }

    pub fn bugs(&self) -> &[BugMarker] {
        &self.bugs
    }

    pub fn skills(&self) -> &[SkillDefinition] {
        &self.content.skills
    }

    pub fn current_view(&self) -> ViewId {
        self.current_view
    }

    /// Aggregate HUD state for rendering.
    pub fn hud(&self) -> HudSnapshot {
        HudSnapshot {
            xp: self.xp(),
            level: self.level(),
            next_level_xp: self.next_level_xp(),
            xp_percent: formatting::progress_percent(self.xp(), self.next_level_xp()),
            coverage_percent: self.coverage_percent(),
            achievement_count: self.achievement_count(),
            active_quest: self.active_quest().cloned(),
            floating_texts: self.effects.floating_texts().to_vec(),
            toasts: self.effects.toasts().to_vec(),
        }
    }

    /// HUD snapshot as JSON, for presentation layers across a bridge.
    pub fn hud_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.hud())
    }
}

/// The three bug markers hidden around the workspace.
fn seed_bugs() -> Vec<BugMarker> {
    vec![
        BugMarker {
            id: "bug-nav".to_string(),
            x: 85.0,
            y: 12.0,
            caught: false,
        },
        BugMarker {
            id: "bug-term".to_string(),
            x: 25.0,
            y: 92.0,
            caught: false,
        },
        BugMarker {
            id: "bug-hero".to_string(),
            x: 10.0,
            y: 35.0,
            caught: false,
        },
    ]
}
