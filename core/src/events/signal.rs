/// Notifications emitted by mutating session calls.
///
/// Every interaction returns the list of things that happened so the
/// presentation layer can decide what to render. Events are ordered the
/// way they occurred inside the call; none are delivered through
/// callbacks.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// XP was added to the running total.
    XpAwarded { amount: u64, total: u64 },

    /// An XP award crossed the current level threshold.
    LeveledUp { new_level: u32 },

    /// An achievement title was unlocked for the first time.
    AchievementUnlocked { title: String, xp_value: u64 },

    /// A quest's progress counter moved.
    QuestAdvanced {
        quest_id: String,
        current: u32,
        target: u32,
    },

    /// A quest's completion payout fired (after the progress-bar delay).
    QuestCompleted {
        quest_id: String,
        title: String,
        reward_xp: u64,
    },

    /// A view was visited for the first time this session.
    CoverageChanged { visited: usize, percent: f32 },

    /// A bug marker was caught; `remaining` counts the bugs still loose.
    BugCaught { bug_id: String, remaining: usize },

    /// The simulated test suite started; log lines will arrive over the
    /// following ticks.
    SuiteStarted,

    /// The simulated test suite finished its last step.
    SuiteFinished { passed: usize, total: usize },

    /// The contact form was submitted; the mail-composition handoff is the
    /// caller's job.
    ContactTransmitted,
}
