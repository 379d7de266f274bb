//! Experience and level tracking.
//!
//! XP is a cumulative counter that never decreases. The level-up threshold
//! is `level * 1000`, evaluated against the level held *before* an award,
//! and a single award bumps the level at most once no matter how far past
//! the threshold it lands.

/// XP cost multiplier per level: the threshold for leaving level `n` is
/// `n * XP_PER_LEVEL`.
pub const XP_PER_LEVEL: u64 = 1_000;

/// Owns the session's XP total and level.
#[derive(Debug, Clone)]
pub struct ProgressionTracker {
    xp: u64,
    level: u32,
}

impl Default for ProgressionTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressionTracker {
    /// Fresh progression: no XP, level 1.
    pub fn new() -> Self {
        Self { xp: 0, level: 1 }
    }

    /// Cumulative XP earned this session.
    pub fn xp(&self) -> u64 {
        self.xp
    }

    /// Current level, starting at 1.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// XP total required to leave the current level.
    pub fn next_level_xp(&self) -> u64 {
        self.level as u64 * XP_PER_LEVEL
    }

    /// Add XP. Returns the new level if this award crossed the threshold.
    ///
    /// The threshold uses the pre-award level, and the level increments by
    /// exactly one per call: an award large enough to span several
    /// thresholds still yields a single level-up.
    pub fn award(&mut self, amount: u64) -> Option<u32> {
        let threshold = self.next_level_xp();
        self.xp += amount;

        if self.xp >= threshold {
            self.level += 1;
            Some(self.level)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xp_accumulates() {
        let mut prog = ProgressionTracker::new();
        prog.award(10);
        prog.award(50);
        prog.award(100);
        assert_eq!(prog.xp(), 160);
        assert_eq!(prog.level(), 1);
    }

    #[test]
    fn test_level_up_at_exact_threshold() {
        let mut prog = ProgressionTracker::new();
        assert_eq!(prog.award(1_000), Some(2));
        assert_eq!(prog.xp(), 1_000);
        assert_eq!(prog.level(), 2);
    }

    #[test]
    fn test_single_increment_per_call() {
        // Crossing two thresholds in one award still gives one level.
        let mut prog = ProgressionTracker::new();
        prog.award(1_000);
        assert_eq!(prog.level(), 2);

        // Threshold is now 2000; 2500 lands at 3500, past 3000 too.
        assert_eq!(prog.award(2_500), Some(3));
        assert_eq!(prog.xp(), 3_500);
        assert_eq!(prog.level(), 3);
    }

    #[test]
    fn test_no_level_up_below_threshold() {
        let mut prog = ProgressionTracker::new();
        assert_eq!(prog.award(999), None);
        assert_eq!(prog.level(), 1);
        assert_eq!(prog.next_level_xp(), 1_000);
    }
}
