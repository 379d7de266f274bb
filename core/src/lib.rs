pub mod achievements;
pub mod content;
pub mod effects;
pub mod events;
pub mod locale;
pub mod progression;
pub mod quests;
pub mod schedule;
pub mod session;

// Re-exports for convenience
pub use events::GameEvent;
pub use session::{GameSession, HudSnapshot};
