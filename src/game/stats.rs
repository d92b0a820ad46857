use crate::consts;

/// Score-derived values for the current session
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Stats {
    /// Number of apples eaten
    pub(crate) score: u32,

    /// One more than the number of complete groups of
    /// [`APPLES_PER_LEVEL`][consts::APPLES_PER_LEVEL] apples eaten
    pub(crate) level: u32,

    /// Ticks per second: the base speed plus the level
    pub(crate) speed: u32,
}

impl Stats {
    /// Stats at the start of a session
    pub(crate) fn new(base_speed: u32) -> Stats {
        Stats::for_score(0, base_speed)
    }

    pub(crate) fn for_score(score: u32, base_speed: u32) -> Stats {
        let level = score / consts::APPLES_PER_LEVEL + 1;
        Stats {
            score,
            level,
            speed: base_speed.saturating_add(level),
        }
    }

    pub(crate) fn record_apple(&mut self, base_speed: u32) {
        *self = Stats::for_score(self.score.saturating_add(1), base_speed);
    }
}
