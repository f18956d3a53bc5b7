//! Field statistics.

/// What a single tick did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickStats {
    /// Particles alive after culling.
    pub alive: u32,
    /// Particles removed because their size reached zero.
    pub expired: u32,
    /// Discs drawn.
    pub discs_drawn: u32,
    /// Pointer link strokes drawn.
    pub links_drawn: u32,
}

/// Running totals since mount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldStats {
    /// Ticks run.
    pub ticks: u64,
    /// Particles spawned.
    pub spawned: u64,
    /// Particles expired by decay.
    pub expired: u64,
    /// Particles evicted by the population cap.
    pub evicted: u64,
    /// Highest live population seen.
    pub peak_alive: u32,
    /// Most recent tick.
    pub last_tick: TickStats,
}

impl FieldStats {
    /// Folds one tick into the totals.
    pub fn record_tick(&mut self, tick: TickStats) {
        self.ticks += 1;
        self.expired += u64::from(tick.expired);
        self.peak_alive = self.peak_alive.max(tick.alive);
        self.last_tick = tick;
    }

    /// Particles currently alive, as of the last tick.
    #[must_use]
    pub fn alive(&self) -> u32 {
        self.last_tick.alive
    }
}
