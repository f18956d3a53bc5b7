//! Most recent pointer position.
//!
//! Single writer: the field updates it on every pointer move, and the
//! tick reads it by reference for the proximity test. No history.

/// Pointer state for the current frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    /// Current pointer X.
    pub x: f32,
    /// Current pointer Y.
    pub y: f32,
    /// Pointer X before the latest move.
    pub prev_x: f32,
    /// Pointer Y before the latest move.
    pub prev_y: f32,
    /// Number of moves recorded since mount.
    moves: u64,
}

impl PointerState {
    /// Creates a pointer resting at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a pointer move.
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.prev_x = self.x;
        self.prev_y = self.y;
        self.x = x;
        self.y = y;
        self.moves += 1;
    }

    /// Returns the current position.
    #[must_use]
    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    /// Returns the movement delta of the latest move.
    #[must_use]
    pub fn delta(&self) -> (f32, f32) {
        (self.x - self.prev_x, self.y - self.prev_y)
    }

    /// Returns how many moves have been recorded.
    #[must_use]
    pub fn move_count(&self) -> u64 {
        self.moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_value_wins() {
        let mut pointer = PointerState::new();
        pointer.set_position(10.0, 20.0);
        pointer.set_position(15.0, 18.0);

        assert_eq!(pointer.position(), (15.0, 18.0));
        assert_eq!(pointer.delta(), (5.0, -2.0));
        assert_eq!(pointer.move_count(), 2);
    }
}
