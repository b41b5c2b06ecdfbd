//! Crank angle to spawn column.

/// Degrees in one full turn of the crank.
pub const FULL_TURN: f32 = 360.0;

/// Maps a crank angle onto the grid's columns.
#[derive(Debug, Clone, Copy)]
pub struct InputController {
    width: usize,
    last_column: usize,
}

impl InputController {
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self {
            width,
            last_column: 0,
        }
    }

    /// `round(angle / 360 * width)`, clamped to a valid column.
    ///
    /// Out-of-range readings are clamped, and NaN counts as zero.
    pub fn spawn_column(&mut self, angle: f32) -> usize {
        let max = self.width.saturating_sub(1);
        let angle = if angle.is_nan() { 0.0 } else { angle };
        let raw = (angle / FULL_TURN * self.width as f32).round();
        self.last_column = if raw <= 0.0 {
            0
        } else {
            (raw as usize).min(max)
        };
        self.last_column
    }

    #[must_use]
    pub fn last_column(&self) -> usize {
        self.last_column
    }
}

/// Signed shortest rotation from `previous` to `current`, in `-180..=180`.
#[must_use]
pub fn crank_delta(previous: f32, current: f32) -> f32 {
    let mut delta = (current - previous) % FULL_TURN;
    if delta > FULL_TURN / 2.0 {
        delta -= FULL_TURN;
    }
    if delta < -FULL_TURN / 2.0 {
        delta += FULL_TURN;
    }
    delta
}
