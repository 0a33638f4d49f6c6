//! Score, combo chain and accuracy counters.

use skystrike_core::constants::{COMBO_STEP, COMBO_WINDOW, MISSILE_SCORE_MULTIPLIER};
use skystrike_core::state::ScoreView;

const COMBO_EPSILON: f64 = 1e-9;

/// Points for one kill: `floor(base * (1 + combo * 0.5) * multiplier)`,
/// where the multiplier is 2 for missile kills and 1 otherwise.
pub fn kill_points(score_value: u32, combo: u32, missile: bool) -> u64 {
    let multiplier = if missile {
        MISSILE_SCORE_MULTIPLIER
    } else {
        1.0
    };
    (score_value as f64 * (1.0 + combo as f64 * COMBO_STEP) * multiplier).floor() as u64
}

/// Running score state tracked by the engine.
#[derive(Debug, Clone, Default)]
pub struct ScoreState {
    pub score: u64,
    /// Kills chained inside the combo window.
    pub combo: u32,
    /// Seconds left before the chain breaks.
    pub combo_timer: f64,
    pub shots_fired: u32,
    pub hits: u32,
    pub kills: u32,
}

impl ScoreState {
    /// Score a player kill at the current combo, then extend the chain.
    /// Returns the points awarded.
    pub fn award_kill(&mut self, score_value: u32, missile: bool) -> u64 {
        let points = kill_points(score_value, self.combo, missile);
        self.score += points;
        self.kills += 1;
        self.combo += 1;
        self.combo_timer = COMBO_WINDOW;
        points
    }

    /// Count down the combo window; the chain resets once it runs out.
    pub fn decay_combo(&mut self, dt: f64) {
        if self.combo_timer <= 0.0 {
            return;
        }
        self.combo_timer -= dt;
        // Frame steps like 1/60 leave rounding residue after a whole window.
        if self.combo_timer <= COMBO_EPSILON {
            self.combo_timer = 0.0;
            self.combo = 0;
        }
    }

    pub fn view(&self) -> ScoreView {
        ScoreView {
            score: self.score,
            combo: self.combo,
            combo_timer: self.combo_timer,
            shots_fired: self.shots_fired,
            hits: self.hits,
            kills: self.kills,
        }
    }
}
