//! Per-frame simulation step
//!
//! One tick per rendered frame, in a fixed order:
//! bird → spawn → move → retire → score → collision.

use super::collision::{Outcome, evaluate};
use super::state::{GameEvent, RunState};

/// Advance a started run by one frame.
///
/// Armed runs (no flap yet) are frozen and always report `Alive`.
pub fn tick(state: &mut RunState, events: &mut Vec<GameEvent>) -> Outcome {
    if !state.started {
        return Outcome::Alive;
    }

    state.time_ticks += 1;

    state.bird.tick(state.profile.gravity);

    state.spawn_pipes();
    state.obstacles.advance(state.profile.pipe_speed);
    state.obstacles.retire();
    let passed = state.obstacles.score(state.bird.pos.x);
    for _ in 0..passed {
        state.score += 1;
        events.push(GameEvent::Scored { score: state.score });
    }

    let outcome = evaluate(&state.bird, &state.obstacles.queue);
    if let Outcome::Died(cause) = outcome {
        log::info!(
            "Bird died ({:?}) with score {} after {} ticks",
            cause,
            state.score,
            state.time_ticks
        );
        state.started = false;
        events.push(GameEvent::Died { score: state.score });
    }
    outcome
}

/// Demo/idle autopilot: flap when the bird sinks below the centre of the
/// next gap it has to clear.
pub fn autopilot_wants_flap(state: &RunState) -> bool {
    let bird = &state.bird;
    let bird_left = bird.bounds().left();
    let gap = state.profile.gap_size as f32;

    let target_y = state
        .obstacles
        .queue
        .iter()
        .find(|pair| pair.right() > bird_left)
        .map(|pair| pair.gap_y as f32 + gap / 2.0)
        .unwrap_or(bird.pos.y.min(crate::consts::BIRD_START_Y));

    bird.velocity >= 0.0 && bird.pos.y > target_y + gap / 5.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::collision::DeathCause;
    use crate::sim::difficulty::Difficulty;
    use crate::sim::pipes::PipePair;
    use crate::sim::state::SpriteMetrics;

    fn run(difficulty: Difficulty) -> RunState {
        RunState::new(42, difficulty, SpriteMetrics::default())
    }

    #[test]
    fn test_armed_run_is_frozen() {
        let mut state = run(Difficulty::Easy);
        let mut events = Vec::new();
        for _ in 0..30 {
            assert_eq!(tick(&mut state, &mut events), Outcome::Alive);
        }
        assert_eq!(state.pipe_count(), 0);
        assert_eq!(state.bird.pos.y, BIRD_START_Y);
        assert_eq!(state.time_ticks, 0);
        assert!(events.is_empty());
    }

    #[test]
    fn test_first_tick_spawns_and_moves() {
        let mut state = run(Difficulty::Easy);
        state.flap();
        let mut events = Vec::new();
        tick(&mut state, &mut events);
        assert_eq!(state.pipe_count(), 1);
        let x = state.obstacles.queue.front().map(|p| p.x());
        assert_eq!(x, Some(SCREEN_WIDTH - 2.8));
        assert!((state.bird.velocity - (-6.7)).abs() < 1e-4);
    }

    #[test]
    fn test_falling_to_ground_ends_run() {
        let mut state = run(Difficulty::Easy);
        state.flap();
        let mut events = Vec::new();
        let mut outcome = Outcome::Alive;
        for _ in 0..200 {
            outcome = tick(&mut state, &mut events);
            if outcome.is_dead() {
                break;
            }
        }
        assert_eq!(outcome, Outcome::Died(DeathCause::Ground));
        assert!(!state.started);
        assert_eq!(events.last(), Some(&GameEvent::Died { score: 0 }));
    }

    #[test]
    fn test_scoring_emits_event() {
        let mut state = run(Difficulty::Easy);
        state.flap();
        // A pair whose right edge is just ahead of the bird, wide open gap
        let width = state.obstacles.pipe_width;
        let x = BIRD_START_X - width + 1.0;
        state
            .obstacles
            .queue
            .push_back(PipePair::new(x, width, 20, 450));
        let mut events = Vec::new();
        tick(&mut state, &mut events);
        assert_eq!(state.score, 1);
        assert_eq!(events, vec![GameEvent::Scored { score: 1 }]);

        events.clear();
        tick(&mut state, &mut events);
        assert_eq!(state.score, 1);
        assert!(events.is_empty());
    }

    #[test]
    fn test_hard_spawn_sequence_after_reset() {
        let mut state = run(Difficulty::Hard);
        state.reset();
        state.flap();
        let mut gaps = Vec::new();
        let mut events = Vec::new();
        while gaps.len() < 4 {
            let before = state.pipe_count();
            // Keep the bird aloft; only the stream matters here
            state.bird.pos.y = BIRD_START_Y;
            state.bird.velocity = 0.0;
            tick(&mut state, &mut events);
            if state.pipe_count() > before {
                gaps.push(state.obstacles.queue.back().map(|p| p.gap_y));
            }
        }
        assert_eq!(gaps, vec![Some(103), Some(211), Some(103), Some(211)]);
    }

    #[test]
    fn test_autopilot() {
        let mut state = run(Difficulty::Easy);
        state.obstacles.queue.push_back(PipePair::new(300.0, 78.0, 100, 150));
        // Gap centre at 175, threshold 205
        state.bird.pos.y = 250.0;
        state.bird.velocity = 1.0;
        assert!(autopilot_wants_flap(&state));

        state.bird.velocity = -3.0;
        assert!(!autopilot_wants_flap(&state));

        state.bird.pos.y = 180.0;
        state.bird.velocity = 1.0;
        assert!(!autopilot_wants_flap(&state));
    }
}
