//! Turn controller — the match state machine.
//!
//! `Aiming → Firing → (Aiming | GameOver)`. `GameOver` is terminal until a
//! restart. The settle delay between the last motion and the next turn is an
//! explicit cancelable task owned here.

use barrage_core::constants::*;
use barrage_core::enums::{GamePhase, MatchOutcome, PlayerId};
use barrage_core::events::GameEvent;

use crate::match_state::MatchState;

/// A deferred action counted down in ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScheduledTask {
    remaining: Option<u32>,
}

impl ScheduledTask {
    /// Start (or restart) the countdown. Any pending countdown is replaced.
    pub fn schedule(&mut self, ticks: u32) {
        self.remaining = Some(ticks);
    }

    pub fn cancel(&mut self) {
        self.remaining = None;
    }

    pub fn is_pending(&self) -> bool {
        self.remaining.is_some()
    }

    pub fn remaining(&self) -> Option<u32> {
        self.remaining
    }

    /// Count down one tick. Returns true exactly once, on the tick the task elapses.
    pub fn advance(&mut self) -> bool {
        match self.remaining {
            Some(n) if n <= 1 => {
                self.remaining = None;
                true
            }
            Some(n) => {
                self.remaining = Some(n - 1);
                false
            }
            None => false,
        }
    }
}

/// Drives phase transitions, turn handover and match resolution.
#[derive(Debug, Clone, Default)]
pub struct TurnController {
    settle: ScheduledTask,
}

impl TurnController {
    pub fn settle_pending(&self) -> bool {
        self.settle.is_pending()
    }

    pub fn cancel_settle(&mut self) {
        self.settle.cancel();
    }

    /// Per-tick settle bookkeeping.
    ///
    /// `motion` is true while any projectile is live or any tank is falling.
    /// Once a shot has fully settled the delay starts; renewed motion cancels
    /// it; an uninterrupted delay hands the turn over.
    pub fn update(&mut self, state: &mut MatchState, motion: bool, events: &mut Vec<GameEvent>) {
        let idle = state.phase == GamePhase::Firing && !motion;
        if idle && !self.settle.is_pending() {
            self.settle.schedule(ms_to_ticks(SETTLE_DELAY_MS));
        } else if motion && self.settle.is_pending() {
            log::debug!("settle delay cancelled by renewed motion");
            self.settle.cancel();
        } else if self.settle.advance() {
            self.advance_turn(state, events);
        }
    }

    /// Hand the turn to the other player, or end the match on the turn limit.
    ///
    /// Only a firing turn can end; calls in any other phase are ignored, so a
    /// volley advances the turn at most once.
    pub fn advance_turn(&mut self, state: &mut MatchState, events: &mut Vec<GameEvent>) {
        if state.phase != GamePhase::Firing {
            return;
        }
        self.settle.cancel();
        state.turn_count += 1;

        if state.turn_count >= TURN_LIMIT {
            end_by_score(state, events);
            return;
        }

        state.turn = state.turn.opponent();
        state.phase = GamePhase::Aiming;
        state.active_mut().fuel = MAX_FUEL;

        log::info!(
            "turn {} -> {}",
            state.turn_count,
            state.turn.name()
        );
        events.push(GameEvent::TurnStarted {
            player: state.turn,
            turn_count: state.turn_count,
        });
    }
}

/// End the match immediately if a tank has been destroyed.
///
/// If both tanks fall in the same blast, Player 1 is credited with the win.
pub fn check_win(state: &mut MatchState, events: &mut Vec<GameEvent>) {
    if state.outcome.is_some() {
        return;
    }
    let mut winner = None;
    if state.player(PlayerId::One).health <= 0 {
        winner = Some(PlayerId::Two);
    }
    if state.player(PlayerId::Two).health <= 0 {
        winner = Some(PlayerId::One);
    }
    if let Some(winner) = winner {
        finish(state, MatchOutcome::Elimination { winner }, events);
    }
}

/// Decide a match that ran out of turns: higher score wins, a level score
/// goes to whoever scored first, and a scoreless match is a draw.
pub fn end_by_score(state: &mut MatchState, events: &mut Vec<GameEvent>) {
    let one = state.player(PlayerId::One).score;
    let two = state.player(PlayerId::Two).score;
    let outcome = match one.cmp(&two) {
        std::cmp::Ordering::Greater => MatchOutcome::Score {
            winner: PlayerId::One,
        },
        std::cmp::Ordering::Less => MatchOutcome::Score {
            winner: PlayerId::Two,
        },
        std::cmp::Ordering::Equal => match state.first_scorer {
            Some(winner) => MatchOutcome::Score { winner },
            None => MatchOutcome::Draw,
        },
    };
    finish(state, outcome, events);
}

fn finish(state: &mut MatchState, outcome: MatchOutcome, events: &mut Vec<GameEvent>) {
    state.phase = GamePhase::GameOver;
    state.outcome = Some(outcome);
    match outcome.winner() {
        Some(winner) => log::info!("game over: {} wins ({outcome:?})", winner.name()),
        None => log::info!("game over: draw"),
    }
    events.push(GameEvent::GameOver { outcome });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn firing_state() -> MatchState {
        MatchState {
            phase: GamePhase::Firing,
            ..Default::default()
        }
    }

    #[test]
    fn test_scheduled_task_countdown() {
        let mut task = ScheduledTask::default();
        assert!(!task.advance());
        task.schedule(3);
        assert!(!task.advance());
        assert!(!task.advance());
        assert!(task.advance());
        assert!(!task.is_pending());
        assert!(!task.advance());
    }

    #[test]
    fn test_scheduled_task_reschedule_replaces() {
        let mut task = ScheduledTask::default();
        task.schedule(2);
        task.advance();
        task.schedule(5);
        assert_eq!(task.remaining(), Some(5));
        task.cancel();
        assert_eq!(task.remaining(), None);
    }

    #[test]
    fn test_advance_turn_toggles_and_refuels() {
        let mut state = firing_state();
        state.players[1].fuel = 3.0;
        let mut turn = TurnController::default();
        let mut events = Vec::new();

        turn.advance_turn(&mut state, &mut events);
        assert_eq!(state.turn, PlayerId::Two);
        assert_eq!(state.phase, GamePhase::Aiming);
        assert_eq!(state.turn_count, 1);
        assert_eq!(state.players[1].fuel, MAX_FUEL);
        assert!(matches!(
            events[0],
            GameEvent::TurnStarted {
                player: PlayerId::Two,
                turn_count: 1
            }
        ));
    }

    #[test]
    fn test_advance_turn_ignored_outside_firing() {
        let mut state = MatchState::default();
        let mut turn = TurnController::default();
        let mut events = Vec::new();
        turn.advance_turn(&mut state, &mut events);
        assert_eq!(state.turn_count, 0);
        assert_eq!(state.turn, PlayerId::One);

        state.phase = GamePhase::GameOver;
        turn.advance_turn(&mut state, &mut events);
        assert_eq!(state.turn_count, 0);
        assert!(events.is_empty());
    }

    #[test]
    fn test_settle_delay_elapses_after_sixty_ticks() {
        let mut state = firing_state();
        let mut turn = TurnController::default();
        let mut events = Vec::new();

        turn.update(&mut state, false, &mut events);
        assert!(turn.settle_pending());
        for _ in 0..59 {
            turn.update(&mut state, false, &mut events);
            assert_eq!(state.phase, GamePhase::Firing);
        }
        turn.update(&mut state, false, &mut events);
        assert_eq!(state.phase, GamePhase::Aiming);
        assert_eq!(state.turn, PlayerId::Two);
        assert!(!turn.settle_pending());
    }

    #[test]
    fn test_settle_delay_cancelled_by_motion() {
        let mut state = firing_state();
        let mut turn = TurnController::default();
        let mut events = Vec::new();

        turn.update(&mut state, false, &mut events);
        for _ in 0..30 {
            turn.update(&mut state, false, &mut events);
        }
        turn.update(&mut state, true, &mut events);
        assert!(!turn.settle_pending());

        // A fresh, full-length delay is needed after motion stops again.
        turn.update(&mut state, false, &mut events);
        for _ in 0..59 {
            turn.update(&mut state, false, &mut events);
        }
        assert_eq!(state.phase, GamePhase::Firing);
        turn.update(&mut state, false, &mut events);
        assert_eq!(state.phase, GamePhase::Aiming);
    }

    #[test]
    fn test_turn_limit_ends_by_score() {
        let mut state = firing_state();
        state.turn_count = TURN_LIMIT - 1;
        state.players[1].score = 12;
        state.players[0].health = 1;
        state.players[1].health = 100;
        let mut turn = TurnController::default();
        let mut events = Vec::new();

        turn.advance_turn(&mut state, &mut events);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(
            state.outcome,
            Some(MatchOutcome::Score {
                winner: PlayerId::Two
            })
        );
    }

    #[test]
    fn test_tie_goes_to_first_scorer() {
        let mut state = firing_state();
        state.players[0].score = 15;
        state.players[1].score = 15;
        state.first_scorer = Some(PlayerId::One);
        let mut events = Vec::new();
        end_by_score(&mut state, &mut events);
        assert_eq!(
            state.outcome,
            Some(MatchOutcome::Score {
                winner: PlayerId::One
            })
        );
    }

    #[test]
    fn test_scoreless_tie_is_draw() {
        let mut state = firing_state();
        let mut events = Vec::new();
        end_by_score(&mut state, &mut events);
        assert_eq!(state.outcome, Some(MatchOutcome::Draw));
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(
            events,
            vec![GameEvent::GameOver {
                outcome: MatchOutcome::Draw
            }]
        );
    }

    #[test]
    fn test_check_win_elimination() {
        let mut state = firing_state();
        let mut events = Vec::new();
        check_win(&mut state, &mut events);
        assert!(state.outcome.is_none());

        state.players[0].health = 0;
        check_win(&mut state, &mut events);
        assert_eq!(
            state.outcome,
            Some(MatchOutcome::Elimination {
                winner: PlayerId::Two
            })
        );
        assert!(state.is_over());

        // Already decided; no second event.
        check_win(&mut state, &mut events);
        assert_eq!(events.len(), 1);
    }
}
