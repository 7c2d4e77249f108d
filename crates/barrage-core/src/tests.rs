#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::state::GameStateSnapshot;
    use crate::types::{Position, SimTime, Velocity};

    /// Commands arrive as internally tagged JSON from the input layer.
    #[test]
    fn test_player_command_wire_format() {
        let cmd: PlayerCommand = serde_json::from_str(r#"{"type":"SetAngle","value":72}"#).unwrap();
        assert!(matches!(cmd, PlayerCommand::SetAngle { value: 72 }));

        let cmd: PlayerCommand =
            serde_json::from_str(r#"{"type":"StartHold","control":"MoveLeft"}"#).unwrap();
        assert!(matches!(
            cmd,
            PlayerCommand::StartHold {
                control: HeldControl::MoveLeft
            }
        ));

        let json = serde_json::to_string(&PlayerCommand::Fire).unwrap();
        assert_eq!(json, r#"{"type":"Fire"}"#);
    }

    #[test]
    fn test_game_event_serde() {
        let event = GameEvent::GameOver {
            outcome: MatchOutcome::Score {
                winner: PlayerId::Two,
            },
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }

    /// Verify GameStateSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.phase, back.phase);
        assert_eq!(back.phase, GamePhase::Aiming);
        assert_eq!(back.turn, PlayerId::One);
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    #[test]
    fn test_player_id_helpers() {
        assert_eq!(PlayerId::One.opponent(), PlayerId::Two);
        assert_eq!(PlayerId::Two.opponent(), PlayerId::One);
        assert_eq!(PlayerId::Two.index(), 1);
    }

    #[test]
    fn test_outcome_winner() {
        assert_eq!(
            MatchOutcome::Elimination {
                winner: PlayerId::One
            }
            .winner(),
            Some(PlayerId::One)
        );
        assert_eq!(MatchOutcome::Draw.winner(), None);
    }

    #[test]
    fn test_position_distance() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
    }

    /// 0 degrees points right, 90 straight up (negative y), 180 left.
    #[test]
    fn test_velocity_from_angle() {
        let right = Velocity::from_angle(0.0, 10.0);
        assert!((right.x - 10.0).abs() < 1e-10);
        assert!(right.y.abs() < 1e-10);

        let up = Velocity::from_angle(90.0, 10.0);
        assert!(up.x.abs() < 1e-10);
        assert!((up.y + 10.0).abs() < 1e-10);

        let left = Velocity::from_angle(180.0, 10.0);
        assert!((left.x + 10.0).abs() < 1e-10);
        assert!(left.y.abs() < 1e-10);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..TICK_RATE {
            time.advance();
        }
        assert_eq!(time.tick, TICK_RATE as u64);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_ms_to_ticks() {
        assert_eq!(ms_to_ticks(SETTLE_DELAY_MS), 60);
        assert_eq!(ms_to_ticks(ADJUST_REPEAT_MS), 3);
        assert_eq!(ms_to_ticks(MOVE_REPEAT_MS), 1);
        assert_eq!(ms_to_ticks(0.0), 1);
    }
}
