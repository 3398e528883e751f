#[cfg(test)]
mod tests {
    use crate::commands::Command;
    use crate::config::{OverflowPolicy, SimConfig};
    use crate::constants::LANE_TOP_TOLERANCE;
    use crate::enums::*;
    use crate::error::ConfigError;
    use crate::events::GameEvent;
    use crate::math::{fibonacci, lane_offsets};
    use crate::types::{Field, SimTime};

    #[test]
    fn test_fibonacci_values() {
        let expected = [0u64, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55];
        for (n, want) in expected.iter().enumerate() {
            assert_eq!(fibonacci(n as u32), *want, "fib({n})");
        }
        assert_eq!(fibonacci(30), 832_040);
        // Deep rounds stay stack-free and in range.
        assert_eq!(fibonacci(90), 2_880_067_194_370_816_120);
    }

    #[test]
    fn test_fibonacci_saturates_instead_of_overflowing() {
        assert_eq!(fibonacci(500), u64::MAX);
    }

    #[test]
    fn test_lane_offsets_placement() {
        // Band of height 8 centered at 0: edges at -4 and +4.
        let lanes = lane_offsets(3, 8.0, 0.0, LANE_TOP_TOLERANCE);
        assert_eq!(lanes.len(), 3);
        // Lower lanes at band_height / (count + 1) intervals from the bottom.
        assert!((lanes[0] - (-4.0 + 2.0)).abs() < 1e-5);
        assert!((lanes[1] - (-4.0 + 4.0)).abs() < 1e-5);
        // Top lane pulled down from the top edge by the tolerance.
        assert!((lanes[2] - (4.0 - LANE_TOP_TOLERANCE)).abs() < 1e-5);
    }

    #[test]
    fn test_lane_offsets_single_lane() {
        let lanes = lane_offsets(1, 6.0, 1.0, 0.5);
        assert_eq!(lanes.len(), 1);
        assert!((lanes[0] - (4.0 - 0.5)).abs() < 1e-5);
    }

    #[test]
    fn test_field_edges_and_run_speed() {
        let field = Field::new(1.0, 12.0);
        assert!((field.near_edge() - (-5.0)).abs() < 1e-6);
        assert!((field.far_edge() - 7.0).abs() < 1e-6);
        // A monster with movement speed 4 crosses 12 units in 4 seconds.
        assert!((field.run_speed(4.0) - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        time.advance(0.5);
        time.advance(0.25);
        assert_eq!(time.tick, 2);
        assert!((time.elapsed_secs - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(SimConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_config_rejects_empty_lanes() {
        let config = SimConfig {
            lanes: Vec::new(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NoLanes));
    }

    #[test]
    fn test_config_rejects_bad_pool_bounds() {
        let config = SimConfig {
            pool_capacity: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NonPositivePoolCapacity));

        let config = SimConfig {
            pool_capacity: 100,
            pool_max_size: 10,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::PoolBoundsInverted {
                capacity: 100,
                max: 10
            })
        );
    }

    #[test]
    fn test_config_rejects_bad_speed_range() {
        let config = SimConfig {
            speed_min: 5.0,
            speed_max: 5.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSpeedRange { .. })
        ));

        let config = SimConfig {
            speed_min: -1.0,
            speed_max: 4.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSpeedRange { .. })
        ));
    }

    #[test]
    fn test_config_rejects_bad_timing_and_geometry() {
        let config = SimConfig {
            countdown_secs: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveCountdown(_))
        ));

        let config = SimConfig {
            release_grace_secs: -0.1,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NegativeReleaseGrace(_))
        ));

        let config = SimConfig {
            field: Field::new(0.0, 0.0),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveFieldWidth(_))
        ));

        let config = SimConfig {
            rare_probability: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRareProbability(_))
        ));

        let config = SimConfig {
            initial_round: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroInitialRound));
    }

    /// Verify commands and events round-trip through serde_json.
    #[test]
    fn test_command_serde() {
        let commands = vec![
            Command::StartRace,
            Command::Pause,
            Command::Resume,
            Command::Reset,
        ];
        for command in commands {
            let json = serde_json::to_string(&command).unwrap();
            let _: Command = serde_json::from_str(&json).unwrap();
        }
    }

    #[test]
    fn test_event_serde() {
        let events = vec![
            GameEvent::RoundStarted {
                round: 4,
                spawn_count: 3,
            },
            GameEvent::CountdownTick {
                seconds_remaining: 2,
            },
            GameEvent::RaceStarted { round: 4 },
            GameEvent::MonsterOut {
                id: 7,
                remaining: 2,
                total: 3,
            },
            GameEvent::WaveDispatched,
            GameEvent::RoundFinished,
        ];
        for event in events {
            let json = serde_json::to_string(&event).unwrap();
            let _: GameEvent = serde_json::from_str(&json).unwrap();
        }
    }

    #[test]
    fn test_enum_serde_round_trips() {
        for state in [MonsterState::Idle, MonsterState::Run, MonsterState::Out] {
            let json = serde_json::to_string(&state).unwrap();
            let back: MonsterState = serde_json::from_str(&json).unwrap();
            assert_eq!(state, back);
        }
        for phase in [RoundPhase::Idle, RoundPhase::Waiting, RoundPhase::Running] {
            let json = serde_json::to_string(&phase).unwrap();
            let back: RoundPhase = serde_json::from_str(&json).unwrap();
            assert_eq!(phase, back);
        }
        for policy in [OverflowPolicy::GrowWithWarning, OverflowPolicy::Reject] {
            let json = serde_json::to_string(&policy).unwrap();
            let back: OverflowPolicy = serde_json::from_str(&json).unwrap();
            assert_eq!(policy, back);
        }
    }
}
