// Host-side tests for the S.T.A.M.P. session guide.

use focus_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn to_momentum(session: &mut StampSession) {
    session.advance(PhaseInput::CheckIn { feeling: 4 }).unwrap();
    session
        .advance(PhaseInput::Tune {
            goal: "  Ship the dial  ".into(),
        })
        .unwrap();
    session
        .advance(PhaseInput::Atomic {
            first_step: "Open the editor".into(),
        })
        .unwrap();
}

#[test]
fn phases_advance_in_order() {
    let mut s = StampSession::new();
    assert_eq!(s.phase(), StampPhase::CheckIn);
    assert_eq!(s.feeling(), 3);
    to_momentum(&mut s);
    assert_eq!(s.phase(), StampPhase::Momentum);
    assert_eq!(s.feeling(), 4);
    assert_eq!(s.goal(), "Ship the dial");
    assert_eq!(s.atomic_step(), "Open the editor");
}

#[test]
fn blank_goal_is_rejected_and_phase_kept() {
    let mut s = StampSession::new();
    s.advance(PhaseInput::CheckIn { feeling: 3 }).unwrap();
    let err = s
        .advance(PhaseInput::Tune {
            goal: "   ".into(),
        })
        .unwrap_err();
    assert_eq!(err, RitualError::MissingGoal);
    assert_eq!(s.phase(), StampPhase::Tune);
    assert_eq!(err.to_string(), "define a goal for this session");
}

#[test]
fn blank_first_step_is_rejected() {
    let mut s = StampSession::new();
    s.advance(PhaseInput::CheckIn { feeling: 3 }).unwrap();
    s.advance(PhaseInput::Tune { goal: "g".into() }).unwrap();
    assert_eq!(
        s.advance(PhaseInput::Atomic {
            first_step: String::new()
        }),
        Err(RitualError::MissingAtomicStep)
    );
    assert_eq!(s.phase(), StampPhase::Atomic);
}

#[test]
fn feeling_must_be_one_to_five() {
    let mut s = StampSession::new();
    assert_eq!(
        s.advance(PhaseInput::CheckIn { feeling: 0 }),
        Err(RitualError::FeelingOutOfRange(0))
    );
    assert_eq!(
        s.advance(PhaseInput::CheckIn { feeling: 6 }),
        Err(RitualError::FeelingOutOfRange(6))
    );
    assert_eq!(
        s.advance(PhaseInput::CheckIn { feeling: 5 }),
        Ok(RitualOutcome::Advanced(StampPhase::Tune))
    );
}

#[test]
fn input_for_another_phase_is_rejected() {
    let mut s = StampSession::new();
    let err = s
        .advance(PhaseInput::Tune { goal: "g".into() })
        .unwrap_err();
    assert_eq!(
        err,
        RitualError::WrongPhase {
            expected: StampPhase::CheckIn,
            got: StampPhase::Tune
        }
    );
}

#[test]
fn finishing_momentum_returns_bridge_and_restarts() {
    let mut s = StampSession::new();
    to_momentum(&mut s);
    let outcome = s
        .advance(PhaseInput::Momentum {
            bridge: " Write tests next ".into(),
        })
        .unwrap();
    assert_eq!(
        outcome,
        RitualOutcome::Completed {
            bridge: Some("Write tests next".into())
        }
    );
    assert_eq!(s, StampSession::default());
}

#[test]
fn blank_bridge_is_dropped() {
    let mut s = StampSession::new();
    to_momentum(&mut s);
    let outcome = s
        .advance(PhaseInput::Momentum {
            bridge: "  ".into(),
        })
        .unwrap();
    assert_eq!(outcome, RitualOutcome::Completed { bridge: None });
}

#[test]
fn restart_abandons_the_cycle() {
    let mut s = StampSession::new();
    to_momentum(&mut s);
    s.restart();
    assert_eq!(s.phase(), StampPhase::CheckIn);
    assert!(s.goal().is_empty());
}

#[test]
fn phase_labels_are_distinct() {
    for (i, phase) in StampPhase::ALL.iter().enumerate() {
        assert_eq!(phase.index(), i);
        assert!(!phase.badge().is_empty());
        assert!(!phase.title().is_empty());
        assert!(!phase.action_label().is_empty());
    }
    assert_eq!(StampPhase::Momentum.next(), StampPhase::CheckIn);
}

#[test]
fn example_goal_comes_from_the_list() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..20 {
        assert!(GOAL_EXAMPLES.contains(&example_goal(&mut rng)));
    }
}
