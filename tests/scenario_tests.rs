//! Rule scenarios: entering, lane boundaries, finishing, captures, winning.

use ludo_engine::core::{Capture, Color, GameState, Lifecycle, Phase, SeatId, TokenPosition};
use ludo_engine::rules::{
    advance_turn, apply_roll, compute_legal_moves, execute_move, roll_dice, MatchBuilder,
};
use ludo_engine::EngineError;

const RED: SeatId = SeatId::new(0);
const GREEN: SeatId = SeatId::new(1);

fn two_seat_match() -> GameState {
    MatchBuilder::new().player_count(2).seed(2024).build().unwrap()
}

// =============================================================================
// Entering the Ring
// =============================================================================

#[test]
fn test_six_brings_token_out_with_bonus_turn() {
    let state = two_seat_match();

    let rolled = apply_roll(&state, 6).unwrap();
    assert_eq!(rolled.state.phase, Phase::Rolled);

    // Every base token has exactly one move, and it is the entry square.
    for id in 0..4u8 {
        let moves: Vec<_> = rolled.legal_moves.iter().filter(|m| m.token == id).collect();
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to, TokenPosition::Track(Color::Red.entry_square()));
    }

    let mv = rolled.legal_moves[0];
    let outcome = execute_move(&rolled.state, &mv).unwrap();
    assert_eq!(
        outcome.state.players[0].tokens[mv.token as usize].position,
        TokenPosition::Track(0)
    );
    assert!(outcome.bonus_turn);
    assert!(!outcome.finished);
    assert!(!outcome.game_won);

    let next = advance_turn(&outcome.state, outcome.bonus_turn).unwrap();
    assert_eq!(next.phase, Phase::WaitingRoll);
    assert_eq!(next.current_seat, RED);
    assert_eq!(next.consecutive_sixes, 1);
}

#[test]
fn test_base_tokens_only_leave_on_six() {
    let state = two_seat_match();
    for dice in 1..=5 {
        assert!(compute_legal_moves(&state, RED, dice).is_empty());
        assert!(compute_legal_moves(&state, GREEN, dice).is_empty());
    }
}

// =============================================================================
// Lane Boundary
// =============================================================================

#[test]
fn test_distance_fifty_plus_three_enters_lane_one() {
    let mut state = two_seat_match();
    state.set_token(RED, 0, TokenPosition::Track(50));

    let moves = compute_legal_moves(&state, RED, 3);
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].to, TokenPosition::HomePath(1));
    assert_eq!(moves[0].to.lifecycle(), Lifecycle::HomePath);
}

#[test]
fn test_lane_four_finishes_on_two_and_overshoots_on_three() {
    let mut state = two_seat_match();
    state.set_token(GREEN, 2, TokenPosition::HomePath(4));

    let on_two = compute_legal_moves(&state, GREEN, 2);
    assert_eq!(on_two.len(), 1);
    assert_eq!(on_two[0].to, TokenPosition::Finished);

    assert!(compute_legal_moves(&state, GREEN, 3).is_empty());
}

// =============================================================================
// Captures
// =============================================================================

#[test]
fn test_landing_on_opponent_sends_it_home() {
    let mut state = two_seat_match();
    state.set_token(RED, 1, TokenPosition::Track(20));
    state.set_token(GREEN, 3, TokenPosition::Track(24));

    let rolled = apply_roll(&state, 4).unwrap();
    let mv = rolled.legal_moves[0];
    assert_eq!(mv.capture, Some(Capture { seat: GREEN, token: 3 }));

    let outcome = execute_move(&rolled.state, &mv).unwrap();
    assert_eq!(outcome.captured, Some(Capture { seat: GREEN, token: 3 }));
    assert_eq!(outcome.state.players[1].tokens[3].position, TokenPosition::Base);
    assert_eq!(outcome.state.players[0].tokens[1].position, TokenPosition::Track(24));
    assert!(!outcome.bonus_turn);

    // The pre-move state still shows the victim on the ring.
    assert_eq!(rolled.state.players[1].tokens[3].position, TokenPosition::Track(24));
}

#[test]
fn test_safe_squares_protect() {
    let mut state = MatchBuilder::new().player_count(4).build().unwrap();
    // Green sits on Yellow's entry square.
    state.set_token(GREEN, 0, TokenPosition::Track(26));
    state.set_token(RED, 0, TokenPosition::Track(22));

    let moves = compute_legal_moves(&state, RED, 4);
    assert_eq!(moves[0].to, TokenPosition::Track(26));
    assert!(!moves[0].is_capture());
}

#[test]
fn test_lane_tokens_cannot_be_captured() {
    let mut state = two_seat_match();
    state.set_token(GREEN, 0, TokenPosition::HomePath(2));
    state.set_token(RED, 0, TokenPosition::Track(30));

    for dice in 1..=6 {
        assert!(compute_legal_moves(&state, RED, dice)
            .iter()
            .all(|m| !m.is_capture()));
    }
}

// =============================================================================
// Winning
// =============================================================================

#[test]
fn test_fourth_finish_wins_and_ends_match() {
    let mut state = two_seat_match();
    state.current_seat = GREEN;
    for id in 0..3 {
        state.set_token(GREEN, id, TokenPosition::Finished);
    }
    state.set_token(GREEN, 3, TokenPosition::HomePath(0));

    // A six would be a bonus roll; winning overrides it.
    let rolled = apply_roll(&state, 6).unwrap();
    let mv = rolled.legal_moves[0];
    assert!(mv.is_finish());

    let outcome = execute_move(&rolled.state, &mv).unwrap();
    assert!(outcome.game_won);
    assert!(outcome.finished);
    assert!(!outcome.bonus_turn);
    assert_eq!(outcome.state.phase, Phase::GameOver);
    assert_eq!(outcome.state.winner, Some(Color::Green));
    assert!(outcome.state.validate().is_ok());

    assert!(matches!(
        roll_dice(&outcome.state),
        Err(EngineError::PhaseMismatch { actual: Phase::GameOver, .. })
    ));
    assert!(advance_turn(&outcome.state, false).is_err());
}

#[test]
fn test_finishing_a_token_is_not_a_win() {
    let mut state = two_seat_match();
    state.set_token(RED, 0, TokenPosition::HomePath(5));

    let rolled = apply_roll(&state, 1).unwrap();
    let outcome = execute_move(&rolled.state, &rolled.legal_moves[0]).unwrap();

    assert!(outcome.finished);
    assert!(!outcome.game_won);
    assert_eq!(outcome.state.phase, Phase::Animating);
    assert!(outcome.state.winner.is_none());
}
