//! Per-game rule tests against forced randomness.

use std::collections::BTreeSet;

use rust_arcade::games::{GuessFeedback, QuizInput, Roll, RollTier};
use rust_arcade::{
    evaluate, Achievement, Choice, DiceGame, MiniGame, NumberGuessGame, QuizGame, RoundResult,
    RpsGame, ScoreBoard, ScriptedRng,
};

fn board(games: u32, total: u32) -> ScoreBoard {
    let mut board = ScoreBoard::new();
    for i in 0..games {
        board.record_completion(if i == 0 { total } else { 0 });
    }
    board
}

// =============================================================================
// Number Guesser
// =============================================================================

#[test]
fn test_first_try_scores_100() {
    let mut rng = ScriptedRng::new(0).with_values([64]);
    let mut game = NumberGuessGame::new();
    game.start(&mut rng);

    let t = game.act(64, &mut rng).unwrap();
    assert_eq!(t.outcome, GuessFeedback::Correct { secret: 64, guesses: 1 });
    assert_eq!(t.points, Some(100));
}

#[test]
fn test_twenty_one_guesses_scores_zero() {
    let mut rng = ScriptedRng::new(0).with_values([100]);
    let mut game = NumberGuessGame::new();
    game.start(&mut rng);

    for _ in 0..20 {
        assert_eq!(game.act(1, &mut rng).unwrap().outcome, GuessFeedback::TooLow);
    }
    let t = game.act(100, &mut rng).unwrap();
    assert_eq!(t.points, Some(0));
}

// =============================================================================
// Quiz
// =============================================================================

#[test]
fn test_quiz_partial_score() {
    let mut rng = ScriptedRng::new(0);
    let mut quiz = QuizGame::default();

    quiz.act(QuizInput::Answer { question: 0, option: 2 }, &mut rng).unwrap();
    quiz.act(QuizInput::Answer { question: 1, option: 0 }, &mut rng).unwrap();
    quiz.act(QuizInput::Answer { question: 3, option: 2 }, &mut rng).unwrap();

    let t = quiz.act(QuizInput::Submit, &mut rng).unwrap();
    assert_eq!(t.points, Some(20));
}

// =============================================================================
// Dice
// =============================================================================

#[test]
fn test_dice_payouts_for_each_face() {
    let expected = [5, 5, 5, 20, 20, 50];
    for (face, points) in (1..=6).zip(expected) {
        let mut rng = ScriptedRng::new(0).with_values([face]);
        let t = DiceGame::new().act((), &mut rng).unwrap();
        assert_eq!(
            t.outcome,
            Roll {
                value: face,
                tier: RollTier::of(face)
            }
        );
        assert_eq!(t.points, Some(points), "face {face}");
    }
}

// =============================================================================
// Rock Paper Scissors
// =============================================================================

/// All nine pairings of the outcome table.
#[test]
fn test_rps_outcome_table() {
    use Choice::{Paper, Rock, Scissors};
    use RoundResult::{Lose, Tie, Win};

    let table = [
        (Rock, Rock, Tie, 2),
        (Rock, Paper, Lose, 0),
        (Rock, Scissors, Win, 10),
        (Paper, Rock, Win, 10),
        (Paper, Paper, Tie, 2),
        (Paper, Scissors, Lose, 0),
        (Scissors, Rock, Lose, 0),
        (Scissors, Paper, Win, 10),
        (Scissors, Scissors, Tie, 2),
    ];

    for (user, computer, result, points) in table {
        let index = Choice::ALL.iter().position(|&c| c == computer).unwrap() as u32;
        let mut rng = ScriptedRng::new(0).with_values([index]);
        let mut game = RpsGame::new();

        let t = game.act(user, &mut rng).unwrap();
        assert_eq!(t.outcome.computer, computer);
        assert_eq!(t.outcome.result, result, "{user} vs {computer}");
        assert_eq!(t.points, Some(points), "{user} vs {computer}");
    }
}

// =============================================================================
// Achievements
// =============================================================================

#[test]
fn test_achievement_thresholds() {
    assert_eq!(evaluate(&board(4, 0)), BTreeSet::new());
    assert_eq!(
        evaluate(&board(5, 150)),
        BTreeSet::from([Achievement::GameEnthusiast, Achievement::ScoringStar])
    );
    assert_eq!(
        evaluate(&board(10, 500)),
        BTreeSet::from(Achievement::ALL)
    );
}

#[test]
fn test_achievement_labels() {
    let labels: Vec<_> = Achievement::ALL.iter().map(|a| a.label()).collect();
    assert_eq!(labels, vec!["Game Enthusiast", "Scoring Star", "Veteran Player"]);
}
