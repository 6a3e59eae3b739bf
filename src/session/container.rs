//! The session container: one score board, one active game.

use std::collections::BTreeSet;

use log::{debug, info, warn};

use crate::core::{ConfigError, GameError, GameKind, GameRng, RandomSource, SessionConfig};
use crate::games::{DiceGame, MemoryGame, NumberGuessGame, QuizGame, QuizInput, RpsGame};
use crate::rules::{MiniGame, Phase, Transition};
use crate::scoring::{self, Achievement, ScoreBoard, SessionStats};

use super::action::{CompletionRecord, GameInput, UserAction};
use super::view::{ActionReport, ActiveGameView, GameOutcome, GameView, SessionSnapshot};

/// The game currently on screen, with its strongly typed state.
#[derive(Clone, Debug)]
pub enum ActiveGame {
    NumberGuess(NumberGuessGame),
    Quiz(QuizGame),
    Dice(DiceGame),
    Memory(MemoryGame),
    Rps(RpsGame),
}

impl ActiveGame {
    /// A fresh instance of `kind`.
    #[must_use]
    pub fn new(kind: GameKind, config: &SessionConfig) -> Self {
        match kind {
            GameKind::NumberGuess => ActiveGame::NumberGuess(NumberGuessGame::new()),
            GameKind::Quiz => ActiveGame::Quiz(QuizGame::new(config.questions.clone())),
            GameKind::Dice => ActiveGame::Dice(DiceGame::new()),
            GameKind::Memory => ActiveGame::Memory(MemoryGame::new()),
            GameKind::RockPaperScissors => ActiveGame::Rps(RpsGame::new()),
        }
    }

    #[must_use]
    pub fn kind(&self) -> GameKind {
        match self {
            ActiveGame::NumberGuess(_) => NumberGuessGame::KIND,
            ActiveGame::Quiz(_) => QuizGame::KIND,
            ActiveGame::Dice(_) => DiceGame::KIND,
            ActiveGame::Memory(_) => MemoryGame::KIND,
            ActiveGame::Rps(_) => RpsGame::KIND,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match self {
            ActiveGame::NumberGuess(g) => g.phase(),
            ActiveGame::Quiz(g) => g.phase(),
            ActiveGame::Dice(g) => g.phase(),
            ActiveGame::Memory(g) => g.phase(),
            ActiveGame::Rps(g) => g.phase(),
        }
    }

    pub fn start<R: RandomSource>(&mut self, rng: &mut R) {
        match self {
            ActiveGame::NumberGuess(g) => g.start(rng),
            ActiveGame::Quiz(g) => g.start(rng),
            ActiveGame::Dice(g) => g.start(rng),
            ActiveGame::Memory(g) => g.start(rng),
            ActiveGame::Rps(g) => g.start(rng),
        }
    }

    /// Route `input` to the matching game.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InputMismatch`] if `input` targets a different
    /// game, or whatever the game itself rejects.
    pub fn act<R: RandomSource>(
        &mut self,
        input: GameInput,
        rng: &mut R,
    ) -> Result<Transition<GameOutcome>, GameError> {
        match (self, input) {
            (ActiveGame::NumberGuess(g), GameInput::Guess(value)) => {
                Ok(g.act(value, rng)?.map(GameOutcome::Guess))
            }
            (ActiveGame::Quiz(g), GameInput::Answer { question, option }) => {
                Ok(g.act(QuizInput::Answer { question, option }, rng)?.map(GameOutcome::Quiz))
            }
            (ActiveGame::Quiz(g), GameInput::SubmitQuiz) => {
                Ok(g.act(QuizInput::Submit, rng)?.map(GameOutcome::Quiz))
            }
            (ActiveGame::Dice(g), GameInput::Roll) => Ok(g.act((), rng)?.map(GameOutcome::Dice)),
            (ActiveGame::Memory(g), GameInput::Flip(index)) => {
                Ok(g.act(index, rng)?.map(GameOutcome::Memory))
            }
            (ActiveGame::Rps(g), GameInput::Play(choice)) => {
                Ok(g.act(choice, rng)?.map(GameOutcome::Rps))
            }
            (game, input) => Err(GameError::InputMismatch {
                active: game.kind(),
                input: input.name(),
                target: input.target(),
            }),
        }
    }

    #[must_use]
    pub fn view(&self) -> GameView {
        match self {
            ActiveGame::NumberGuess(g) => GameView::NumberGuess(g.view()),
            ActiveGame::Quiz(g) => GameView::Quiz(g.view()),
            ActiveGame::Dice(g) => GameView::Dice(g.view()),
            ActiveGame::Memory(g) => GameView::Memory(g.view()),
            ActiveGame::Rps(g) => GameView::Rps(g.view()),
        }
    }
}

/// One interactive session.
///
/// Owns the score board, the RNG and at most one active game. Sessions
/// share nothing, so any number can run side by side.
///
/// ```
/// use rust_arcade::core::{GameKind, ScriptedRng, SessionConfig};
/// use rust_arcade::session::{GameInput, Session};
///
/// let rng = ScriptedRng::new(0).with_values([6]);
/// let mut session = Session::with_rng(SessionConfig::new(), rng).unwrap();
///
/// session.select_game(GameKind::Dice);
/// let report = session.act(GameInput::Roll).unwrap();
/// assert_eq!(report.completion.unwrap().points, 50);
/// assert_eq!(session.scores().total_score(), 50);
/// ```
#[derive(Clone, Debug)]
pub struct Session<R = GameRng> {
    config: SessionConfig,
    rng: R,
    scores: ScoreBoard,
    active: Option<ActiveGame>,
    history: Vec<CompletionRecord>,
}

impl Session<GameRng> {
    /// A session seeded from `config.seed`, or from the OS if unset.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the config fails validation.
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        debug!("session rng seed {}", rng.seed());
        Self::with_rng(config, rng)
    }
}

impl<R: RandomSource> Session<R> {
    /// A session drawing from `rng`. `config.seed` is ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the config fails validation.
    pub fn with_rng(config: SessionConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            rng,
            scores: ScoreBoard::new(),
            active: None,
            history: Vec::new(),
        })
    }

    #[must_use]
    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    #[must_use]
    pub fn active_game(&self) -> Option<&ActiveGame> {
        self.active.as_ref()
    }

    #[must_use]
    pub fn active_kind(&self) -> Option<GameKind> {
        self.active.as_ref().map(ActiveGame::kind)
    }

    /// Completions since the last reset, oldest first.
    #[must_use]
    pub fn history(&self) -> &[CompletionRecord] {
        &self.history
    }

    /// The session's random source, e.g. to queue forced draws.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Apply any user action.
    ///
    /// # Errors
    ///
    /// Returns the [`GameError`] from [`start`](Self::start) or
    /// [`act`](Self::act); selection and reset never fail.
    pub fn dispatch(&mut self, action: UserAction) -> Result<ActionReport, GameError> {
        match action {
            UserAction::SelectGame(kind) => Ok(self.select_game(kind)),
            UserAction::Start => self.start(),
            UserAction::Act(input) => self.act(input),
            UserAction::ResetSession => Ok(self.reset_session()),
        }
    }

    /// Make `kind` the active game. Switching discards the previous game;
    /// re-selecting the active game keeps it as is.
    pub fn select_game(&mut self, kind: GameKind) -> ActionReport {
        let before = self.achievements();
        if self.active_kind() != Some(kind) {
            info!("selected {kind}");
            self.active = Some(ActiveGame::new(kind, &self.config));
        }
        self.report(None, None, before)
    }

    /// Start a new round of the active game.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoActiveGame`] if no game is selected.
    pub fn start(&mut self) -> Result<ActionReport, GameError> {
        let before = self.achievements();
        let game = self.active.as_mut().ok_or(GameError::NoActiveGame)?;
        game.start(&mut self.rng);
        debug!("started {}", game.kind());
        Ok(self.report(None, None, before))
    }

    /// Make a move in the active game, recording the score on completion.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoActiveGame`] if no game is selected, or the
    /// game's own rejection. Rejected moves change nothing.
    pub fn act(&mut self, input: GameInput) -> Result<ActionReport, GameError> {
        let game = self.active.as_mut().ok_or(GameError::NoActiveGame)?;
        let kind = game.kind();

        let transition = game.act(input, &mut self.rng).map_err(|err| {
            warn!("{kind} rejected {}: {err}", input.name());
            err
        })?;
        debug!("{kind} {}: {:?}", input.name(), transition.outcome);

        let before = self.achievements();
        let completion = transition.points.map(|points| self.record(kind, points));
        Ok(self.report(Some(transition.outcome), completion, before))
    }

    /// Zero the score board and clear the completion log. The active game
    /// is left alone.
    pub fn reset_session(&mut self) -> ActionReport {
        info!(
            "session reset after {} games, {} points",
            self.scores.games_played(),
            self.scores.total_score()
        );
        let before = self.achievements();
        self.scores.reset();
        self.history.clear();
        self.report(None, None, before)
    }

    /// Achievements the current totals unlock.
    #[must_use]
    pub fn achievements(&self) -> BTreeSet<Achievement> {
        scoring::evaluate(&self.scores)
    }

    #[must_use]
    pub fn stats(&self) -> SessionStats {
        SessionStats::from_board(&self.scores)
    }

    /// `Statistic,Value` CSV of the current totals.
    #[must_use]
    pub fn export_csv(&self) -> String {
        self.stats().to_csv()
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        let active = self.active.as_ref().map(|game| ActiveGameView {
            kind: game.kind(),
            phase: game.phase(),
            view: game.view(),
        });
        SessionSnapshot {
            scores: self.scores,
            active,
            stats: self.stats(),
        }
    }

    fn record(&mut self, game: GameKind, points: u32) -> CompletionRecord {
        self.scores.record_completion(points);
        let record = CompletionRecord {
            sequence: self.history.len() as u32 + 1,
            game,
            points,
        };
        self.history.push(record);
        info!(
            "{game} completed for {points} points (games {}, total {})",
            self.scores.games_played(),
            self.scores.total_score()
        );
        record
    }

    fn report(
        &self,
        outcome: Option<GameOutcome>,
        completion: Option<CompletionRecord>,
        before: BTreeSet<Achievement>,
    ) -> ActionReport {
        let newly_unlocked: Vec<_> = self.achievements().difference(&before).copied().collect();
        for achievement in &newly_unlocked {
            info!("achievement unlocked: {achievement}");
        }
        ActionReport {
            outcome,
            completion,
            newly_unlocked,
            snapshot: self.snapshot(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedRng;
    use crate::games::Choice;

    fn session(values: &[u32]) -> Session<ScriptedRng> {
        let rng = ScriptedRng::new(1).with_values(values.iter().copied());
        Session::with_rng(SessionConfig::new(), rng).unwrap()
    }

    #[test]
    fn test_fresh_session() {
        let s = session(&[]);
        assert_eq!(s.scores().games_played(), 0);
        assert_eq!(s.scores().total_score(), 0);
        assert_eq!(s.active_kind(), None);
        assert!(s.achievements().is_empty());
        assert!(s.snapshot().active.is_none());
    }

    #[test]
    fn test_requires_active_game() {
        let mut s = session(&[]);
        assert_eq!(s.start().unwrap_err(), GameError::NoActiveGame);
        assert_eq!(s.act(GameInput::Roll).unwrap_err(), GameError::NoActiveGame);
    }

    #[test]
    fn test_input_mismatch_changes_nothing() {
        let mut s = session(&[]);
        s.select_game(GameKind::Dice);

        let err = s.act(GameInput::Guess(10)).unwrap_err();
        assert_eq!(
            err,
            GameError::InputMismatch {
                active: GameKind::Dice,
                input: "guess",
                target: GameKind::NumberGuess,
            }
        );
        assert_eq!(s.scores().games_played(), 0);
    }

    #[test]
    fn test_reselect_keeps_state_switch_discards() {
        let mut s = session(&[37]);
        s.select_game(GameKind::NumberGuess);
        s.start().unwrap();
        s.act(GameInput::Guess(10)).unwrap();

        s.select_game(GameKind::NumberGuess);
        assert_eq!(s.active_game().map(ActiveGame::phase), Some(Phase::Active));

        s.select_game(GameKind::Dice);
        s.select_game(GameKind::NumberGuess);
        assert_eq!(s.active_game().map(ActiveGame::phase), Some(Phase::Idle));
    }

    #[test]
    fn test_completion_records_history() {
        let mut s = session(&[4, 1]);
        s.select_game(GameKind::Dice);
        let first = s.act(GameInput::Roll).unwrap();
        assert_eq!(
            first.completion,
            Some(CompletionRecord {
                sequence: 1,
                game: GameKind::Dice,
                points: 20
            })
        );

        s.select_game(GameKind::RockPaperScissors);
        // Paper vs Paper.
        let second = s.act(GameInput::Play(Choice::Paper)).unwrap();
        assert_eq!(second.completion.map(|c| c.points), Some(2));
        assert_eq!(s.history().len(), 2);
        assert_eq!(second.snapshot.scores.total_score(), 22);
    }

    #[test]
    fn test_reset_keeps_active_game() {
        let mut s = session(&[6]);
        s.select_game(GameKind::Dice);
        s.act(GameInput::Roll).unwrap();

        let report = s.dispatch(UserAction::ResetSession).unwrap();
        assert_eq!(report.snapshot.scores, ScoreBoard::new());
        assert!(s.history().is_empty());
        assert_eq!(s.active_kind(), Some(GameKind::Dice));
    }

    #[test]
    fn test_newly_unlocked_reported_once() {
        let mut s = session(&[6, 6]);
        s.select_game(GameKind::Dice);

        let first = s.act(GameInput::Roll).unwrap();
        assert!(first.newly_unlocked.is_empty());

        let second = s.act(GameInput::Roll).unwrap();
        assert_eq!(second.newly_unlocked, vec![Achievement::ScoringStar]);

        let third = s.act(GameInput::Roll).unwrap();
        assert!(third.newly_unlocked.is_empty());
    }

    #[test]
    fn test_held_achievements_not_reported_again() {
        let mut s = session(&[6; 5]);
        s.select_game(GameKind::Dice);
        for _ in 0..5 {
            s.act(GameInput::Roll).unwrap();
        }
        assert_eq!(s.achievements().len(), 2);

        assert!(s.select_game(GameKind::Dice).newly_unlocked.is_empty());
        assert!(s.start().unwrap().newly_unlocked.is_empty());
        assert!(s.select_game(GameKind::Quiz).newly_unlocked.is_empty());
        assert!(s.reset_session().newly_unlocked.is_empty());
        assert!(s.achievements().is_empty());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SessionConfig::new().with_questions(Vec::new());
        assert!(Session::with_rng(config, ScriptedRng::new(0)).is_err());
    }
}
