use rand::Rng;
use rand::seq::SliceRandom;

use super::{Flashcard, FlashcardSetId, SessionSummary, accuracy_percent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudyMode {
    FrontToBack,
    BackToFront,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Idle,
    Active,
    Completed,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StudyRunError {
    #[error("flashcard set has no cards to study")]
    EmptyDeck,
}

/// In-memory state of one pass through a deck.
///
/// The run never talks to storage. Whenever it reaches [`RunPhase::Completed`] with at
/// least one answered card it hands back a [`SessionSummary`], at most once until
/// [`StudyRun::restart`] is called.
#[derive(Debug, Clone)]
pub struct StudyRun {
    set_id: FlashcardSetId,
    deck: Vec<Flashcard>,
    order: Vec<usize>,
    shuffled: bool,
    index: usize,
    flipped: bool,
    mode: StudyMode,
    studied: u32,
    correct: u32,
    phase: RunPhase,
    summary_emitted: bool,
}

impl StudyRun {
    pub fn new(set_id: FlashcardSetId, mut cards: Vec<Flashcard>) -> Result<Self, StudyRunError> {
        if cards.is_empty() {
            return Err(StudyRunError::EmptyDeck);
        }
        cards.sort_by_key(|c| c.position);
        let order = (0..cards.len()).collect();

        Ok(Self {
            set_id,
            deck: cards,
            order,
            shuffled: false,
            index: 0,
            flipped: false,
            mode: StudyMode::FrontToBack,
            studied: 0,
            correct: 0,
            phase: RunPhase::Idle,
            summary_emitted: false,
        })
    }

    pub fn set_id(&self) -> FlashcardSetId {
        self.set_id
    }

    pub fn len(&self) -> usize {
        self.deck.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    pub fn mode(&self) -> StudyMode {
        self.mode
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn is_shuffled(&self) -> bool {
        self.shuffled
    }

    pub fn cards_studied(&self) -> u32 {
        self.studied
    }

    pub fn cards_correct(&self) -> u32 {
        self.correct
    }

    pub fn accuracy(&self) -> u32 {
        accuracy_percent(u64::from(self.correct), u64::from(self.studied))
    }

    pub fn current_card(&self) -> &Flashcard {
        &self.deck[self.order[self.index]]
    }

    /// Text on the side currently facing the learner.
    pub fn visible_text(&self) -> &str {
        let card = self.current_card();
        match (self.mode, self.flipped) {
            (StudyMode::FrontToBack, false) | (StudyMode::BackToFront, true) => &card.front,
            (StudyMode::FrontToBack, true) | (StudyMode::BackToFront, false) => &card.back,
        }
    }

    pub fn flip(&mut self) {
        if self.phase == RunPhase::Completed {
            return;
        }
        self.phase = RunPhase::Active;
        self.flipped = !self.flipped;
    }

    /// Moves to the next card, completing the run when the current card is the last one.
    pub fn next(&mut self) -> Option<SessionSummary> {
        if self.phase == RunPhase::Completed {
            return None;
        }
        self.phase = RunPhase::Active;
        self.flipped = false;

        if self.index + 1 < self.order.len() {
            self.index += 1;
            None
        } else {
            self.finish()
        }
    }

    pub fn previous(&mut self) {
        if self.phase == RunPhase::Completed {
            return;
        }
        self.phase = RunPhase::Active;
        self.flipped = false;
        self.index = self.index.saturating_sub(1);
    }

    pub fn mark_correct(&mut self) -> Option<SessionSummary> {
        self.answer(true)
    }

    pub fn mark_incorrect(&mut self) -> Option<SessionSummary> {
        self.answer(false)
    }

    /// Reorders the deck randomly and returns to the first card. Counters are kept.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.order.shuffle(rng);
        self.shuffled = true;
        self.rewind();
    }

    pub fn unshuffle(&mut self) {
        self.order = (0..self.deck.len()).collect();
        self.shuffled = false;
        self.rewind();
    }

    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            StudyMode::FrontToBack => StudyMode::BackToFront,
            StudyMode::BackToFront => StudyMode::FrontToBack,
        };
        self.rewind();
    }

    pub fn restart(&mut self) {
        self.index = 0;
        self.flipped = false;
        self.studied = 0;
        self.correct = 0;
        self.phase = RunPhase::Idle;
        self.summary_emitted = false;
    }

    /// Ends the run early on request.
    pub fn complete(&mut self) -> Option<SessionSummary> {
        self.finish()
    }

    fn answer(&mut self, correct: bool) -> Option<SessionSummary> {
        if self.phase == RunPhase::Completed {
            return None;
        }
        self.studied += 1;
        if correct {
            self.correct += 1;
        }
        self.next()
    }

    fn rewind(&mut self) {
        self.index = 0;
        self.flipped = false;
    }

    fn finish(&mut self) -> Option<SessionSummary> {
        self.phase = RunPhase::Completed;

        if self.studied == 0 || self.summary_emitted {
            return None;
        }
        self.summary_emitted = true;

        Some(SessionSummary {
            set_id: self.set_id,
            cards_studied: self.studied,
            cards_correct: self.correct,
        })
    }
}
