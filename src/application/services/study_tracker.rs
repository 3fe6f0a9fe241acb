use std::sync::Arc;

use rand::Rng;

use crate::domain::{RunPhase, SessionSummary, StudyRun, StudySession, UserId};

use super::{ServiceError, StudySessionService};

/// What happened to the session summary after a run transition.
#[derive(Debug)]
pub enum SaveOutcome {
    /// The run is still going, or it ended without anything worth recording.
    NotRecorded,
    Saved(StudySession),
    /// Saving failed. The run's in-memory counters are still available.
    Failed(ServiceError),
}

/// Drives one [`StudyRun`] for one learner and persists its summary at completion.
pub struct StudyTracker {
    owner: UserId,
    run: StudyRun,
    sessions: Arc<StudySessionService>,
}

impl StudyTracker {
    pub fn new(owner: UserId, run: StudyRun, sessions: Arc<StudySessionService>) -> Self {
        Self {
            owner,
            run,
            sessions,
        }
    }

    pub fn run(&self) -> &StudyRun {
        &self.run
    }

    pub fn flip(&mut self) {
        self.run.flip();
    }

    pub fn previous(&mut self) {
        self.run.previous();
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.run.shuffle(rng);
    }

    pub fn unshuffle(&mut self) {
        self.run.unshuffle();
    }

    pub fn toggle_mode(&mut self) {
        self.run.toggle_mode();
    }

    pub fn restart(&mut self) {
        self.run.restart();
    }

    pub fn is_completed(&self) -> bool {
        self.run.phase() == RunPhase::Completed
    }

    pub async fn next(&mut self) -> SaveOutcome {
        let summary = self.run.next();
        self.save(summary).await
    }

    pub async fn mark_correct(&mut self) -> SaveOutcome {
        let summary = self.run.mark_correct();
        self.save(summary).await
    }

    pub async fn mark_incorrect(&mut self) -> SaveOutcome {
        let summary = self.run.mark_incorrect();
        self.save(summary).await
    }

    pub async fn complete(&mut self) -> SaveOutcome {
        let summary = self.run.complete();
        self.save(summary).await
    }

    async fn save(&self, summary: Option<SessionSummary>) -> SaveOutcome {
        let Some(summary) = summary else {
            return SaveOutcome::NotRecorded;
        };

        match self
            .sessions
            .record(
                self.owner,
                summary.set_id,
                summary.cards_studied,
                summary.cards_correct,
            )
            .await
        {
            Ok(session) => SaveOutcome::Saved(session),
            Err(e) => {
                tracing::error!(error = %e, set_id = %summary.set_id, "Failed to save study session");
                SaveOutcome::Failed(e)
            }
        }
    }
}
