use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;

use crate::application::ports::{
    FlashcardRepository, ProfileRepository, RepositoryError, StudySessionRepository,
};
use crate::domain::{
    Flashcard, FlashcardId, FlashcardSet, FlashcardSetId, FlashcardSetSummary, Profile,
    StudySession, UserId,
};

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, RepositoryError> {
    mutex
        .lock()
        .map_err(|_| RepositoryError::QueryFailed("in-memory store lock poisoned".to_string()))
}

fn injected(operation: &str) -> RepositoryError {
    RepositoryError::QueryFailed(format!("injected failure: {operation}"))
}

/// Process-local flashcard store for scaffold mode and tests. Deleting a set removes its
/// cards, matching the database cascade.
#[derive(Default)]
pub struct InMemoryFlashcardRepository {
    sets: Mutex<HashMap<FlashcardSetId, FlashcardSet>>,
    cards: Mutex<HashMap<FlashcardId, Flashcard>>,
    fail_card_inserts: AtomicBool,
    fail_set_deletes: AtomicBool,
}

impl InMemoryFlashcardRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_card_inserts(&self, fail: bool) {
        self.fail_card_inserts.store(fail, Ordering::SeqCst);
    }

    pub fn fail_set_deletes(&self, fail: bool) {
        self.fail_set_deletes.store(fail, Ordering::SeqCst);
    }

    pub fn set_count(&self) -> usize {
        self.sets.lock().map(|s| s.len()).unwrap_or_default()
    }

    pub fn card_count(&self) -> usize {
        self.cards.lock().map(|c| c.len()).unwrap_or_default()
    }

    fn owns(&self, owner: UserId, set_id: FlashcardSetId) -> Result<bool, RepositoryError> {
        Ok(lock(&self.sets)?
            .get(&set_id)
            .is_some_and(|s| s.owner == owner))
    }
}

#[async_trait]
impl FlashcardRepository for InMemoryFlashcardRepository {
    async fn create_set(&self, set: &FlashcardSet) -> Result<(), RepositoryError> {
        let mut sets = lock(&self.sets)?;
        if sets.contains_key(&set.id) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "flashcard set {} already exists",
                set.id
            )));
        }
        sets.insert(set.id, set.clone());
        Ok(())
    }

    async fn insert_cards(&self, cards: &[Flashcard]) -> Result<(), RepositoryError> {
        if self.fail_card_inserts.load(Ordering::SeqCst) {
            return Err(injected("insert_cards"));
        }

        let sets = lock(&self.sets)?;
        if let Some(orphan) = cards.iter().find(|c| !sets.contains_key(&c.set_id)) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "flashcard set {} does not exist",
                orphan.set_id
            )));
        }

        let mut stored = lock(&self.cards)?;
        for card in cards {
            stored.insert(card.id, card.clone());
        }
        Ok(())
    }

    async fn delete_set(&self, owner: UserId, id: FlashcardSetId) -> Result<bool, RepositoryError> {
        if self.fail_set_deletes.load(Ordering::SeqCst) {
            return Err(injected("delete_set"));
        }

        let mut sets = lock(&self.sets)?;
        if !sets.get(&id).is_some_and(|s| s.owner == owner) {
            return Ok(false);
        }
        sets.remove(&id);
        lock(&self.cards)?.retain(|_, c| c.set_id != id);
        Ok(true)
    }

    async fn get_set(
        &self,
        owner: UserId,
        id: FlashcardSetId,
    ) -> Result<Option<FlashcardSet>, RepositoryError> {
        Ok(lock(&self.sets)?
            .get(&id)
            .filter(|s| s.owner == owner)
            .cloned())
    }

    async fn list_sets(&self, owner: UserId) -> Result<Vec<FlashcardSetSummary>, RepositoryError> {
        let sets = lock(&self.sets)?;
        let cards = lock(&self.cards)?;

        let mut summaries: Vec<FlashcardSetSummary> = sets
            .values()
            .filter(|s| s.owner == owner)
            .map(|s| FlashcardSetSummary {
                set: s.clone(),
                card_count: cards.values().filter(|c| c.set_id == s.id).count(),
            })
            .collect();
        summaries.sort_by(|a, b| b.set.created_at.cmp(&a.set.created_at));
        Ok(summaries)
    }

    async fn update_set(
        &self,
        owner: UserId,
        id: FlashcardSetId,
        title: &str,
        description: Option<&str>,
    ) -> Result<Option<FlashcardSet>, RepositoryError> {
        let mut sets = lock(&self.sets)?;
        let Some(set) = sets.get_mut(&id).filter(|s| s.owner == owner) else {
            return Ok(None);
        };
        set.title = title.to_string();
        set.description = description.map(str::to_string);
        set.updated_at = Utc::now();
        Ok(Some(set.clone()))
    }

    async fn list_cards(
        &self,
        owner: UserId,
        set_id: FlashcardSetId,
    ) -> Result<Vec<Flashcard>, RepositoryError> {
        if !self.owns(owner, set_id)? {
            return Ok(Vec::new());
        }

        let mut cards: Vec<Flashcard> = lock(&self.cards)?
            .values()
            .filter(|c| c.set_id == set_id)
            .cloned()
            .collect();
        cards.sort_by(|a, b| {
            a.position
                .cmp(&b.position)
                .then(a.created_at.cmp(&b.created_at))
        });
        Ok(cards)
    }

    async fn update_card(
        &self,
        owner: UserId,
        id: FlashcardId,
        front: &str,
        back: &str,
    ) -> Result<Option<Flashcard>, RepositoryError> {
        let set_id = match lock(&self.cards)?.get(&id) {
            Some(card) => card.set_id,
            None => return Ok(None),
        };
        if !self.owns(owner, set_id)? {
            return Ok(None);
        }

        let mut cards = lock(&self.cards)?;
        let Some(card) = cards.get_mut(&id) else {
            return Ok(None);
        };
        card.front = front.to_string();
        card.back = back.to_string();
        card.updated_at = Utc::now();
        Ok(Some(card.clone()))
    }

    async fn delete_card(&self, owner: UserId, id: FlashcardId) -> Result<bool, RepositoryError> {
        let set_id = match lock(&self.cards)?.get(&id) {
            Some(card) => card.set_id,
            None => return Ok(false),
        };
        if !self.owns(owner, set_id)? {
            return Ok(false);
        }
        Ok(lock(&self.cards)?.remove(&id).is_some())
    }
}

#[derive(Default)]
pub struct InMemoryStudySessionRepository {
    sessions: Mutex<Vec<StudySession>>,
    fail_writes: AtomicBool,
}

impl InMemoryStudySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn session_count(&self) -> usize {
        self.sessions.lock().map(|s| s.len()).unwrap_or_default()
    }
}

#[async_trait]
impl StudySessionRepository for InMemoryStudySessionRepository {
    async fn create(&self, session: &StudySession) -> Result<(), RepositoryError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(injected("create study session"));
        }
        if session.cards_correct > session.cards_studied {
            return Err(RepositoryError::ConstraintViolation(
                "cards_correct exceeds cards_studied".to_string(),
            ));
        }
        lock(&self.sessions)?.push(session.clone());
        Ok(())
    }

    async fn list_for_set(
        &self,
        owner: UserId,
        set_id: FlashcardSetId,
    ) -> Result<Vec<StudySession>, RepositoryError> {
        let mut sessions: Vec<StudySession> = lock(&self.sessions)?
            .iter()
            .filter(|s| s.owner == owner && s.set_id == set_id)
            .cloned()
            .collect();
        sessions.sort_by(|a, b| b.session_date.cmp(&a.session_date));
        Ok(sessions)
    }
}

#[derive(Default)]
pub struct InMemoryProfileRepository {
    profiles: Mutex<HashMap<UserId, Profile>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn get(&self, user_id: UserId) -> Result<Option<Profile>, RepositoryError> {
        Ok(lock(&self.profiles)?.get(&user_id).cloned())
    }

    async fn upsert(&self, profile: &Profile) -> Result<(), RepositoryError> {
        lock(&self.profiles)?.insert(profile.user_id, profile.clone());
        Ok(())
    }
}
