use flashdeck::application::ports::{
    FlashcardRepository, ProfileRepository, RepositoryError, StudySessionRepository,
};
use flashdeck::domain::{
    Flashcard, FlashcardSet, FlashcardSetId, Profile, StudySession, Theme, UserId,
};

use crate::helpers::TestPostgres;

async fn seeded_set(pg: &TestPostgres, owner: UserId) -> FlashcardSet {
    let set = FlashcardSet::new(owner, "Cell Biology", Some("Chapter 3"));
    pg.flashcard_repository
        .create_set(&set)
        .await
        .expect("Failed to create set");

    let cards = vec![
        Flashcard::new(set.id, "Mitosis", "Division producing two identical cells", 1),
        Flashcard::new(set.id, "Nucleus", "Organelle holding the genome", 0),
    ];
    pg.flashcard_repository
        .insert_cards(&cards)
        .await
        .expect("Failed to insert cards");
    set
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn given_set_with_cards_when_listing_then_card_count_and_order_are_returned() {
    let pg = TestPostgres::new().await;
    let owner = UserId::new();
    let set = seeded_set(&pg, owner).await;

    let summaries = pg.flashcard_repository.list_sets(owner).await.unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].set.id, set.id);
    assert_eq!(summaries[0].card_count, 2);

    let cards = pg.flashcard_repository.list_cards(owner, set.id).await.unwrap();
    let fronts: Vec<_> = cards.iter().map(|c| c.front.as_str()).collect();
    assert_eq!(fronts, vec!["Nucleus", "Mitosis"]);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn given_other_owner_when_reading_set_then_it_is_not_visible() {
    let pg = TestPostgres::new().await;
    let set = seeded_set(&pg, UserId::new()).await;
    let stranger = UserId::new();

    assert!(pg.flashcard_repository.get_set(stranger, set.id).await.unwrap().is_none());
    assert!(pg.flashcard_repository.list_cards(stranger, set.id).await.unwrap().is_empty());
    assert!(!pg.flashcard_repository.delete_set(stranger, set.id).await.unwrap());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn given_set_when_deleted_then_cards_and_sessions_cascade() {
    let pg = TestPostgres::new().await;
    let owner = UserId::new();
    let set = seeded_set(&pg, owner).await;
    pg.study_session_repository
        .create(&StudySession::new(set.id, owner, 2, 1))
        .await
        .unwrap();

    assert!(pg.flashcard_repository.delete_set(owner, set.id).await.unwrap());

    let (cards,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM flashcards WHERE set_id = $1")
        .bind(set.id.as_uuid())
        .fetch_one(&pg.pool)
        .await
        .unwrap();
    assert_eq!(cards, 0);
    assert!(pg
        .study_session_repository
        .list_for_set(owner, set.id)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn given_missing_set_when_inserting_cards_then_constraint_violation() {
    let pg = TestPostgres::new().await;
    let orphan = Flashcard::new(FlashcardSetId::new(), "Front", "Back", 0);

    let result = pg.flashcard_repository.insert_cards(&[orphan]).await;

    assert!(matches!(result, Err(RepositoryError::ConstraintViolation(_))));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn given_existing_card_when_updating_then_text_is_replaced() {
    let pg = TestPostgres::new().await;
    let owner = UserId::new();
    let set = seeded_set(&pg, owner).await;
    let card = pg.flashcard_repository.list_cards(owner, set.id).await.unwrap()[0].clone();

    let updated = pg
        .flashcard_repository
        .update_card(owner, card.id, "Cell nucleus", "Holds chromosomes")
        .await
        .unwrap()
        .expect("card should exist");

    assert_eq!(updated.front, "Cell nucleus");
    assert_eq!(updated.back, "Holds chromosomes");
    assert!(pg.flashcard_repository.update_card(UserId::new(), card.id, "x", "y").await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn given_profile_when_upserting_twice_then_latest_values_win() {
    let pg = TestPostgres::new().await;
    let user = UserId::new();
    let mut profile = Profile::with_defaults(user, Some("ada@example.com"));

    pg.profile_repository.upsert(&profile).await.unwrap();
    profile.theme = Theme::Green;
    profile.display_name = Some("Ada".to_string());
    pg.profile_repository.upsert(&profile).await.unwrap();

    let stored = pg.profile_repository.get(user).await.unwrap().unwrap();
    assert_eq!(stored.theme, Theme::Green);
    assert_eq!(stored.display_name.as_deref(), Some("Ada"));
}
