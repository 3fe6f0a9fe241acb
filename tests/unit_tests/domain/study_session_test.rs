use flashdeck::domain::{FlashcardSetId, StudySession, UserId, accuracy_percent};

#[test]
fn given_seven_of_ten_correct_when_computing_accuracy_then_returns_seventy() {
    assert_eq!(accuracy_percent(7, 10), 70);
}

#[test]
fn given_nothing_studied_when_computing_accuracy_then_returns_zero() {
    assert_eq!(accuracy_percent(0, 0), 0);
}

#[test]
fn given_exact_half_percent_when_computing_accuracy_then_rounds_up() {
    // 1/8 = 12.5%
    assert_eq!(accuracy_percent(1, 8), 13);
    // 2/3 = 66.67%
    assert_eq!(accuracy_percent(2, 3), 67);
    // 1/3 = 33.33%
    assert_eq!(accuracy_percent(1, 3), 33);
}

#[test]
fn given_new_session_when_created_then_ratio_matches_counts() {
    let session = StudySession::new(FlashcardSetId::new(), UserId::new(), 4, 3);

    assert_eq!(session.cards_studied, 4);
    assert_eq!(session.cards_correct, 3);
    assert!((session.accuracy_ratio() - 0.75).abs() < f64::EPSILON);
}
