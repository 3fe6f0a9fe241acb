use std::collections::HashSet;

use chrono::{Days, NaiveDate};

use crate::domain::{StudySession, accuracy_percent};

const RECENT_WINDOW: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct BestSession {
    pub session: StudySession,
    pub accuracy: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StudyStats {
    pub total_sessions: usize,
    pub total_cards_studied: u64,
    pub total_cards_correct: u64,
    pub overall_accuracy: u32,
    pub recent_accuracy: u32,
    pub best_session: Option<BestSession>,
    pub study_streak: u32,
}

/// Aggregates a set's history. `sessions` must be ordered most recent first.
pub fn compute_stats(sessions: &[StudySession], today: NaiveDate) -> StudyStats {
    let (total_cards_studied, total_cards_correct) = totals(sessions);

    StudyStats {
        total_sessions: sessions.len(),
        total_cards_studied,
        total_cards_correct,
        overall_accuracy: overall_accuracy(sessions),
        recent_accuracy: recent_accuracy(sessions),
        best_session: best_session(sessions),
        study_streak: study_streak(sessions, today),
    }
}

pub fn overall_accuracy(sessions: &[StudySession]) -> u32 {
    let (studied, correct) = totals(sessions);
    accuracy_percent(correct, studied)
}

pub fn recent_accuracy(sessions: &[StudySession]) -> u32 {
    let window = &sessions[..sessions.len().min(RECENT_WINDOW)];
    overall_accuracy(window)
}

/// First session with the highest accuracy. A later session only replaces the current
/// best when it is strictly better, and nothing qualifies below 0%.
pub fn best_session(sessions: &[StudySession]) -> Option<BestSession> {
    let mut best: Option<&StudySession> = None;
    let mut best_ratio = 0.0_f64;

    for session in sessions {
        let ratio = session.accuracy_ratio();
        if ratio > best_ratio {
            best = Some(session);
            best_ratio = ratio;
        }
    }

    best.map(|session| BestSession {
        session: session.clone(),
        accuracy: accuracy_percent(
            u64::from(session.cards_correct),
            u64::from(session.cards_studied),
        ),
    })
}

/// Consecutive UTC days with at least one session, counting back from `today`, or from
/// yesterday when nothing was studied today.
pub fn study_streak(sessions: &[StudySession], today: NaiveDate) -> u32 {
    let days: HashSet<NaiveDate> = sessions
        .iter()
        .map(|s| s.session_date.date_naive())
        .collect();

    let mut cursor = if days.contains(&today) {
        Some(today)
    } else {
        today.checked_sub_days(Days::new(1))
    };

    let mut streak = 0;
    while let Some(day) = cursor.filter(|d| days.contains(d)) {
        streak += 1;
        cursor = day.checked_sub_days(Days::new(1));
    }
    streak
}

fn totals(sessions: &[StudySession]) -> (u64, u64) {
    sessions.iter().fold((0, 0), |(studied, correct), s| {
        (
            studied + u64::from(s.cards_studied),
            correct + u64::from(s.cards_correct),
        )
    })
}
