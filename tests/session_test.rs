//! Tests for the session controller.

use std::time::Instant;

use word_scramble::{
    Difficulty, FallbackWordSource, GIVE_UP_DELAY, SUCCESS_DELAY, Scoring, Session, SessionStatus,
    WordData, fallback_words,
};

fn words(list: &[&str]) -> Vec<WordData> {
    list.iter()
        .map(|w| WordData::new(*w, format!("Hint for {}", w)).expect("valid word"))
        .collect()
}

fn solve_current(session: &mut Session, now: Instant) -> Instant {
    let round = session.round_mut().expect("active round");
    let word = round.word().word().clone();
    for ch in word.chars() {
        assert!(round.place_char(ch, now));
    }
    now + SUCCESS_DELAY
}

fn give_up_current(session: &mut Session, now: Instant) -> Instant {
    let round = session.round_mut().expect("active round");
    assert!(round.give_up(now));
    now + GIVE_UP_DELAY
}

#[test]
fn test_start_rejects_empty_batch() {
    let err = Session::start("science", Difficulty::Easy, Vec::new(), Scoring::default())
        .expect_err("empty batch");
    assert!(err.message.contains("empty"));
}

#[test]
fn test_start_deals_first_word() {
    let session = Session::start(
        "science",
        Difficulty::Medium,
        words(&["ATOM", "ORBIT"]),
        Scoring::default(),
    )
    .expect("session");

    assert_eq!(session.max_rounds(), 2);
    assert_eq!(*session.current_round(), 0);
    assert_eq!(*session.score(), 0);
    assert_eq!(*session.status(), SessionStatus::Playing);
    assert_eq!(session.round().expect("round").word().word(), "ATOM");
}

#[test]
fn test_full_game_scores_and_records_history() {
    let mut session = Session::start(
        "science",
        Difficulty::Easy,
        words(&["ATOM", "ORBIT", "GENE"]),
        Scoring::default(),
    )
    .expect("session");
    let mut now = Instant::now();

    // Round 1: clean solve.
    let due = solve_current(&mut session, now);
    assert!(session.advance(due).is_some());
    assert_eq!(*session.score(), 100);
    assert_eq!(*session.current_round(), 1);
    now = due;

    // Round 2: solved with the hint.
    session.round_mut().expect("round").use_hint();
    let due = solve_current(&mut session, now);
    session.advance(due);
    assert_eq!(*session.score(), 175);
    now = due;

    // Round 3: given up.
    let due = give_up_current(&mut session, now);
    session.advance(due);

    assert!(session.is_finished());
    assert!(session.round().is_none());
    assert_eq!(*session.score(), 175);
    assert_eq!(*session.current_round(), 2);
    assert_eq!(session.solved_count(), 2);
    assert!(!session.is_perfect());

    let history: Vec<_> = session
        .history()
        .iter()
        .map(|r| (r.word().as_str(), *r.solved()))
        .collect();
    assert_eq!(
        history,
        vec![("ATOM", true), ("ORBIT", true), ("GENE", false)]
    );
}

#[test]
fn test_round_index_walks_every_round_in_order() {
    let mut session = Session::start(
        "food",
        Difficulty::Easy,
        words(&["PASTA", "BREAD", "SALAD"]),
        Scoring::default(),
    )
    .expect("session");
    let mut now = Instant::now();
    let mut seen = vec![*session.current_round()];

    while !session.is_finished() {
        now = give_up_current(&mut session, now);
        assert!(session.advance(now).is_some());
        if !session.is_finished() {
            seen.push(*session.current_round());
        }
    }

    assert_eq!(seen, vec![0, 1, 2]);
    assert!(*session.current_round() < session.max_rounds());
    assert_eq!(session.history().len(), session.max_rounds());
}

#[test]
fn test_completion_after_finish_is_ignored() {
    let mut session = Session::start(
        "food",
        Difficulty::Easy,
        words(&["PASTA"]),
        Scoring::default(),
    )
    .expect("session");
    let due = solve_current(&mut session, Instant::now());
    session.advance(due);
    assert!(session.is_perfect());

    let status = session.on_round_complete(word_scramble::RoundOutcome {
        points: 100,
        solved: true,
    });
    assert_eq!(status, SessionStatus::Finished);
    assert_eq!(*session.score(), 100);
    assert_eq!(session.history().len(), 1);
    assert!(session.advance(due).is_none());
}

#[test]
fn test_advance_before_deadline_changes_nothing() {
    let mut session = Session::start(
        "travel",
        Difficulty::Hard,
        words(&["PASSPORT", "AIRPORT"]),
        Scoring::default(),
    )
    .expect("session");
    let now = Instant::now();
    let due = solve_current(&mut session, now);

    assert!(session.advance(now).is_none());
    assert_eq!(*session.current_round(), 0);
    assert!(session.advance(due).is_some());
    assert_eq!(*session.current_round(), 1);
}

#[test]
fn test_custom_scoring_is_applied() {
    let mut session = Session::start(
        "general",
        Difficulty::Easy,
        words(&["CAT"]),
        Scoring::new(50, 20),
    )
    .expect("session");
    session.round_mut().expect("round").use_hint();
    let due = solve_current(&mut session, Instant::now());
    session.advance(due);
    assert_eq!(*session.score(), 30);
}

#[tokio::test]
async fn test_start_game_from_fallback_source() {
    let session = Session::start_game(
        &FallbackWordSource,
        "science",
        Difficulty::Hard,
        Scoring::default(),
        5,
    )
    .await
    .expect("session");

    assert_eq!(session.max_rounds(), 5);
    assert_eq!(session.words(), &fallback_words());
    assert_eq!(session.topic(), "science");
}

#[tokio::test]
async fn test_play_again_keeps_topic_and_resets_state() {
    let mut session = Session::start_game(
        &FallbackWordSource,
        "technology",
        Difficulty::Expert,
        Scoring::default(),
        5,
    )
    .await
    .expect("session");
    let due = solve_current(&mut session, Instant::now());
    session.advance(due);
    assert_eq!(*session.score(), 100);

    let fresh = session
        .play_again(&FallbackWordSource, 5)
        .await
        .expect("session");
    assert_eq!(fresh.topic(), "technology");
    assert_eq!(*fresh.difficulty(), Difficulty::Expert);
    assert_eq!(*fresh.score(), 0);
    assert_eq!(*fresh.current_round(), 0);
    assert!(fresh.history().is_empty());
}

#[test]
fn test_quit_consumes_session() {
    let session = Session::start(
        "general",
        Difficulty::Easy,
        words(&["CAT", "DOG"]),
        Scoring::default(),
    )
    .expect("session");
    session.quit();
}
