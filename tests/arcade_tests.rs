//! Arcade host integration tests.
//!
//! These tests drive both games purely through virtual time and check that
//! timers are armed, fired and cancelled the way the dashboard expects.

use chrono::NaiveDate;
use team_arcade::content::default_symbols;
use team_arcade::{
    Arcade, ArcadeConfig, FixedClock, FlipOutcome, GameContext, MemoryStore, Mood, MoodCounts,
    QuestionSet, RecordingSink, SymbolId, TriviaPhase,
};

fn arcade() -> Arcade {
    Arcade::new(ArcadeConfig::default().with_seed(42)).unwrap()
}

fn clock() -> FixedClock {
    FixedClock::on(NaiveDate::from_ymd_opt(2025, 1, 7).unwrap())
}

/// Positions of `symbol` on the current memory board.
fn positions(arcade: &Arcade, symbol: SymbolId) -> (usize, usize) {
    let cards = arcade.memory().board().cards();
    let found: Vec<usize> = (0..cards.len()).filter(|&i| cards[i] == symbol).collect();
    (found[0], found[1])
}

/// Left alone, every question times out and the session finishes at 0.
#[test]
fn test_unattended_quiz_times_out_through() {
    let (mut sink, mut store, clock) = (RecordingSink::new(), MemoryStore::new(), clock());
    let mut ctx = GameContext::new(&mut sink, &mut store, &clock);
    let mut arcade = arcade();
    arcade.start_trivia();

    // First question: 30 ticks to time out.
    arcade.advance_time(29_000, &mut ctx);
    assert_eq!(arcade.trivia().phase(), TriviaPhase::InProgress);
    assert_eq!(arcade.trivia().seconds_remaining(), 1);
    arcade.advance_time(1_000, &mut ctx);
    assert_eq!(arcade.trivia().phase(), TriviaPhase::AnswerRevealed);

    // Each question takes 30 s of countdown plus 2 s of reveal.
    arcade.advance_time(5 * 32_000, &mut ctx);
    assert_eq!(arcade.trivia().phase(), TriviaPhase::Finished);
    assert_eq!(arcade.trivia().score(), 0);
    assert_eq!(arcade.scheduler().pending(), 0);

    drop(ctx);
    assert_eq!(sink.last().unwrap().message, "Final score: 0 points");
    assert_eq!(arcade.recent_scores(&store).len(), 1);
}

/// Mixed play through the host: answers, a timeout, auto-advance.
#[test]
fn test_scripted_quiz_through_host() {
    let (mut sink, mut store, clock) = (RecordingSink::new(), MemoryStore::new(), clock());
    let mut ctx = GameContext::new(&mut sink, &mut store, &clock);
    let mut arcade = arcade();
    arcade.start_trivia();

    arcade.answer_trivia(1, &mut ctx); // right
    arcade.advance_time(2_000, &mut ctx);
    arcade.advance_time(4_000, &mut ctx);
    arcade.answer_trivia(0, &mut ctx); // right
    arcade.advance_time(2_000, &mut ctx);
    arcade.answer_trivia(0, &mut ctx); // wrong
    arcade.advance_time(2_000, &mut ctx);
    arcade.advance_time(32_000, &mut ctx); // timeout + reveal
    assert_eq!(arcade.trivia().current_index(), 4);
    assert_eq!(arcade.trivia().seconds_remaining(), 30);
    arcade.answer_trivia(2, &mut ctx); // right
    arcade.advance_time(2_000, &mut ctx);

    assert_eq!(arcade.trivia().phase(), TriviaPhase::Finished);
    assert_eq!(arcade.trivia().score(), 300);
    assert_eq!(arcade.personal_best(&store), 300);
}

/// Restarting mid-reveal drops the pending auto-advance.
#[test]
fn test_restart_discards_pending_advance() {
    let (mut sink, mut store, clock) = (RecordingSink::new(), MemoryStore::new(), clock());
    let mut ctx = GameContext::new(&mut sink, &mut store, &clock);
    let mut arcade = arcade();
    arcade.start_trivia();
    arcade.answer_trivia(1, &mut ctx);

    arcade.start_trivia();
    assert_eq!(arcade.trivia().phase(), TriviaPhase::InProgress);
    assert_eq!(arcade.trivia().score(), 0);
    assert_eq!(arcade.scheduler().pending(), 1);

    // The old advance would have fired here; still on question one.
    arcade.advance_time(2_000, &mut ctx);
    assert_eq!(arcade.trivia().current_index(), 0);
    assert_eq!(arcade.trivia().seconds_remaining(), 28);
}

/// A mismatch turns back after exactly the display delay.
#[test]
fn test_mismatch_resolves_after_delay() {
    let (mut sink, mut store, clock) = (RecordingSink::new(), MemoryStore::new(), clock());
    let mut ctx = GameContext::new(&mut sink, &mut store, &clock);
    let mut arcade = arcade();

    let (a, _) = positions(&arcade, SymbolId(0));
    let (b, _) = positions(&arcade, SymbolId(1));
    arcade.flip_card(a, &mut ctx);
    assert_eq!(arcade.flip_card(b, &mut ctx), FlipOutcome::Mismatched);

    arcade.advance_time(999, &mut ctx);
    assert_eq!(arcade.memory().board().flipped().len(), 2);
    arcade.advance_time(1, &mut ctx);
    assert!(arcade.memory().board().flipped().is_empty());
    assert_eq!(arcade.memory().move_count(), 1);
}

/// Re-dealing cancels a pending mismatch timer.
#[test]
fn test_start_memory_cancels_resolve() {
    let (mut sink, mut store, clock) = (RecordingSink::new(), MemoryStore::new(), clock());
    let mut ctx = GameContext::new(&mut sink, &mut store, &clock);
    let mut arcade = arcade();

    let (a, _) = positions(&arcade, SymbolId(0));
    let (b, _) = positions(&arcade, SymbolId(1));
    arcade.flip_card(a, &mut ctx);
    arcade.flip_card(b, &mut ctx);
    assert_eq!(arcade.scheduler().pending(), 1);

    arcade.start_memory().unwrap();
    assert_eq!(arcade.scheduler().pending(), 0);
    assert_eq!(arcade.memory().move_count(), 0);
    assert!(arcade.memory().board().flipped().is_empty());
}

/// Finished games show up on the leaderboard among the seeded highs.
#[test]
fn test_leaderboard_includes_player() {
    let (mut sink, mut store, clock) = (RecordingSink::new(), MemoryStore::new(), clock());
    let mut ctx = GameContext::new(&mut sink, &mut store, &clock);
    let mut arcade = arcade();

    for symbol in 0..8 {
        let (a, b) = positions(&arcade, SymbolId(symbol));
        arcade.flip_card(a, &mut ctx);
        arcade.flip_card(b, &mut ctx);
    }
    assert!(arcade.memory().is_complete());
    drop(ctx);

    let rows = arcade.standings(&store);
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0].record.player_name, "Sarah Chen");
    assert_eq!(rows[3].rank, 4);
    assert_eq!(rows[3].record.score, 400);
    assert_eq!(rows[3].record.game, "Memory Game");
}

/// Mood check-ins go through the host and its store.
#[test]
fn test_mood_checkin() {
    let (mut sink, mut store) = (RecordingSink::new(), MemoryStore::new());
    let mut clock = clock();
    let arcade = arcade();

    for mood in [Mood::Happy, Mood::Stressed, Mood::Happy] {
        let mut ctx = GameContext::new(&mut sink, &mut store, &clock);
        arcade.record_mood(mood, &mut ctx);
        clock.advance(chrono::Duration::days(1));
    }

    let ctx = GameContext::new(&mut sink, &mut store, &clock);
    assert_eq!(arcade.todays_mood(&ctx), None);
    assert_eq!(arcade.mood_stats(&ctx), MoodCounts { happy: 2, okay: 0, stressed: 1 });
}

/// Bad content is reported once, when the arcade is built.
#[test]
fn test_construction_errors() {
    let config = ArcadeConfig::from_json(r#"{ "memory": { "pair_count": 12 } }"#).unwrap();
    assert!(Arcade::new(config).is_err());

    assert!(QuestionSet::new(vec![]).is_err());

    let config = ArcadeConfig::default().with_seed(1);
    let questions = QuestionSet::from_json(
        r#"[{ "id": "x", "prompt": "?", "options": ["a","b","c","d"],
              "correct_option": 3, "explanation": "", "category": "" }]"#,
    )
    .unwrap();
    let arcade = Arcade::with_content(config, questions, default_symbols()).unwrap();
    assert_eq!(arcade.trivia().question_count(), 1);
}

/// Custom score window size applies to both games.
#[test]
fn test_score_window_from_config() {
    let (mut sink, mut store, clock) = (RecordingSink::new(), MemoryStore::new(), clock());
    let mut ctx = GameContext::new(&mut sink, &mut store, &clock);
    let config = ArcadeConfig::default().with_seed(3).with_score_log_capacity(2);
    let mut arcade = Arcade::new(config).unwrap();

    for _ in 0..3 {
        arcade.start_memory().unwrap();
        for symbol in 0..8 {
            let (a, b) = positions(&arcade, SymbolId(symbol));
            arcade.flip_card(a, &mut ctx);
            arcade.flip_card(b, &mut ctx);
        }
    }
    drop(ctx);
    assert_eq!(arcade.recent_scores(&store).len(), 2);
}
