//! Static content the games run over: quiz questions, card symbols and the
//! seeded leaderboard.
//!
//! The defaults reproduce the company dashboard's mock data so an arcade
//! can be stood up with no configuration at all.

pub mod question;
pub mod symbols;

pub use question::{Question, QuestionSet, OPTION_COUNT};
pub use symbols::{SymbolId, SymbolSet};

use chrono::{TimeZone, Utc};

use crate::scores::ScoreRecord;

/// The five company-trivia questions, in quiz order.
#[must_use]
pub fn default_questions() -> QuestionSet {
    let questions = vec![
        Question::new(
            "1",
            "What year was our company founded?",
            ["2018", "2019", "2020", "2021"],
            1,
        )
        .with_explanation(
            "Our company was founded in 2019 with a mission to revolutionize workplace collaboration.",
        )
        .with_category("Company History"),
        Question::new(
            "2",
            "Which of these is one of our core values?",
            ["Be Customer-Obsessed", "Move Fast", "Think Different", "Just Do It"],
            0,
        )
        .with_explanation(
            "Being Customer-Obsessed is one of our five core principles, ensuring every decision benefits our customers first.",
        )
        .with_category("Company Values"),
        Question::new(
            "3",
            "What is our current employee count?",
            ["50-100", "100-200", "200-500", "500+"],
            2,
        )
        .with_explanation(
            "We currently have approximately 350 employees across all departments and locations.",
        )
        .with_category("Company Facts"),
        Question::new(
            "4",
            "Which department was established most recently?",
            ["Marketing", "Design", "DevOps", "Customer Success"],
            2,
        )
        .with_explanation(
            "Our DevOps team was established in late 2023 to support our growing infrastructure needs.",
        )
        .with_category("Company Structure"),
        Question::new(
            "5",
            "What is our main product focus?",
            ["E-commerce", "Social Media", "Workplace Collaboration", "Gaming"],
            2,
        )
        .with_explanation(
            "We specialize in workplace collaboration tools that help teams work better together.",
        )
        .with_category("Products"),
    ];

    QuestionSet::new(questions).expect("built-in questions are well formed")
}

/// The eight memory-card faces.
#[must_use]
pub fn default_symbols() -> SymbolSet {
    SymbolSet::new(["🎯", "🚀", "💡", "⭐", "🎨", "🔥", "💎", "🏆"])
        .expect("built-in symbols are distinct")
}

/// All-time high scores shown above the player's own results.
#[must_use]
pub fn default_high_scores() -> Vec<ScoreRecord> {
    let seeded = [
        ("1", "Sarah Chen", 2850, (15, 30)),
        ("2", "Marcus Rodriguez", 2650, (14, 15)),
        ("3", "Emma Thompson", 2400, (13, 45)),
    ];

    seeded
        .into_iter()
        .map(|(id, name, score, (hour, minute))| ScoreRecord {
            id: id.to_string(),
            player_name: name.to_string(),
            score,
            game: "Company Trivia".to_string(),
            timestamp: Utc
                .with_ymd_and_hms(2025, 1, 7, hour, minute, 0)
                .single()
                .unwrap_or_default(),
        })
        .collect()
}
