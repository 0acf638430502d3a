//! Basic example of driving the potion engine without a UI.
//!
//! Plays the first few levels with a naive strategy: keep locked slots, try
//! each candidate color in turn at every open slot, and skip colors the slot
//! has already rejected.

use potion_core::{AttemptStatus, Color, GameConfig, Session};

fn main() {
    let mut session = Session::with_seed(GameConfig::default(), 2024).expect("default config is valid");

    for _ in 0..5 {
        let view = session.level_view();
        println!(
            "Level {}: {} slots, {} attempts, pool: {}",
            view.level_id,
            view.formula_length,
            view.max_attempts,
            view.potion_pool
                .iter()
                .map(Color::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        );

        loop {
            // A restart draws a new pool, so read it every attempt
            let pool = session.level_view().potion_pool;
            let guess = next_guess(&session, &pool);
            let outcome = match session.submit_guess(&guess) {
                Ok(outcome) => outcome,
                Err(err) => {
                    println!("  rejected: {}", err);
                    return;
                }
            };

            let marks: String = outcome
                .feedback
                .iter()
                .map(|f| match f.feedback {
                    potion_core::Feedback::Correct => 'O',
                    potion_core::Feedback::WrongPosition => '~',
                    potion_core::Feedback::WrongColor => 'x',
                })
                .collect();
            println!(
                "  attempt {:>2}: {:<12} ({} left)",
                outcome.attempt_index, marks, outcome.attempts_remaining
            );

            match outcome.status {
                AttemptStatus::Continue => {}
                AttemptStatus::LevelComplete => {
                    println!(
                        "  solved! score {} / progress {:.0}%",
                        session.score(),
                        session.progress()
                    );
                    break;
                }
                AttemptStatus::GameOverRetry => {
                    println!("  out of attempts, level restarted");
                }
            }
        }

        session.advance_level().expect("level is complete");
    }
}

/// Locked slots keep their color; open slots get the first pool color that
/// the slot has not rejected yet and that is not locked elsewhere.
fn next_guess(session: &Session, pool: &[Color]) -> Vec<Color> {
    let locked = session.locked_positions();
    let splashes = session.splash_positions();

    (0..session.formula_length())
        .map(|slot| {
            locked[slot].unwrap_or_else(|| {
                pool.iter()
                    .copied()
                    .find(|c| !splashes[slot].contains(c) && !locked.contains(&Some(*c)))
                    .unwrap_or(pool[0])
            })
        })
        .collect()
}
