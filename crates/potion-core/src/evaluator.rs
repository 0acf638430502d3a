//! Attempt scoring.
//!
//! Only unlocked slots are classified, left to right. A guessed color counts
//! as misplaced when it occurs at some other formula slot that is not already
//! locked to that same color, including locks made earlier in the same guess;
//! otherwise it is absent. Formulas drawn by the generator
//! never repeat a color, but the rule stays correct if they do.

use crate::{Color, InvalidGuessError};
use serde::{Deserialize, Serialize};

/// Per-slot lock state: `Some(color)` once the slot was guessed correctly.
pub type LockedPositions = Vec<Option<Color>>;

/// Classification of one guessed slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Feedback {
    /// Right color, right slot; the slot locks
    Correct,
    /// Color belongs somewhere else in the formula
    WrongPosition,
    /// Color is not (or no longer) needed anywhere
    WrongColor,
}

impl Feedback {
    pub fn is_correct(&self) -> bool {
        matches!(self, Feedback::Correct)
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Feedback::Correct => write!(f, "correct"),
            Feedback::WrongPosition => write!(f, "wrong-position"),
            Feedback::WrongColor => write!(f, "wrong-color"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotFeedback {
    pub slot: usize,
    pub color: Color,
    pub feedback: Feedback,
}

/// Result of scoring one guess
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Feedback for every slot that was unlocked before the guess, in slot order
    pub feedback: Vec<SlotFeedback>,
    /// Lock state after applying this guess
    pub locked: LockedPositions,
}

impl Evaluation {
    /// Every slot is locked.
    pub fn is_solved(&self) -> bool {
        self.locked.iter().all(Option::is_some)
    }

    pub fn newly_locked(&self) -> impl Iterator<Item = usize> + '_ {
        self.feedback
            .iter()
            .filter(|f| f.feedback.is_correct())
            .map(|f| f.slot)
    }
}

/// Check that `guess` lines up with the formula and the current locks.
pub(crate) fn check_guess(
    formula: &[Color],
    locked: &[Option<Color>],
    guess: &[Color],
) -> Result<(), InvalidGuessError> {
    if guess.len() != formula.len() {
        return Err(InvalidGuessError::LengthMismatch {
            expected: formula.len(),
            actual: guess.len(),
        });
    }
    if locked.len() != formula.len() {
        return Err(InvalidGuessError::LengthMismatch {
            expected: formula.len(),
            actual: locked.len(),
        });
    }
    for (slot, (lock, guessed)) in locked.iter().zip(guess).enumerate() {
        if let Some(lock) = lock {
            if lock != guessed {
                return Err(InvalidGuessError::LockedSlotChanged {
                    slot,
                    locked: *lock,
                    guessed: *guessed,
                });
            }
        }
    }
    Ok(())
}

/// Score `guess` against `formula`, given the locks from earlier attempts.
pub fn evaluate(
    formula: &[Color],
    locked: &[Option<Color>],
    guess: &[Color],
) -> Result<Evaluation, InvalidGuessError> {
    check_guess(formula, locked, guess)?;

    let mut next = locked.to_vec();
    let mut feedback = Vec::with_capacity(formula.len());

    for (slot, &color) in guess.iter().enumerate() {
        if locked[slot].is_some() {
            continue;
        }

        let result = if formula[slot] == color {
            next[slot] = Some(color);
            Feedback::Correct
        } else if formula
            .iter()
            .zip(&next)
            .any(|(&target, &lock)| target == color && lock != Some(color))
        {
            Feedback::WrongPosition
        } else {
            Feedback::WrongColor
        };

        feedback.push(SlotFeedback {
            slot,
            color,
            feedback: result,
        });
    }

    Ok(Evaluation {
        feedback,
        locked: next,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use Color::*;

    fn kinds(evaluation: &Evaluation) -> Vec<Feedback> {
        evaluation.feedback.iter().map(|f| f.feedback).collect()
    }

    #[test]
    fn test_exact_guess_solves() {
        let formula = [Red, Yellow, Purple, Orange];
        let result = evaluate(&formula, &[None; 4], &formula).unwrap();

        assert_eq!(kinds(&result), vec![Feedback::Correct; 4]);
        assert!(result.is_solved());
        assert_eq!(result.newly_locked().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_swapped_colors_are_misplaced() {
        let result = evaluate(&[Red, Yellow, Purple], &[None; 3], &[Yellow, Red, Purple]).unwrap();

        assert_eq!(
            kinds(&result),
            vec![Feedback::WrongPosition, Feedback::WrongPosition, Feedback::Correct]
        );
        assert_eq!(result.locked, vec![None, None, Some(Purple)]);
        assert!(!result.is_solved());
    }

    #[test]
    fn test_absent_color() {
        let result = evaluate(&[Red, Yellow, Purple], &[None; 3], &[Pink, Pink, Pink]).unwrap();
        assert_eq!(kinds(&result), vec![Feedback::WrongColor; 3]);
        assert_eq!(result.locked, vec![None; 3]);
    }

    #[test]
    fn test_locked_slots_are_skipped() {
        let formula = [Red, Yellow, Purple];
        let locked = [Some(Red), None, None];
        let result = evaluate(&formula, &locked, &[Red, Purple, Yellow]).unwrap();

        assert_eq!(result.feedback.len(), 2);
        assert_eq!(result.feedback[0].slot, 1);
        assert_eq!(result.feedback[1].slot, 2);
        assert_eq!(result.locked[0], Some(Red));
    }

    #[test]
    fn test_color_only_at_its_locked_slot_is_wrong_color() {
        // Red is already accounted for by locked slot 0, so repeating it
        // elsewhere gives no positional hint
        let formula = [Red, Yellow, Purple];
        let locked = [Some(Red), None, None];
        let result = evaluate(&formula, &locked, &[Red, Red, Purple]).unwrap();

        assert_eq!(result.feedback[0].slot, 1);
        assert_eq!(result.feedback[0].feedback, Feedback::WrongColor);
        assert_eq!(result.feedback[1].feedback, Feedback::Correct);
    }

    #[test]
    fn test_color_locked_earlier_in_same_guess_is_wrong_color() {
        // Slot 0 locks Red before slot 1 is scored, leaving no open Red
        let result = evaluate(&[Red, Yellow, Purple], &[None; 3], &[Red, Red, Purple]).unwrap();

        assert_eq!(
            kinds(&result),
            vec![Feedback::Correct, Feedback::WrongColor, Feedback::Correct]
        );
        assert_eq!(result.locked, vec![Some(Red), None, Some(Purple)]);
    }

    #[test]
    fn test_later_lock_does_not_affect_earlier_slot() {
        // Slots are scored left to right; slot 2 locks Red only after slot 0
        let result = evaluate(&[Yellow, Purple, Red], &[None; 3], &[Red, Pink, Red]).unwrap();

        assert_eq!(
            kinds(&result),
            vec![Feedback::WrongPosition, Feedback::WrongColor, Feedback::Correct]
        );
    }

    #[test]
    fn test_repeated_formula_color_with_one_occurrence_locked() {
        // Only reachable with hand-built formulas; the second Red is still open
        let formula = [Red, Yellow, Red];
        let locked = [Some(Red), None, None];
        let result = evaluate(&formula, &locked, &[Red, Red, Yellow]).unwrap();

        assert_eq!(
            kinds(&result),
            vec![Feedback::WrongPosition, Feedback::WrongPosition]
        );
    }

    #[test]
    fn test_length_mismatch() {
        assert_eq!(
            evaluate(&[Red, Yellow, Purple], &[None; 3], &[Red, Yellow]),
            Err(InvalidGuessError::LengthMismatch {
                expected: 3,
                actual: 2,
            })
        );
    }

    #[test]
    fn test_locked_slot_cannot_change() {
        assert_eq!(
            evaluate(&[Red, Yellow, Purple], &[None, Some(Yellow), None], &[Red, Pink, Purple]),
            Err(InvalidGuessError::LockedSlotChanged {
                slot: 1,
                locked: Yellow,
                guessed: Pink,
            })
        );
    }

    #[test]
    fn test_feedback_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&Feedback::WrongPosition).unwrap(),
            "\"wrong-position\""
        );
        assert_eq!(Feedback::WrongColor.to_string(), "wrong-color");
    }
}
