use crate::rng::{shuffle, shuffled, SeededRng};
use crate::Color;

/// Potions offered to the player for the next attempt.
///
/// Every color still needed by an unlocked slot is included. Remaining places
/// up to the formula length are filled with other pool colors that are not
/// already locked, and the whole rack is shuffled so its order says nothing
/// about the formula.
pub fn offer_rack(
    formula: &[Color],
    locked: &[Option<Color>],
    pool: &[Color],
    rng: &mut SeededRng,
) -> Vec<Color> {
    let locked_colors: Vec<Color> = locked.iter().flatten().copied().collect();

    let mut rack: Vec<Color> = Vec::with_capacity(formula.len());
    for (slot, color) in formula.iter().enumerate() {
        if locked.get(slot).copied().flatten().is_none() && !rack.contains(color) {
            rack.push(*color);
        }
    }

    let extras: Vec<Color> = pool
        .iter()
        .copied()
        .filter(|c| !locked_colors.contains(c) && !rack.contains(c))
        .collect();
    let needed = formula.len().saturating_sub(rack.len());
    rack.extend(shuffled(&extras, rng).into_iter().take(needed));

    shuffle(&mut rack, rng);
    rack
}
