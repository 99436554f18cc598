//! Top gainers and losers by percent change.

use super::instrument::Instrument;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Gainers,
    Losers,
}

/// Number of movers shown on the market screen.
pub const MOVERS_SHOWN: usize = 3;

/// Returns up to `n` instruments moving in `direction`.
///
/// Gainers have a strictly positive percent change and come biggest first;
/// losers have a strictly negative one and come most negative first. Ties
/// keep listing order.
pub fn top_n(items: &[Instrument], n: usize, direction: Direction) -> Vec<&Instrument> {
    let mut ranked: Vec<&Instrument> = items
        .iter()
        .filter(|i| match direction {
            Direction::Gainers => i.change_percent > 0.0,
            Direction::Losers => i.change_percent < 0.0,
        })
        .collect();

    // sort_by is stable, so equal changes stay in listing order
    match direction {
        Direction::Gainers => {
            ranked.sort_by(|a, b| b.change_percent.total_cmp(&a.change_percent))
        }
        Direction::Losers => {
            ranked.sort_by(|a, b| a.change_percent.total_cmp(&b.change_percent))
        }
    }
    ranked.truncate(n);
    ranked
}
