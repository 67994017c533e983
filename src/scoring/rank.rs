//! Allocation of positional points among ranked powers.
//!
//! Every function takes entities already sorted best-first by some metric
//! (centre count, elimination year, ...) and a list of points for 1st,
//! 2nd, 3rd place and so on. Positions past the end of the list are worth
//! nothing. They differ only in how a run of equal metrics is treated.
//! The result is aligned with the input order.

/// Splits points evenly within each tie.
///
/// A run of `n` equal metrics occupying positions `i..i + n` gives every
/// member the mean of those positions' points.
pub fn share_rank_points<T, M: PartialEq>(ranked: &[(T, M)], points: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(ranked.len());
    for (start, len) in tied_runs(ranked) {
        let total: f64 = (start..start + len).map(|pos| position_points(points, pos)).sum();
        let share = total / len as f64;
        out.extend(std::iter::repeat(share).take(len));
    }
    out
}

/// Gives every member of a tie the points for the lowest position in it.
pub fn lowest_rank_points<T, M: PartialEq>(ranked: &[(T, M)], points: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(ranked.len());
    for (start, len) in tied_runs(ranked) {
        let value = position_points(points, start + len - 1);
        out.extend(std::iter::repeat(value).take(len));
    }
    out
}

/// Like [`lowest_rank_points`], but a tie of exactly two players starting
/// at position `i` takes `two_way[i]` instead.
///
/// Once `points` runs out, every remaining player gets nothing.
pub fn lowest_rank_points_two_way<T, M: PartialEq>(
    ranked: &[(T, M)],
    points: &[f64],
    two_way: &[f64],
) -> Vec<f64> {
    let mut out = Vec::with_capacity(ranked.len());
    for (start, len) in tied_runs(ranked) {
        let value = if start >= points.len() {
            0.0
        } else if len == 2 {
            position_points(two_way, start)
        } else {
            position_points(points, start + len - 1)
        };
        out.extend(std::iter::repeat(value).take(len));
    }
    out
}

fn position_points(points: &[f64], pos: usize) -> f64 {
    points.get(pos).copied().unwrap_or(0.0)
}

/// Start index and length of each maximal run of equal metrics.
fn tied_runs<T, M: PartialEq>(ranked: &[(T, M)]) -> Vec<(usize, usize)> {
    let mut runs = Vec::new();
    let mut start = 0;
    while start < ranked.len() {
        let metric = &ranked[start].1;
        let len = ranked[start..]
            .iter()
            .take_while(|(_, m)| m == metric)
            .count();
        runs.push((start, len));
        start += len;
    }
    runs
}
