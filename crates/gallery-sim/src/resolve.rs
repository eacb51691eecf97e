//! Shot resolution — the weighted cumulative walk over the zone table.

use gallery_core::zones::Zone;

/// Resolve one roll from `[0, 100)` against zones in table order.
///
/// Walks the zones accumulating hit chances; the first zone satisfying
/// `roll < cumulative` is the one struck. The strict `<` puts a roll that
/// lands exactly on a band boundary into the *next* zone, so each zone
/// claims the half-open band `[cumulative_before, cumulative_after)` and a
/// boundary value belongs to exactly one zone. Rolls at or beyond the
/// total weight land in the miss band (`None`). Zero-weight zones claim an
/// empty band and can never be struck.
pub fn struck_zone(zones: &[Zone], roll: f64) -> Option<usize> {
    let mut cumulative = 0.0;
    for (idx, zone) in zones.iter().enumerate() {
        cumulative += zone.hit_chance;
        if roll < cumulative {
            return Some(idx);
        }
    }
    None
}
