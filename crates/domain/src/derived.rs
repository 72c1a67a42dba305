//! Derived display percentages for bars.
//!
//! Party and enemy primary bars use different denominators. For party
//! members, temporary points that push the pool past its maximum inflate the
//! denominator to `value + temp`; otherwise the maximum is used. For enemies
//! the denominator is always `max + temp`. Both keep
//! `percent + bonus_percent <= 100` by shrinking the bonus, never the percent.

use crate::value_objects::{Bar, NormalizedEntry};

/// `round(part / whole * 100)` clamped into `0..=100`; zero when `whole <= 0`.
///
/// Rounding is half away from zero, which is half-up for the non-negative
/// values bars carry.
pub fn percent_of(part: f64, whole: f64) -> u8 {
    if whole <= 0.0 || !whole.is_finite() || !part.is_finite() {
        return 0;
    }
    (part / whole * 100.0).round().clamp(0.0, 100.0) as u8
}

fn bonus_for(bar: &Bar, denominator: f64) -> Option<u8> {
    if !bar.has_temp() {
        return None;
    }
    let bonus = percent_of(bar.temp_or_zero(), denominator);
    Some(bonus.min(100 - bar.percent))
}

/// Primary bar of a party member.
pub fn apply_party_primary(bar: &mut Bar) {
    let pool = bar.value + bar.temp_or_zero();
    let denominator = if pool > bar.max { pool } else { bar.max };
    bar.percent = percent_of(bar.value, denominator);
    bar.bonus_percent = bonus_for(bar, denominator);
}

/// Primary bar of an enemy token.
pub fn apply_enemy_primary(bar: &mut Bar) {
    let denominator = bar.max + bar.temp_or_zero();
    bar.percent = percent_of(bar.value, denominator);
    bar.bonus_percent = bonus_for(bar, denominator);
}

/// Secondary bar (party only); temporary points are ignored.
pub fn apply_secondary(bar: &mut Bar) {
    bar.percent = percent_of(bar.value, bar.max);
    bar.bonus_percent = None;
}

/// Fill every bar of a party entry
pub fn apply_party(entry: &mut NormalizedEntry) {
    apply_party_primary(&mut entry.primary);
    if let Some(secondary) = entry.secondary.as_mut() {
        apply_secondary(secondary);
    }
}

/// Fill every bar of an enemy entry
pub fn apply_enemy(entry: &mut NormalizedEntry) {
    apply_enemy_primary(&mut entry.primary);
    if let Some(secondary) = entry.secondary.as_mut() {
        apply_secondary(secondary);
    }
}
