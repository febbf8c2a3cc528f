//! Per-tick transition rules.
//!
//! Pure functions over `(kind, sell_in, quality)`. Every function reads the
//! values as they were *before* the tick; the updater writes the results back.

use crate::item::ItemKind;

pub const MIN_QUALITY: i32 = 0;
pub const MAX_QUALITY: i32 = 50;
/// Quality of a legendary item, exempt from `MAX_QUALITY`.
pub const LEGENDARY_QUALITY: i32 = 80;

pub fn next_sell_in(kind: ItemKind, sell_in: i32) -> i32 {
    if kind.is_legendary() {
        sell_in
    } else {
        sell_in.saturating_sub(1)
    }
}

/// Quality after one tick.
///
/// Rule order matters: a zero quality stays zero for every kind, and the
/// legendary value is returned before the clamp.
pub fn next_quality(kind: ItemKind, quality: i32, sell_in: i32) -> i32 {
    if quality == 0 {
        return 0;
    }

    let quality = match kind {
        ItemKind::Legendary => return LEGENDARY_QUALITY,
        ItemKind::AgesPositively => aging_quality(quality),
        ItemKind::EventPass => event_pass_quality(quality, sell_in),
        ItemKind::AcceleratedDecay => accelerated_decay_quality(quality),
        ItemKind::Default => default_quality(quality, sell_in),
    };

    clamp_quality(quality)
}

/// Cap at `MAX_QUALITY`, then floor at `MIN_QUALITY`.
pub fn clamp_quality(quality: i32) -> i32 {
    if quality > MAX_QUALITY {
        return MAX_QUALITY;
    }
    quality.max(MIN_QUALITY)
}

fn aging_quality(quality: i32) -> i32 {
    quality.saturating_add(1)
}

/// Bands are keyed on the days left once this tick has passed.
fn event_pass_quality(quality: i32, sell_in: i32) -> i32 {
    let days_left = sell_in.saturating_sub(1);
    if days_left >= 10 {
        quality.saturating_add(1)
    } else if days_left >= 5 {
        quality.saturating_add(2)
    } else if days_left >= 0 {
        quality.saturating_add(3)
    } else {
        // The event is over.
        0
    }
}

fn accelerated_decay_quality(quality: i32) -> i32 {
    quality.saturating_sub(2)
}

// Once expired a default item drops straight to zero instead of losing 2 per
// tick. Kept as observed until product decides otherwise.
fn default_quality(quality: i32, sell_in: i32) -> i32 {
    if sell_in < 0 {
        return 0;
    }
    quality.saturating_sub(1)
}
