/// Index of the entry a snapped scroll position shows.
///
/// `round(offset / viewport)` clamped to `[0, entries - 1]`. A non-positive or
/// non-finite viewport maps to 0.
#[must_use]
pub fn index_for_scroll(offset: f64, viewport: f64, entries: usize) -> usize {
    if entries == 0 || !viewport.is_finite() || viewport <= 0.0 || !offset.is_finite() {
        return 0;
    }
    let raw = (offset / viewport).round();
    if raw <= 0.0 {
        return 0;
    }
    let last = entries - 1;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let index = raw as usize;
    index.min(last)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_nearest_card() {
        assert_eq!(index_for_scroll(0.0, 800.0, 5), 0);
        assert_eq!(index_for_scroll(399.0, 800.0, 5), 0);
        assert_eq!(index_for_scroll(400.0, 800.0, 5), 1);
        assert_eq!(index_for_scroll(1650.0, 800.0, 5), 2);
    }

    #[test]
    fn clamps_to_valid_range() {
        assert_eq!(index_for_scroll(-300.0, 800.0, 5), 0);
        assert_eq!(index_for_scroll(80_000.0, 800.0, 5), 4);
        assert_eq!(index_for_scroll(900.0, 800.0, 0), 0);
    }

    #[test]
    fn degenerate_viewport_maps_to_first() {
        assert_eq!(index_for_scroll(500.0, 0.0, 5), 0);
        assert_eq!(index_for_scroll(500.0, f64::NAN, 5), 0);
        assert_eq!(index_for_scroll(f64::INFINITY, 800.0, 5), 0);
    }
}
