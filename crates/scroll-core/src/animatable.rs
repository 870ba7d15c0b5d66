use glam::Vec2;
use scroll_data::color::Rgb;

use crate::shape::Marker;

/// Linear interpolation between two values of the same type.
pub trait Interpolatable: Sized + Clone {
    fn lerp(&self, other: &Self, t: f32) -> Self;
}

impl Interpolatable for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Interpolatable for Vec2 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Vec2::lerp(*self, *other, t)
    }
}

impl Interpolatable for Rgb {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Rgb::lerp(self, other, t)
    }
}

/// Interpolated text reveal: the result is a prefix of the longer string,
/// with length tracking `t1`'s length toward `t2`'s as `t` grows.
///
/// This is a typing/erasing effect, not a crossfade, and it is asymmetric
/// when `t1` is longer than `t2` (the target length is always anchored on
/// `t1`). Intentional; the text-box shape relies on it.
pub fn merge_text(t1: &str, t2: &str, t: f32) -> String {
    let len1 = t1.chars().count();
    let len2 = t2.chars().count();

    let long = if len1 < len2 { t2 } else { t1 };

    let target = (len1 as f32 + (len2 as f32 - len1 as f32) * t).floor() as usize;
    long.chars().take(target).collect()
}

/// Finds the bracketing pair of markers for `query`.
///
/// Out-of-range queries return a one-sided result (the caller skips
/// rendering for that frame); an exact positional hit returns the same
/// marker twice, a zero-width interpolation window. O(log n).
pub fn locate(markers: &[Marker], query: f32) -> (Option<&Marker>, Option<&Marker>) {
    let (first, last) = match (markers.first(), markers.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return (None, None),
    };

    // NaN compares false against every pos and would slip past both range
    // guards; treat it as outside the range on both sides.
    if query.is_nan() {
        return (None, None);
    }

    if query < first.pos {
        return (None, Some(first));
    }
    if query > last.pos {
        return (Some(last), None);
    }

    // First index whose pos is >= query; in range, so idx < len.
    let idx = markers.partition_point(|m| m.pos < query);
    let hi = &markers[idx];
    if hi.pos == query {
        return (Some(hi), Some(hi));
    }
    (Some(&markers[idx - 1]), Some(hi))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markers_at(positions: &[f32]) -> Vec<Marker> {
        positions.iter().map(|&pos| Marker::at(pos)).collect()
    }

    #[test]
    fn locate_brackets_and_sentinels() {
        let markers = markers_at(&[0.0, 10.0, 20.0]);

        // Before range: no lower bracket.
        let (lo, hi) = locate(&markers, -5.0);
        assert!(lo.is_none());
        assert_eq!(hi.map(|m| m.pos), Some(0.0));

        // After range: no upper bracket, same sentinel shape.
        let (lo, hi) = locate(&markers, 25.0);
        assert_eq!(lo.map(|m| m.pos), Some(20.0));
        assert!(hi.is_none());

        // Exact hit: zero-width window.
        let (lo, hi) = locate(&markers, 10.0);
        assert_eq!(lo.map(|m| m.pos), Some(10.0));
        assert_eq!(hi.map(|m| m.pos), Some(10.0));

        // Mid-segment: tightest bracketing pair.
        let (lo, hi) = locate(&markers, 5.0);
        assert_eq!(lo.map(|m| m.pos), Some(0.0));
        assert_eq!(hi.map(|m| m.pos), Some(10.0));

        let (lo, hi) = locate(&markers, 15.0);
        assert_eq!(lo.map(|m| m.pos), Some(10.0));
        assert_eq!(hi.map(|m| m.pos), Some(20.0));
    }

    #[test]
    fn locate_endpoints_hit_exactly() {
        let markers = markers_at(&[0.0, 1.0]);

        let (lo, hi) = locate(&markers, 0.0);
        assert_eq!(lo.map(|m| m.pos), Some(0.0));
        assert_eq!(hi.map(|m| m.pos), Some(0.0));

        let (lo, hi) = locate(&markers, 1.0);
        assert_eq!(lo.map(|m| m.pos), Some(1.0));
        assert_eq!(hi.map(|m| m.pos), Some(1.0));
    }

    #[test]
    fn locate_nan_query_has_no_brackets() {
        let markers = markers_at(&[0.0, 10.0, 20.0]);

        let (lo, hi) = locate(&markers, f32::NAN);
        assert!(lo.is_none());
        assert!(hi.is_none());
    }

    #[test]
    fn merge_text_reveals_prefix_of_longer() {
        // floor(3 + (8 - 3) * 0.5) = 5
        assert_eq!(merge_text("abc", "abcdefgh", 0.5), "abcde");
        assert_eq!(merge_text("abc", "abcdefgh", 0.0), "abc");
        assert_eq!(merge_text("abc", "abcdefgh", 1.0), "abcdefgh");
    }

    #[test]
    fn merge_text_erases_when_shrinking() {
        // Anchored on t1's length, so the reveal runs backwards.
        assert_eq!(merge_text("abcdefgh", "abc", 0.0), "abcdefgh");
        assert_eq!(merge_text("abcdefgh", "abc", 1.0), "abc");
        assert_eq!(merge_text("abcdefgh", "abc", 0.5), "abcde");
    }

    #[test]
    fn scalar_lerp_endpoints() {
        assert_eq!(0.0f32.lerp(&10.0, 0.5), 5.0);
        assert_eq!(3.0f32.lerp(&3.0, 0.9), 3.0);
    }
}
