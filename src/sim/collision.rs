//! Axis-aligned collision check
//!
//! The one geometric predicate in the game: inclusive-edge AABB overlap
//! between two sprites. Rectangles that merely touch count as a hit.

use super::sprite::Sprite;

/// Inclusive-edge AABB overlap test
///
/// Deterministic, no side effects, no error cases.
pub fn overlaps(a: &Sprite, b: &Sprite) -> bool {
    if a.top() > b.bottom() || a.bottom() < b.top() {
        return false;
    }
    if a.left() > b.right() || a.right() < b.left() {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::sprite::ImageHandle;
    use proptest::prelude::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Sprite {
        Sprite::new(ImageHandle::Enemy, x, y, w, h)
    }

    #[test]
    fn test_clear_overlap() {
        let a = rect(0.0, 0.0, 50.0, 50.0);
        let b = rect(25.0, 25.0, 50.0, 50.0);
        assert!(overlaps(&a, &b));
    }

    #[test]
    fn test_touching_edges_count() {
        let a = rect(0.0, 0.0, 50.0, 50.0);
        // Shares only the x=50 edge
        let b = rect(50.0, 0.0, 50.0, 50.0);
        assert!(overlaps(&a, &b));
        // Shares only the corner at (50, 50)
        let c = rect(50.0, 50.0, 50.0, 50.0);
        assert!(overlaps(&a, &c));
    }

    #[test]
    fn test_horizontal_separation() {
        let a = rect(0.0, 0.0, 50.0, 50.0);
        let b = rect(51.0, 0.0, 50.0, 50.0);
        assert!(!overlaps(&a, &b));
    }

    #[test]
    fn test_vertical_separation() {
        let a = rect(0.0, 0.0, 50.0, 50.0);
        let b = rect(0.0, 51.0, 50.0, 50.0);
        assert!(!overlaps(&a, &b));
    }

    fn arb_rect() -> impl Strategy<Value = Sprite> {
        (
            -500.0f32..500.0,
            -500.0f32..500.0,
            1.0f32..200.0,
            1.0f32..200.0,
        )
            .prop_map(|(x, y, w, h)| rect(x, y, w, h))
    }

    proptest! {
        #[test]
        fn prop_symmetric(a in arb_rect(), b in arb_rect()) {
            prop_assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
        }

        #[test]
        fn prop_reflexive(a in arb_rect()) {
            prop_assert!(overlaps(&a, &a));
        }

        #[test]
        fn prop_disjoint_x_never_overlaps(a in arb_rect(), b in arb_rect()) {
            prop_assume!(a.right() < b.left());
            prop_assert!(!overlaps(&a, &b));
        }
    }
}
