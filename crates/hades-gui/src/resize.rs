//! Border and corner hit-testing for window resize.
//!
//! Edges are bands `grab` pixels either side of each border. Corners are
//! right triangles with legs of `corner` pixels anchored at the rect corner and
//! pushed `grab` pixels outward, so a point near a corner resolves to the
//! diagonal before either edge band gets a chance.

use hades_engine::coords::{Rect, Vec2};
use hades_engine::input::CursorShape;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ResizeEdge {
    Left,
    Right,
    Top,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ResizeEdge {
    pub fn cursor(self) -> CursorShape {
        match self {
            ResizeEdge::Left | ResizeEdge::Right => CursorShape::ResizeHorizontal,
            ResizeEdge::Top | ResizeEdge::Bottom => CursorShape::ResizeVertical,
            ResizeEdge::TopLeft | ResizeEdge::BottomRight => CursorShape::ResizeNwSe,
            ResizeEdge::TopRight | ResizeEdge::BottomLeft => CursorShape::ResizeNeSw,
        }
    }

    fn moves_left(self) -> bool {
        matches!(self, ResizeEdge::Left | ResizeEdge::TopLeft | ResizeEdge::BottomLeft)
    }

    fn moves_right(self) -> bool {
        matches!(self, ResizeEdge::Right | ResizeEdge::TopRight | ResizeEdge::BottomRight)
    }

    fn moves_top(self) -> bool {
        matches!(self, ResizeEdge::Top | ResizeEdge::TopLeft | ResizeEdge::TopRight)
    }

    fn moves_bottom(self) -> bool {
        matches!(self, ResizeEdge::Bottom | ResizeEdge::BottomLeft | ResizeEdge::BottomRight)
    }
}

fn cross(o: Vec2, a: Vec2, b: Vec2) -> f32 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

/// Point-in-triangle by edge signs; points on an edge count as inside.
pub fn point_in_triangle(p: Vec2, a: Vec2, b: Vec2, c: Vec2) -> bool {
    let d1 = cross(a, b, p);
    let d2 = cross(b, c, p);
    let d3 = cross(c, a, p);
    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}

/// Which border of `rect`, if any, the point `p` grabs.
pub fn hit_test(rect: Rect, p: Vec2, grab: f32, corner: f32) -> Option<ResizeEdge> {
    let (l, t, r, b) = (rect.x(), rect.y(), rect.right(), rect.bottom());

    let corners = [
        (ResizeEdge::TopLeft, Vec2::new(l - grab, t - grab), Vec2::new(l + corner, t - grab), Vec2::new(l - grab, t + corner)),
        (ResizeEdge::TopRight, Vec2::new(r + grab, t - grab), Vec2::new(r - corner, t - grab), Vec2::new(r + grab, t + corner)),
        (ResizeEdge::BottomLeft, Vec2::new(l - grab, b + grab), Vec2::new(l + corner, b + grab), Vec2::new(l - grab, b - corner)),
        (ResizeEdge::BottomRight, Vec2::new(r + grab, b + grab), Vec2::new(r - corner, b + grab), Vec2::new(r + grab, b - corner)),
    ];
    for (edge, a, bb, c) in corners {
        if point_in_triangle(p, a, bb, c) {
            return Some(edge);
        }
    }

    let in_rows = p.y >= t - grab && p.y <= b + grab;
    let in_cols = p.x >= l - grab && p.x <= r + grab;

    if in_rows && (p.x - l).abs() <= grab {
        Some(ResizeEdge::Left)
    } else if in_rows && (p.x - r).abs() <= grab {
        Some(ResizeEdge::Right)
    } else if in_cols && (p.y - t).abs() <= grab {
        Some(ResizeEdge::Top)
    } else if in_cols && (p.y - b).abs() <= grab {
        Some(ResizeEdge::Bottom)
    } else {
        None
    }
}

/// Moves the grabbed border(s) by `delta`, keeping at least `min` size and x/y >= 0.
pub fn apply(rect: Rect, edge: ResizeEdge, delta: Vec2, min: Vec2) -> Rect {
    let (mut l, mut t, mut r, mut b) = (rect.x(), rect.y(), rect.right(), rect.bottom());

    if edge.moves_left() {
        l = (l + delta.x).clamp(0.0, r - min.x);
    }
    if edge.moves_right() {
        r = (r + delta.x).max(l + min.x);
    }
    if edge.moves_top() {
        t = (t + delta.y).clamp(0.0, b - min.y);
    }
    if edge.moves_bottom() {
        b = (b + delta.y).max(t + min.y);
    }

    Rect::new(l, t, r - l, b - t)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn win() -> Rect {
        Rect::new(100.0, 100.0, 200.0, 150.0)
    }

    // ── hit test ──────────────────────────────────────────────────────────

    #[test]
    fn edges_are_detected_on_both_sides_of_the_border() {
        assert_eq!(hit_test(win(), Vec2::new(98.0, 170.0), 4.0, 12.0), Some(ResizeEdge::Left));
        assert_eq!(hit_test(win(), Vec2::new(102.0, 170.0), 4.0, 12.0), Some(ResizeEdge::Left));
        assert_eq!(hit_test(win(), Vec2::new(200.0, 251.0), 4.0, 12.0), Some(ResizeEdge::Bottom));
    }

    #[test]
    fn corner_triangle_wins_over_edges() {
        assert_eq!(hit_test(win(), Vec2::new(299.0, 249.0), 4.0, 12.0), Some(ResizeEdge::BottomRight));
        assert_eq!(hit_test(win(), Vec2::new(101.0, 101.0), 4.0, 12.0), Some(ResizeEdge::TopLeft));
    }

    #[test]
    fn interior_is_not_a_border() {
        assert_eq!(hit_test(win(), Vec2::new(200.0, 170.0), 4.0, 12.0), None);
    }

    #[test]
    fn far_outside_is_not_a_border() {
        assert_eq!(hit_test(win(), Vec2::new(50.0, 170.0), 4.0, 12.0), None);
    }

    // ── apply ─────────────────────────────────────────────────────────────

    #[test]
    fn left_drag_keeps_right_edge() {
        let r = apply(win(), ResizeEdge::Left, Vec2::new(-20.0, 0.0), Vec2::new(20.0, 20.0));
        assert_eq!(r, Rect::new(80.0, 100.0, 220.0, 150.0));
    }

    #[test]
    fn shrink_stops_at_min_size() {
        let r = apply(win(), ResizeEdge::BottomRight, Vec2::new(-500.0, -500.0), Vec2::new(20.0, 20.0));
        assert_eq!(r.size, Vec2::new(20.0, 20.0));
        assert_eq!(r.origin, win().origin);
    }
}
