//! Scrollbar geometry along one axis.
//!
//! Offsets are stored in pixels. The scroll ratio is `offset / content`, so the
//! content origin is `view_origin - content * ratio`, i.e. `view_origin - offset`.

/// Thumb length: `clamp(view * view / content, min_thumb, view)`.
pub fn thumb_len(view: f32, content: f32, min_thumb: f32) -> f32 {
    if content <= 0.0 || view <= 0.0 {
        return view.max(0.0);
    }
    (view * view / content).clamp(min_thumb.min(view), view)
}

/// Largest offset that still shows content under the whole view.
pub fn max_offset(view: f32, content: f32) -> f32 {
    (content - view).max(0.0)
}

#[inline]
pub fn needs_scroll(view: f32, content: f32) -> bool {
    content > view + 0.5
}

pub fn clamp_offset(offset: f32, view: f32, content: f32) -> f32 {
    offset.clamp(0.0, max_offset(view, content))
}

/// `offset / content`, the fraction of content scrolled past.
pub fn ratio(offset: f32, content: f32) -> f32 {
    if content <= 0.0 { 0.0 } else { offset / content }
}

/// Where the content's first pixel lands for a given view origin.
pub fn content_origin(view_origin: f32, content: f32, ratio: f32) -> f32 {
    view_origin - content * ratio
}

/// Thumb start relative to the track start.
pub fn thumb_pos(offset: f32, view: f32, content: f32, thumb: f32) -> f32 {
    let max = max_offset(view, content);
    if max <= 0.0 {
        return 0.0;
    }
    (offset / max).clamp(0.0, 1.0) * (view - thumb)
}

/// Inverse of [`thumb_pos`]: the offset that puts the thumb at `pos`.
pub fn offset_for_thumb(pos: f32, view: f32, content: f32, thumb: f32) -> f32 {
    let travel = view - thumb;
    if travel <= 0.0 {
        return 0.0;
    }
    (pos / travel).clamp(0.0, 1.0) * max_offset(view, content)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── thumb ─────────────────────────────────────────────────────────────

    #[test]
    fn thumb_is_view_squared_over_content() {
        assert_eq!(thumb_len(100.0, 400.0, 10.0), 25.0);
    }

    #[test]
    fn thumb_is_clamped_to_min_and_view() {
        assert_eq!(thumb_len(100.0, 10_000.0, 20.0), 20.0);
        assert_eq!(thumb_len(100.0, 50.0, 20.0), 100.0);
    }

    // ── offsets ───────────────────────────────────────────────────────────

    #[test]
    fn content_origin_matches_pixel_offset() {
        let r = ratio(60.0, 400.0);
        assert!((content_origin(10.0, 400.0, r) - (10.0 - 60.0)).abs() < 1e-4);
    }

    #[test]
    fn thumb_round_trips_through_offset() {
        let (view, content) = (100.0, 400.0);
        let t = thumb_len(view, content, 10.0);
        let pos = thumb_pos(150.0, view, content, t);
        let back = offset_for_thumb(pos, view, content, t);
        assert!((back - 150.0).abs() < 1e-3);
    }

    #[test]
    fn thumb_at_end_of_track_at_max_offset() {
        let (view, content) = (100.0, 400.0);
        let t = thumb_len(view, content, 10.0);
        assert_eq!(thumb_pos(max_offset(view, content), view, content, t), view - t);
    }
}
