use qrtag_core::Canvas;

/// Place `right` to the right of `left` on a new canvas as wide as both and as tall as the
/// tallest.
pub fn place_right(left: &Canvas, right: &Canvas) -> Canvas {
    let mut canvas = Canvas::transparent(
        left.width() + right.width(),
        left.height().max(right.height()),
    );
    canvas.place(left, 0, 0);
    canvas.place(right, left.width(), 0);
    canvas
}

/// Place `bottom` below `top` on a new canvas as wide as `top` and `row_height` pixels taller.
///
/// Whatever of `bottom` does not fit in that row is clipped.
pub fn place_below(top: &Canvas, bottom: &Canvas, row_height: u32) -> Canvas {
    let mut canvas = Canvas::transparent(top.width(), top.height() + row_height);
    canvas.place(top, 0, 0);
    canvas.place(bottom, 0, top.height());
    canvas
}

#[cfg(test)]
mod test {
    use qrtag_core::Color;

    use super::*;

    #[test]
    fn test_place_right() {
        let left = Canvas::filled(3, 2, Color::BLACK);
        let right = Canvas::filled(2, 4, Color::WHITE);
        let canvas = place_right(&left, &right);
        assert_eq!(canvas.dimensions(), (5, 4));
        assert_eq!(canvas.get(2, 1), Some(Color::BLACK));
        assert_eq!(canvas.get(3, 3), Some(Color::WHITE));
        // Below the shorter left canvas nothing was drawn.
        assert_eq!(canvas.get(0, 3), Some(Color::TRANSPARENT));
    }

    #[test]
    fn test_place_below_clips_row() {
        let top = Canvas::filled(4, 4, Color::BLACK);
        let bottom = Canvas::filled(10, 10, Color::WHITE);
        let canvas = place_below(&top, &bottom, 2);
        assert_eq!(canvas.dimensions(), (4, 6));
        for x in 0..4 {
            assert_eq!(canvas.get(x, 3), Some(Color::BLACK));
            assert_eq!(canvas.get(x, 4), Some(Color::WHITE));
            assert_eq!(canvas.get(x, 5), Some(Color::WHITE));
        }
    }

    #[test]
    fn test_source_rule_replaces_pixels() {
        let half_transparent = Color::rgba(10, 20, 30, 128);
        let left = Canvas::filled(1, 1, half_transparent);
        let right = Canvas::transparent(1, 1);
        let canvas = place_right(&left, &right);
        assert_eq!(canvas.get(0, 0), Some(half_transparent));
        assert_eq!(canvas.get(1, 0), Some(Color::TRANSPARENT));
    }
}
