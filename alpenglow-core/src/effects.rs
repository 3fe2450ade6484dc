//! Effect math for the decorative motion layer.
//!
//! Parallax, mouse displacement, and the header threshold are pure
//! functions of scroll position, cursor position, and a shape's index.
//! The frame callback in `alpenglow-ui` recomputes each shape's transform
//! from scratch every tick; offsets are never appended to a previous
//! transform, so they cannot accumulate across frames.

/// Scroll offset past which the header takes its condensed treatment.
pub const HEADER_SCROLL_THRESHOLD: f64 = 100.0;

/// Per-index parallax speed step.
pub const PARALLAX_SPEED_STEP: f64 = 0.05;

/// Per-index mouse-tracking speed step.
pub const MOUSE_SPEED_STEP: f64 = 0.01;

/// Full-range mouse displacement, in CSS pixels, at speed 1.0.
pub const MOUSE_RANGE_PX: f64 = 50.0;

/// Quiet period for the scroll debounce, in milliseconds.
pub const SCROLL_DEBOUNCE_MS: u32 = 10;

/// Quiet period for the pointer-move debounce (~60fps), in milliseconds.
pub const MOUSE_DEBOUNCE_MS: u32 = 16;

/// Lifetime of a ripple element before it self-removes, in milliseconds.
pub const RIPPLE_LIFETIME_MS: u32 = 600;

/// Whether the header should carry the `scrolled` class. Unlike the
/// one-way reveal observer, this is bidirectional.
pub fn header_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLL_THRESHOLD
}

/// Vertical parallax offset for the shape at `index`, in CSS pixels.
/// Later shapes move faster.
pub fn parallax_offset(scroll_y: f64, index: usize) -> f64 {
    scroll_y * PARALLAX_SPEED_STEP * (index + 1) as f64
}

/// Displacement of the shape at `index` toward the cursor, in CSS pixels.
/// `mouse_x` and `mouse_y` are normalized to `[0, 1]` over the viewport;
/// a centered cursor yields zero displacement.
pub fn mouse_offset(mouse_x: f64, mouse_y: f64, index: usize) -> (f64, f64) {
    let speed = (index + 1) as f64 * MOUSE_SPEED_STEP;
    let x = (mouse_x - 0.5) * speed * MOUSE_RANGE_PX;
    let y = (mouse_y - 0.5) * speed * MOUSE_RANGE_PX;
    (x, y)
}

/// The absolute CSS transform for the shape at `index` this frame,
/// combining parallax with the mouse displacement when the cursor
/// position is known.
pub fn shape_transform(scroll_y: f64, mouse: Option<(f64, f64)>, index: usize) -> String {
    let parallax = parallax_offset(scroll_y, index);
    match mouse {
        Some((mx, my)) => {
            let (dx, dy) = mouse_offset(mx, my, index);
            format!("translateY({parallax:.2}px) translate({dx:.2}px, {dy:.2}px)")
        }
        None => format!("translateY({parallax:.2}px)"),
    }
}
