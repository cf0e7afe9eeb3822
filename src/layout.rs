use crate::constants::HINT_BOTTOM_OFFSET;

/// Live size of the drawing surface in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    pub width: i32,
    pub height: i32,
}

impl ScreenSize {
    /// Degenerate sizes (a minimized window reports 0x0) are clamped to one pixel
    /// so scale factors stay finite.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }
}

/// Size of an image scaled to fit inside `screen` while keeping its aspect ratio.
pub fn fit_size(image_width: i32, image_height: i32, screen: ScreenSize) -> (i32, i32) {
    let image_width = image_width.max(1) as f32;
    let image_height = image_height.max(1) as f32;

    let scale = (screen.width as f32 / image_width).min(screen.height as f32 / image_height);

    (
        ((image_width * scale) as i32).max(1),
        ((image_height * scale) as i32).max(1),
    )
}

/// Top-left corner that centers a `width` x `height` box on the screen.
pub fn centered_origin(width: i32, height: i32, screen: ScreenSize) -> (i32, i32) {
    ((screen.width - width) / 2, (screen.height - height) / 2)
}

/// Top-left corner for a single line of text centered on `(center_x, center_y)`.
/// Line height is taken to be the font size.
pub fn centered_text_origin(center_x: f32, center_y: f32, text_width: i32, font_size: i32) -> (i32, i32) {
    (
        center_x as i32 - text_width / 2,
        center_y as i32 - font_size / 2,
    )
}

/// Placement of the playback hint: text origin and its padded backdrop box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HintLayout {
    pub text: (i32, i32),
    pub backdrop: (i32, i32, i32, i32),
}

const HINT_PAD_X: i32 = 10;
const HINT_PAD_Y: i32 = 5;

/// Hint line centered horizontally, its middle `HINT_BOTTOM_OFFSET` above the bottom edge.
pub fn hint_layout(screen: ScreenSize, text_width: i32, font_size: i32) -> HintLayout {
    let (x, y) = centered_text_origin(
        screen.width as f32 * 0.5,
        (screen.height - HINT_BOTTOM_OFFSET) as f32,
        text_width,
        font_size,
    );
    HintLayout {
        text: (x, y),
        backdrop: (
            x - HINT_PAD_X,
            y - HINT_PAD_Y,
            text_width + 2 * HINT_PAD_X,
            font_size + 2 * HINT_PAD_Y,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landscape_image_fits_width() {
        let screen = ScreenSize::new(1920, 1080);
        assert_eq!(fit_size(3840, 1600, screen), (1920, 800));
    }

    #[test]
    fn portrait_image_fits_height() {
        let screen = ScreenSize::new(1920, 1080);
        assert_eq!(fit_size(1000, 2000, screen), (540, 1080));
    }

    #[test]
    fn small_images_are_scaled_up() {
        let screen = ScreenSize::new(1920, 1080);
        assert_eq!(fit_size(192, 108, screen), (1920, 1080));
    }

    #[test]
    fn degenerate_screen_is_clamped() {
        let screen = ScreenSize::new(0, -5);
        assert_eq!(screen, ScreenSize::new(1, 1));
        assert_eq!(fit_size(800, 600, screen), (1, 1));
    }

    #[test]
    fn centered_origin_splits_margins() {
        let screen = ScreenSize::new(1920, 1080);
        assert_eq!(centered_origin(1920, 800, screen), (0, 140));
        assert_eq!(centered_origin(540, 1080, screen), (690, 0));
    }

    #[test]
    fn button_label_is_centered_on_the_button() {
        // START measured at 48px in the default font
        assert_eq!(centered_text_origin(960.0, 960.0, 150, 48), (885, 936));
    }

    #[test]
    fn hint_sits_above_bottom_edge_with_padding() {
        let screen = ScreenSize::new(1920, 1080);
        let hint = hint_layout(screen, 600, 20);
        assert_eq!(hint.text, (660, 1040));
        assert_eq!(hint.backdrop, (650, 1035, 620, 30));
    }

    #[test]
    fn hint_wider_than_screen_overflows_evenly() {
        let screen = ScreenSize::new(400, 300);
        let hint = hint_layout(screen, 600, 20);
        assert_eq!(hint.text.0, -100);
        assert_eq!(hint.backdrop.2, 620);
    }
}
