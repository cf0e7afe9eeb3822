pub const WINDOW_TITLE: &str = "Story Game";
pub const WINDOW_WIDTH: i32 = 1920;           // Windowed mode default width
pub const WINDOW_HEIGHT: i32 = 1080;          // Windowed mode default height
pub const FPS: u32 = 60;                      // Frames per second

pub const STORY_COUNT: usize = 8;             // Number of story images (story-1 .. story-N)
pub const DISPLAY_DURATION_MS: u64 = 3000;    // Time each story stays on screen before auto-advance
pub const FADE_STEP: u8 = 5;                  // Opacity increment per fade frame (out of 255)

pub const ASSETS_DIR: &str = "assets";
pub const HOME_IMAGE: &str = "core/home.png";

pub const BUTTON_WIDTH: f32 = 250.0;
pub const BUTTON_HEIGHT: f32 = 70.0;
pub const BUTTON_BORDER: f32 = 5.0;
pub const BUTTON_ROUNDNESS: f32 = 0.3;        // raylib roundness ratio, ~10px corners at 70px height
pub const BUTTON_BOTTOM_OFFSET: f32 = 120.0;  // Button center distance from the bottom edge
pub const BUTTON_LABEL: &str = "START";

pub const MENU_OVERLAY_ALPHA: u8 = 20;        // Black overlay dimming the menu background
pub const HINT_TEXT: &str = "Press ESC to return to menu | SPACE or CLICK to skip";
pub const HINT_BOTTOM_OFFSET: i32 = 30;
pub const HINT_BOX_ALPHA: u8 = 128;
