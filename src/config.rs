use std::path::{Path, PathBuf};

use raylib::prelude::*;

use crate::constants::*;
use crate::error::{StoryError, StoryResult};

/// Playback settings, fixed for the lifetime of the process.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub fullscreen: bool,
    pub window_width: i32,
    pub window_height: i32,
    pub fps: u32,
    pub story_count: usize,
    pub display_ms: u64,
    pub fade_step: u8,
    pub assets_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fullscreen: true,
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            fps: FPS,
            story_count: STORY_COUNT,
            display_ms: DISPLAY_DURATION_MS,
            fade_step: FADE_STEP,
            assets_dir: PathBuf::from(ASSETS_DIR),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> StoryResult<()> {
        if self.story_count == 0 {
            return Err(StoryError::config("story count must be at least 1"));
        }
        if self.fade_step == 0 {
            return Err(StoryError::config("fade step must be between 1 and 255"));
        }
        if self.fps == 0 {
            return Err(StoryError::config("fps must be at least 1"));
        }
        if self.window_width <= 0 || self.window_height <= 0 {
            return Err(StoryError::config(format!(
                "window size must be positive, got {}x{}",
                self.window_width, self.window_height
            )));
        }
        Ok(())
    }

    pub fn story_path(&self, index: usize) -> PathBuf {
        story_path(&self.assets_dir, index)
    }

    pub fn home_path(&self) -> PathBuf {
        self.assets_dir.join(HOME_IMAGE)
    }
}

pub fn story_path(assets_dir: &Path, index: usize) -> PathBuf {
    assets_dir.join("stories").join(format!("story-{index}.png"))
}

/// Colors and font sizes shared by every screen.
///
/// Text is drawn with raylib's built-in default font at these sizes, so the
/// binary needs no font files.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub placeholder: Color,
    pub button: Color,
    pub button_hover: Color,
    pub button_text: Color,
    pub button_border: Color,
    pub button_font_size: i32,
    pub hint_font_size: i32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::new(0, 0, 0, 255),
            text: Color::new(255, 255, 255, 255),
            placeholder: Color::new(50, 50, 50, 255),
            button: Color::new(200, 155, 91, 255),        // #C89B5B
            button_hover: Color::new(220, 175, 111, 255),
            button_text: Color::new(75, 42, 12, 255),     // #4B2A0C
            button_border: Color::new(168, 107, 39, 255), // #A86B27
            button_font_size: 48,
            hint_font_size: 20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn zero_stories_is_rejected() {
        let settings = Settings {
            story_count: 0,
            ..Settings::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("story count"));
    }

    #[test]
    fn zero_fade_step_is_rejected() {
        let settings = Settings {
            fade_step: 0,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn zero_fps_is_rejected() {
        let settings = Settings {
            fps: 0,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn asset_paths_follow_layout() {
        let settings = Settings::default();
        assert_eq!(
            settings.story_path(3),
            Path::new("assets").join("stories").join("story-3.png")
        );
        assert_eq!(
            settings.home_path(),
            Path::new("assets").join("core").join("home.png")
        );
    }

    #[test]
    fn theme_font_sizes() {
        let theme = Theme::default();
        assert_eq!(theme.button_font_size, 48);
        assert_eq!(theme.hint_font_size, 20);
    }
}
