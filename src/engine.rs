use std::path::Path;

use raylib::prelude::*;

use crate::config::Theme;
use crate::error::StoryResult;
use crate::fade::FadeFrame;
use crate::layout::ScreenSize;
use crate::start_screen::StartScreen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Space,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Input observed since the previous frame, in the order it is dispatched.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
    MouseDown {
        button: PointerButton,
        position: Vector2,
    },
    MouseMove(Vector2),
    Resized(ScreenSize),
}

/// Everything the game needs from the platform: clock, input, textures and a
/// surface to present frames on.
///
/// Every `draw_*` call renders and presents one full frame, then blocks until
/// the next tick of the target frame rate.
pub trait Frontend {
    type Image;

    fn screen_size(&self) -> ScreenSize;

    /// Monotonic clock in milliseconds.
    fn now_ms(&self) -> u64;

    /// Drains the input gathered since the last call.
    fn poll_events(&mut self) -> Vec<InputEvent>;

    /// Loads an image scaled to fit `screen`, aspect ratio preserved.
    fn load_fitted(&mut self, path: &Path, screen: ScreenSize) -> StoryResult<Self::Image>;

    /// A uniform full-screen image standing in for a missing asset.
    fn placeholder(&mut self, screen: ScreenSize, color: Color) -> StoryResult<Self::Image>;

    fn draw_menu(&mut self, menu: &StartScreen<Self::Image>, theme: &Theme);

    fn draw_story(&mut self, image: &Self::Image, theme: &Theme);

    fn draw_crossfade(
        &mut self,
        outgoing: &Self::Image,
        incoming: &Self::Image,
        frame: FadeFrame,
        theme: &Theme,
    );
}
