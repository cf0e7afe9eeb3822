//! In-memory frontend used by unit tests: scripted input, a manual clock and
//! recorded frames instead of a window.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use raylib::prelude::*;

use crate::config::Theme;
use crate::engine::{Frontend, InputEvent};
use crate::error::{StoryError, StoryResult};
use crate::fade::FadeFrame;
use crate::layout::{fit_size, ScreenSize};
use crate::start_screen::StartScreen;

pub const FRAME_MS: u64 = 16;

#[derive(Debug, Clone, PartialEq)]
pub struct FakeImage {
    pub source: Option<PathBuf>,
    pub width: i32,
    pub height: i32,
}

impl FakeImage {
    pub fn placeholder(screen: ScreenSize) -> Self {
        Self {
            source: None,
            width: screen.width,
            height: screen.height,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.source.is_none()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Draw {
    Menu { hovered: bool, has_background: bool },
    Story(FakeImage),
    Crossfade {
        outgoing: FakeImage,
        incoming: FakeImage,
        frame: FadeFrame,
    },
}

pub struct FakeFrontend {
    pub screen: ScreenSize,
    pub now: u64,
    pub draws: Vec<Draw>,
    pub placeholder_colors: Vec<Color>,
    files: HashMap<PathBuf, (i32, i32)>,
    script: HashMap<usize, Vec<InputEvent>>,
    polls: usize,
}

impl FakeFrontend {
    pub fn new(screen: ScreenSize) -> Self {
        Self {
            screen,
            now: 0,
            draws: Vec::new(),
            placeholder_colors: Vec::new(),
            files: HashMap::new(),
            script: HashMap::new(),
            polls: 0,
        }
    }

    /// Registers an image file with its native size; unregistered paths are missing.
    pub fn add_file(&mut self, path: impl Into<PathBuf>, width: i32, height: i32) {
        self.files.insert(path.into(), (width, height));
    }

    /// Events returned by the `poll`-th call to `poll_events` (0-based).
    pub fn script_at(&mut self, poll: usize, events: Vec<InputEvent>) {
        self.script.insert(poll, events);
    }

    /// Events returned by the next call to `poll_events`.
    pub fn script_next(&mut self, events: Vec<InputEvent>) {
        self.script.insert(self.polls, events);
    }

    pub fn polls(&self) -> usize {
        self.polls
    }

    pub fn crossfade_alphas(&self) -> Vec<u8> {
        self.draws
            .iter()
            .filter_map(|d| match d {
                Draw::Crossfade { frame, .. } => Some(frame.incoming),
                _ => None,
            })
            .collect()
    }

    fn present(&mut self, draw: Draw) {
        self.draws.push(draw);
        self.now += FRAME_MS;
    }
}

impl Frontend for FakeFrontend {
    type Image = FakeImage;

    fn screen_size(&self) -> ScreenSize {
        self.screen
    }

    fn now_ms(&self) -> u64 {
        self.now
    }

    fn poll_events(&mut self) -> Vec<InputEvent> {
        let events = self.script.remove(&self.polls).unwrap_or_default();
        self.polls += 1;
        events
    }

    fn load_fitted(&mut self, path: &Path, screen: ScreenSize) -> StoryResult<FakeImage> {
        let &(w, h) = self
            .files
            .get(path)
            .ok_or_else(|| StoryError::asset(path, "file not found"))?;
        let (width, height) = fit_size(w, h, screen);
        Ok(FakeImage {
            source: Some(path.to_path_buf()),
            width,
            height,
        })
    }

    fn placeholder(&mut self, screen: ScreenSize, color: Color) -> StoryResult<FakeImage> {
        self.placeholder_colors.push(color);
        Ok(FakeImage::placeholder(screen))
    }

    fn draw_menu(&mut self, menu: &StartScreen<FakeImage>, _theme: &Theme) {
        let draw = Draw::Menu {
            hovered: menu.button().hovered(),
            has_background: menu.background().is_some(),
        };
        self.present(draw);
    }

    fn draw_story(&mut self, image: &FakeImage, _theme: &Theme) {
        self.present(Draw::Story(image.clone()));
    }

    fn draw_crossfade(
        &mut self,
        outgoing: &FakeImage,
        incoming: &FakeImage,
        frame: FadeFrame,
        _theme: &Theme,
    ) {
        self.present(Draw::Crossfade {
            outgoing: outgoing.clone(),
            incoming: incoming.clone(),
            frame,
        });
    }
}
