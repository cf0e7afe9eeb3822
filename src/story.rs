use std::path::PathBuf;

use tracing::{debug, warn};

use crate::config::{story_path, Settings, Theme};
use crate::engine::Frontend;
use crate::error::{StoryError, StoryResult};
use crate::fade::{run_fade, FadeOutcome};
use crate::layout::ScreenSize;

/// Circular sequence of full-screen story images.
///
/// `current_index` is 1-based and always in `1..=story_count`.
pub struct StorySequencer<I> {
    images: Vec<I>,
    story_count: usize,
    current_index: usize,
    last_change_ms: u64,
    display_ms: u64,
    fade_step: u8,
    assets_dir: PathBuf,
    pending_resize: Option<ScreenSize>,
}

impl<I> StorySequencer<I> {
    pub fn new(settings: &Settings, now_ms: u64) -> StoryResult<Self> {
        if settings.story_count == 0 {
            return Err(StoryError::config("story count must be at least 1"));
        }
        Ok(Self {
            images: Vec::with_capacity(settings.story_count),
            story_count: settings.story_count,
            current_index: 1,
            last_change_ms: now_ms,
            display_ms: settings.display_ms,
            fade_step: settings.fade_step,
            assets_dir: settings.assets_dir.clone(),
            pending_resize: None,
        })
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn next_index(&self) -> usize {
        self.current_index % self.story_count + 1
    }

    pub fn image(&self, index: usize) -> Option<&I> {
        index.checked_sub(1).and_then(|i| self.images.get(i))
    }

    pub fn current_image(&self) -> Option<&I> {
        self.image(self.current_index)
    }

    pub fn should_advance(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.last_change_ms) > self.display_ms
    }

    pub fn reset(&mut self, now_ms: u64) {
        self.current_index = 1;
        self.restart_timer(now_ms);
    }

    /// Screen size from a resize that arrived during the last fade, if any.
    pub fn take_pending_resize(&mut self) -> Option<ScreenSize> {
        self.pending_resize.take()
    }

    fn restart_timer(&mut self, now_ms: u64) {
        self.last_change_ms = now_ms;
    }

    /// Reloads every story image for `screen`. Missing or unreadable files are
    /// replaced by a full-screen placeholder.
    pub fn load<F>(&mut self, frontend: &mut F, screen: ScreenSize, theme: &Theme) -> StoryResult<()>
    where
        F: Frontend<Image = I>,
    {
        let mut images = Vec::with_capacity(self.story_count);
        for index in 1..=self.story_count {
            let path = story_path(&self.assets_dir, index);
            let image = match frontend.load_fitted(&path, screen) {
                Ok(image) => image,
                Err(e) => {
                    warn!("{e}, using placeholder");
                    frontend.placeholder(screen, theme.placeholder)?
                }
            };
            images.push(image);
        }
        debug!(count = images.len(), width = screen.width, height = screen.height, "story images loaded");
        self.images = images;
        Ok(())
    }

    /// Cross-fades to the next story. Returns `false` if the fade was aborted by
    /// a quit request, in which case the current story and timer are untouched
    /// and the caller is expected to shut down.
    pub fn advance<F>(&mut self, frontend: &mut F, theme: &Theme) -> bool
    where
        F: Frontend<Image = I>,
    {
        let next = self.next_index();

        if let (Some(from), Some(to)) = (self.image(self.current_index), self.image(next)) {
            let report = run_fade(frontend, from, to, self.fade_step, theme);
            if report.resized.is_some() {
                self.pending_resize = report.resized;
            }
            if report.outcome == FadeOutcome::Aborted {
                return false;
            }
        }

        debug!(from = self.current_index, to = next, "story advanced");
        self.current_index = next;
        self.restart_timer(frontend.now_ms());
        true
    }
}
