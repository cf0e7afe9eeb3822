use tracing::{debug, info};

use crate::config::{Settings, Theme};
use crate::engine::{Frontend, InputEvent, Key, PointerButton};
use crate::error::StoryResult;
use crate::layout::ScreenSize;
use crate::start_screen::StartScreen;
use crate::state::GameState;
use crate::story::StorySequencer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Game<I> {
    state: GameState,
    menu: StartScreen<I>,
    stories: StorySequencer<I>,
    theme: Theme,
}

impl<I> Game<I> {
    pub fn new<F>(frontend: &mut F, settings: &Settings, theme: Theme) -> StoryResult<Self>
    where
        F: Frontend<Image = I>,
    {
        settings.validate()?;

        let menu = StartScreen::new(frontend, settings.home_path());
        let screen = frontend.screen_size();
        let mut stories = StorySequencer::new(settings, frontend.now_ms())?;
        stories.load(frontend, screen, &theme)?;

        Ok(Self {
            state: GameState::Menu,
            menu,
            stories,
            theme,
        })
    }

    #[cfg(test)]
    pub fn state(&self) -> GameState {
        self.state
    }

    #[cfg(test)]
    pub fn stories(&self) -> &StorySequencer<I> {
        &self.stories
    }

    #[cfg(test)]
    pub fn menu(&self) -> &StartScreen<I> {
        &self.menu
    }

    /// Runs until a quit request, Escape at the menu, or an aborted fade.
    pub fn run<F>(&mut self, frontend: &mut F) -> StoryResult<()>
    where
        F: Frontend<Image = I>,
    {
        info!("entering main loop");
        while self.tick(frontend)? == Flow::Continue {}
        info!("leaving main loop");
        Ok(())
    }

    /// One frame: input, auto-advance, render. Presenting blocks until the next
    /// frame tick.
    pub fn tick<F>(&mut self, frontend: &mut F) -> StoryResult<Flow>
    where
        F: Frontend<Image = I>,
    {
        for event in frontend.poll_events() {
            if self.handle_event(frontend, event)? == Flow::Exit {
                return Ok(Flow::Exit);
            }
        }

        if self.update(frontend)? == Flow::Exit {
            return Ok(Flow::Exit);
        }

        self.render(frontend);
        Ok(Flow::Continue)
    }

    pub fn handle_event<F>(&mut self, frontend: &mut F, event: InputEvent) -> StoryResult<Flow>
    where
        F: Frontend<Image = I>,
    {
        match event {
            InputEvent::Quit => {
                info!("quit requested");
                return Ok(Flow::Exit);
            }
            InputEvent::KeyDown(Key::Escape) => match self.state {
                GameState::Playing => self.enter(GameState::Menu, frontend.now_ms()),
                GameState::Menu => {
                    info!("escape at menu, exiting");
                    return Ok(Flow::Exit);
                }
            },
            InputEvent::KeyDown(Key::Space) if self.state == GameState::Playing => {
                return self.advance(frontend);
            }
            InputEvent::MouseDown {
                button: PointerButton::Primary,
                ..
            } if self.state == GameState::Playing => {
                return self.advance(frontend);
            }
            InputEvent::Resized(screen) => self.resize(frontend, screen)?,
            _ => {}
        }

        if self.state == GameState::Menu && self.menu.handle_event(&event) {
            self.enter(GameState::Playing, frontend.now_ms());
        }
        Ok(Flow::Continue)
    }

    /// Auto-advance check; only meaningful while playing.
    pub fn update<F>(&mut self, frontend: &mut F) -> StoryResult<Flow>
    where
        F: Frontend<Image = I>,
    {
        if self.state == GameState::Playing && self.stories.should_advance(frontend.now_ms()) {
            return self.advance(frontend);
        }
        Ok(Flow::Continue)
    }

    pub fn render<F>(&self, frontend: &mut F)
    where
        F: Frontend<Image = I>,
    {
        match self.state {
            GameState::Menu => self.menu.render(frontend, &self.theme),
            GameState::Playing => {
                if let Some(image) = self.stories.current_image() {
                    frontend.draw_story(image, &self.theme);
                }
            }
        }
    }

    fn advance<F>(&mut self, frontend: &mut F) -> StoryResult<Flow>
    where
        F: Frontend<Image = I>,
    {
        if !self.stories.advance(frontend, &self.theme) {
            info!("quit requested during transition");
            return Ok(Flow::Exit);
        }
        if let Some(screen) = self.stories.take_pending_resize() {
            self.resize(frontend, screen)?;
        }
        Ok(Flow::Continue)
    }

    fn enter(&mut self, state: GameState, now_ms: u64) {
        info!(from = ?self.state, to = ?state, "state change");
        self.state = state;
        self.stories.reset(now_ms);
    }

    fn resize<F>(&mut self, frontend: &mut F, screen: ScreenSize) -> StoryResult<()>
    where
        F: Frontend<Image = I>,
    {
        debug!(width = screen.width, height = screen.height, "screen resized");
        self.menu.resize(frontend, screen);
        self.stories.load(frontend, screen, &self.theme)
    }
}
