use std::path::PathBuf;

use raylib::prelude::*;
use tracing::warn;

use crate::config::Theme;
use crate::constants::*;
use crate::engine::{Frontend, InputEvent, PointerButton};
use crate::layout::ScreenSize;

/// The START button. Only the hover flag changes between frames.
#[derive(Debug, Clone)]
pub struct Button {
    rect: Rectangle,
    hovered: bool,
}

impl Button {
    pub fn centered_at(center: Vector2, width: f32, height: f32) -> Self {
        Self {
            rect: Rectangle::new(center.x - width * 0.5, center.y - height * 0.5, width, height),
            hovered: false,
        }
    }

    /// Button anchored horizontally centered, `BUTTON_BOTTOM_OFFSET` above the bottom edge.
    pub fn for_screen(screen: ScreenSize) -> Self {
        let center = Vector2::new(
            screen.width as f32 * 0.5,
            screen.height as f32 - BUTTON_BOTTOM_OFFSET,
        );
        Self::centered_at(center, BUTTON_WIDTH, BUTTON_HEIGHT)
    }

    pub fn rect(&self) -> Rectangle {
        self.rect
    }

    pub fn center(&self) -> Vector2 {
        Vector2::new(
            self.rect.x + self.rect.width * 0.5,
            self.rect.y + self.rect.height * 0.5,
        )
    }

    pub fn hovered(&self) -> bool {
        self.hovered
    }

    pub fn contains(&self, point: Vector2) -> bool {
        point.x >= self.rect.x
            && point.x < self.rect.x + self.rect.width
            && point.y >= self.rect.y
            && point.y < self.rect.y + self.rect.height
    }

    pub fn handle_pointer_move(&mut self, position: Vector2) {
        self.hovered = self.contains(position);
    }

    /// Activation needs the primary button and a pointer already hovering the
    /// button, as tracked by the last pointer move.
    pub fn handle_click(&self, button: PointerButton) -> bool {
        button == PointerButton::Primary && self.hovered
    }

    fn recenter(&mut self, screen: ScreenSize) {
        let hovered = self.hovered;
        *self = Self::for_screen(screen);
        self.hovered = hovered;
    }
}

/// Menu shown before the stories: dimmed background plus the START button.
pub struct StartScreen<I> {
    background: Option<I>,
    background_path: PathBuf,
    button: Button,
    screen: ScreenSize,
}

impl<I> StartScreen<I> {
    pub fn new<F>(frontend: &mut F, background_path: PathBuf) -> Self
    where
        F: Frontend<Image = I>,
    {
        let screen = frontend.screen_size();
        let mut menu = Self {
            background: None,
            background_path,
            button: Button::for_screen(screen),
            screen,
        };
        menu.load_background(frontend);
        menu
    }

    pub fn background(&self) -> Option<&I> {
        self.background.as_ref()
    }

    pub fn button(&self) -> &Button {
        &self.button
    }

    pub fn screen(&self) -> ScreenSize {
        self.screen
    }

    pub fn handle_pointer_move(&mut self, position: Vector2) {
        self.button.handle_pointer_move(position);
    }

    /// The click position refreshes the hover flag before the hit test.
    pub fn handle_click(&mut self, position: Vector2, button: PointerButton) -> bool {
        self.button.handle_pointer_move(position);
        self.button.handle_click(button)
    }

    /// Returns `true` when the event activates the START button.
    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        match *event {
            InputEvent::MouseMove(position) => {
                self.handle_pointer_move(position);
                false
            }
            InputEvent::MouseDown { button, position } => self.handle_click(position, button),
            _ => false,
        }
    }

    pub fn resize<F>(&mut self, frontend: &mut F, screen: ScreenSize)
    where
        F: Frontend<Image = I>,
    {
        self.screen = screen;
        self.button.recenter(screen);
        self.load_background(frontend);
    }

    pub fn render<F>(&self, frontend: &mut F, theme: &Theme)
    where
        F: Frontend<Image = I>,
    {
        frontend.draw_menu(self, theme);
    }

    fn load_background<F>(&mut self, frontend: &mut F)
    where
        F: Frontend<Image = I>,
    {
        self.background = match frontend.load_fitted(&self.background_path, self.screen) {
            Ok(image) => Some(image),
            Err(e) => {
                warn!("{e}, menu will have no background");
                None
            }
        };
    }
}
