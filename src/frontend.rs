use std::path::Path;

use raylib::prelude::*;

use crate::config::{Settings, Theme};
use crate::constants::*;
use crate::engine::{Frontend, InputEvent, Key, PointerButton};
use crate::error::StoryResult;
use crate::fade::FadeFrame;
use crate::layout::{centered_origin, centered_text_origin, hint_layout, ScreenSize};
use crate::start_screen::StartScreen;
use crate::texture_loader::{load_texture_fitted, placeholder_texture};

const BUTTON_SEGMENTS: i32 = 8;

/// Window, input and textures backed by raylib.
pub struct RaylibFrontend {
    rl: RaylibHandle,
    thread: RaylibThread,
    last_mouse: Option<Vector2>,
}

impl RaylibFrontend {
    pub fn open(settings: &Settings) -> Self {
        let mut builder = raylib::init();
        builder.title(WINDOW_TITLE).vsync();
        if settings.fullscreen {
            // 0x0 picks the monitor resolution
            builder.size(0, 0).fullscreen();
        } else {
            builder
                .size(settings.window_width, settings.window_height)
                .resizable();
        }
        let (mut rl, thread) = builder.build();

        rl.set_target_fps(settings.fps);
        rl.set_trace_log(TraceLogLevel::LOG_ERROR);
        // Escape is handled by the game, not by raylib's close request
        rl.set_exit_key(None);

        Self {
            rl,
            thread,
            last_mouse: None,
        }
    }
}

fn with_alpha(alpha: u8) -> Color {
    Color::new(255, 255, 255, alpha)
}

fn draw_centered(d: &mut RaylibDrawHandle, texture: &Texture2D, screen: ScreenSize, alpha: u8) {
    let (x, y) = centered_origin(texture.width(), texture.height(), screen);
    d.draw_texture(texture, x, y, with_alpha(alpha));
}

fn draw_hint(d: &mut RaylibDrawHandle, screen: ScreenSize, theme: &Theme) {
    let size = theme.hint_font_size;
    let hint = hint_layout(screen, d.measure_text(HINT_TEXT, size), size);

    let (bx, by, bw, bh) = hint.backdrop;
    d.draw_rectangle(bx, by, bw, bh, Color::new(0, 0, 0, HINT_BOX_ALPHA));
    d.draw_text(HINT_TEXT, hint.text.0, hint.text.1, size, theme.text);
}

impl Frontend for RaylibFrontend {
    type Image = Texture2D;

    fn screen_size(&self) -> ScreenSize {
        ScreenSize::new(self.rl.get_screen_width(), self.rl.get_screen_height())
    }

    fn now_ms(&self) -> u64 {
        (self.rl.get_time() * 1000.0) as u64
    }

    fn poll_events(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();

        if self.rl.window_should_close() {
            events.push(InputEvent::Quit);
        }
        if self.rl.is_window_resized() {
            events.push(InputEvent::Resized(self.screen_size()));
        }

        let position = self.rl.get_mouse_position();
        let moved = self
            .last_mouse
            .is_none_or(|last| last.x != position.x || last.y != position.y);
        if moved {
            self.last_mouse = Some(position);
            events.push(InputEvent::MouseMove(position));
        }

        for (raw, button) in [
            (MouseButton::MOUSE_BUTTON_LEFT, PointerButton::Primary),
            (MouseButton::MOUSE_BUTTON_RIGHT, PointerButton::Secondary),
            (MouseButton::MOUSE_BUTTON_MIDDLE, PointerButton::Middle),
        ] {
            if self.rl.is_mouse_button_pressed(raw) {
                events.push(InputEvent::MouseDown { button, position });
            }
        }

        if self.rl.is_key_pressed(KeyboardKey::KEY_ESCAPE) {
            events.push(InputEvent::KeyDown(Key::Escape));
        }
        if self.rl.is_key_pressed(KeyboardKey::KEY_SPACE) {
            events.push(InputEvent::KeyDown(Key::Space));
        }

        events
    }

    fn load_fitted(&mut self, path: &Path, screen: ScreenSize) -> StoryResult<Texture2D> {
        load_texture_fitted(&mut self.rl, &self.thread, path, screen)
    }

    fn placeholder(&mut self, screen: ScreenSize, color: Color) -> StoryResult<Texture2D> {
        placeholder_texture(&mut self.rl, &self.thread, screen, color)
    }

    fn draw_menu(&mut self, menu: &StartScreen<Texture2D>, theme: &Theme) {
        let screen = menu.screen();
        let mut d = self.rl.begin_drawing(&self.thread);
        d.clear_background(theme.background);

        if let Some(background) = menu.background() {
            let (x, y) = centered_origin(background.width(), background.height(), screen);
            d.draw_texture(background, x, y, Color::WHITE);
            d.draw_rectangle(
                x,
                y,
                background.width(),
                background.height(),
                Color::new(0, 0, 0, MENU_OVERLAY_ALPHA),
            );
        }

        let button = menu.button();
        let rect = button.rect();
        let fill = if button.hovered() {
            theme.button_hover
        } else {
            theme.button
        };

        // Border first, fill inset by the border thickness on top
        d.draw_rectangle_rounded(rect, BUTTON_ROUNDNESS, BUTTON_SEGMENTS, theme.button_border);
        let inner = Rectangle::new(
            rect.x + BUTTON_BORDER,
            rect.y + BUTTON_BORDER,
            rect.width - 2.0 * BUTTON_BORDER,
            rect.height - 2.0 * BUTTON_BORDER,
        );
        d.draw_rectangle_rounded(inner, BUTTON_ROUNDNESS, BUTTON_SEGMENTS, fill);

        let size = theme.button_font_size;
        let center = button.center();
        let (label_x, label_y) =
            centered_text_origin(center.x, center.y, d.measure_text(BUTTON_LABEL, size), size);
        d.draw_text(BUTTON_LABEL, label_x, label_y, size, theme.button_text);
    }

    fn draw_story(&mut self, image: &Texture2D, theme: &Theme) {
        let screen = self.screen_size();
        let mut d = self.rl.begin_drawing(&self.thread);
        d.clear_background(theme.background);
        draw_centered(&mut d, image, screen, 255);
        draw_hint(&mut d, screen, theme);
    }

    fn draw_crossfade(
        &mut self,
        outgoing: &Texture2D,
        incoming: &Texture2D,
        frame: FadeFrame,
        theme: &Theme,
    ) {
        let screen = self.screen_size();
        let mut d = self.rl.begin_drawing(&self.thread);
        d.clear_background(theme.background);
        draw_centered(&mut d, outgoing, screen, frame.outgoing());
        draw_centered(&mut d, incoming, screen, frame.incoming);
    }
}
