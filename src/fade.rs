use tracing::debug;

use crate::config::Theme;
use crate::engine::{Frontend, InputEvent};
use crate::layout::ScreenSize;

/// Opacities for one frame of a cross-fade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeFrame {
    pub incoming: u8,
}

impl FadeFrame {
    pub fn outgoing(&self) -> u8 {
        255 - self.incoming
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeOutcome {
    Completed,
    Aborted,
}

/// How a fade ended, plus the last window resize seen while it owned the input
/// queue. raylib reports a resize for one frame only, so the caller has to apply
/// it once the fade is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeReport {
    pub outcome: FadeOutcome,
    pub resized: Option<ScreenSize>,
}

/// Linear fade schedule: incoming opacity 0, step, 2*step, ... and a final
/// frame clamped to exactly 255.
#[derive(Debug, Clone)]
pub struct FadeTransition {
    step: u16,
    next: Option<u16>,
}

impl FadeTransition {
    pub fn new(step: u8) -> Self {
        Self {
            step: u16::from(step.max(1)),
            next: Some(0),
        }
    }
}

impl Iterator for FadeTransition {
    type Item = FadeFrame;

    fn next(&mut self) -> Option<FadeFrame> {
        let alpha = self.next?;
        self.next = if alpha >= 255 {
            None
        } else {
            Some((alpha + self.step).min(255))
        };
        Some(FadeFrame {
            incoming: alpha as u8,
        })
    }
}

/// Plays a blocking cross-fade from `outgoing` to `incoming`.
///
/// The fade owns the input queue while it runs. Only `Quit` aborts it. The last
/// `Resized` is kept in the report; every other event is dropped, so Escape does
/// not interrupt a fade in progress. Frames keep the pre-resize geometry until
/// the fade ends.
pub fn run_fade<F: Frontend>(
    frontend: &mut F,
    outgoing: &F::Image,
    incoming: &F::Image,
    step: u8,
    theme: &Theme,
) -> FadeReport {
    let mut resized = None;
    for frame in FadeTransition::new(step) {
        for event in frontend.poll_events() {
            match event {
                InputEvent::Quit => {
                    debug!(alpha = frame.incoming, "fade aborted by quit request");
                    return FadeReport {
                        outcome: FadeOutcome::Aborted,
                        resized,
                    };
                }
                InputEvent::Resized(screen) => resized = Some(screen),
                _ => {}
            }
        }
        frontend.draw_crossfade(outgoing, incoming, frame, theme);
    }
    FadeReport {
        outcome: FadeOutcome::Completed,
        resized,
    }
}
