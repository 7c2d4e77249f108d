//! Held controls: press-and-hold buttons that repeat at a fixed cadence.
//!
//! At most one control is held at a time. Pressing a new one replaces the
//! old; release, firing and restart all cancel it.

use barrage_core::constants::*;
use barrage_core::enums::HeldControl;

#[derive(Debug, Clone, Default)]
pub struct HeldInput {
    held: Option<HeldControl>,
    /// Ticks until the next repeat step.
    countdown: u32,
}

impl HeldInput {
    /// Press `control`. Returns the step to apply immediately, if any:
    /// aim and power adjust at once, movement waits for the first interval.
    pub fn press(&mut self, control: HeldControl) -> Option<HeldControl> {
        self.held = Some(control);
        self.countdown = repeat_ticks(control);
        if is_movement(control) {
            None
        } else {
            Some(control)
        }
    }

    pub fn release(&mut self) {
        self.held = None;
        self.countdown = 0;
    }

    pub fn held(&self) -> Option<HeldControl> {
        self.held
    }

    /// Advance one tick; returns the control when a repeat step is due.
    pub fn tick(&mut self) -> Option<HeldControl> {
        let control = self.held?;
        self.countdown = self.countdown.saturating_sub(1);
        if self.countdown == 0 {
            self.countdown = repeat_ticks(control);
            Some(control)
        } else {
            None
        }
    }
}

fn is_movement(control: HeldControl) -> bool {
    matches!(control, HeldControl::MoveLeft | HeldControl::MoveRight)
}

fn repeat_ticks(control: HeldControl) -> u32 {
    if is_movement(control) {
        ms_to_ticks(MOVE_REPEAT_MS)
    } else {
        ms_to_ticks(ADJUST_REPEAT_MS)
    }
}
