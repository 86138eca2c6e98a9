//=========================================================================
// Selection Cursor
//=========================================================================
//
// Turns menu input into one authoritative selected index and drives the
// marker toward the selected target's anchor.
//
// Lifecycle:
//   Inactive ──activate()──> Active ⇄ Disabled (set_active / single-use)
//       ▲                      │
//       └────deactivate()──────┘
//
// Tick order (update()):
//   1. Input        → at most one of confirm / cancel / direction
//   2. Idle sway    → marker target follows anchor + sin offset
//   3. Marker       → smooth_damp toward target (every state)
//   4. Move gate    → cooldown advances
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec3;
use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use super::config::CursorConfig;
use super::errors::CursorError;
use super::gate::MoveGate;
use super::marker::Marker;
use super::selectable::SelectableRef;
use crate::core::audio::AudioOutput;
use crate::core::frame::FrameContext;
use crate::core::input::{Direction, InputQuery, InputSignal};
use crate::core::math::idle_offset;

//=== CursorState =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    /// Not activated; no target snapshot.
    Inactive,

    /// Activated and handling input.
    Active,

    /// Activated but ignoring input (single-use spent or switched off).
    /// The marker keeps animating.
    Disabled,
}

//=== SelectionCursor =====================================================

/// Menu cursor over an ordered list of [`super::Selectable`] targets.
pub struct SelectionCursor {
    config: CursorConfig,
    targets: Vec<SelectableRef>,
    options: Vec<SelectableRef>,
    audio: Box<dyn AudioOutput>,

    state: CursorState,
    selected_index: usize,
    previous_index: usize,
    gate: MoveGate,

    marker: Marker,
    idle_animation: bool,
    start_position: Option<Vec3>,
}

impl SelectionCursor {
    //--- Construction -----------------------------------------------------

    /// Creates an inactive cursor whose marker rests at `position`.
    ///
    /// `audio` is the output the cursor's feedback sounds go to.
    pub fn new(
        config: CursorConfig,
        targets: Vec<SelectableRef>,
        audio: Box<dyn AudioOutput>,
        position: Vec3,
    ) -> Self {
        Self {
            gate: MoveGate::new(config.move_cooldown),
            idle_animation: config.idle_animation,
            config,
            targets,
            options: Vec::new(),
            audio,
            state: CursorState::Inactive,
            selected_index: 0,
            previous_index: 0,
            marker: Marker::new(position),
            start_position: None,
        }
    }

    //--- Lifecycle --------------------------------------------------------

    /// Activates the cursor and selects its initial target.
    ///
    /// With no targets the cursor stays [`CursorState::Inactive`], its
    /// marker is hidden and no callbacks run. Activating a cursor that is
    /// already activated does nothing.
    pub fn activate(&mut self) -> Result<(), CursorError> {
        if self.state != CursorState::Inactive {
            warn!("Cursor is already activated ({:?}), ignoring", self.state);
            return Ok(());
        }

        if self.targets.is_empty() {
            warn!("A cursor without at least one target was activated, disabling");
            self.marker.set_visible(false);
            return Err(CursorError::NoTargets);
        }

        if !self.config.keep_selected_index {
            self.selected_index = 0;
            self.previous_index = 0;
        }

        self.options = self.targets.clone();
        for (slot, option) in self.options.iter().enumerate() {
            option.borrow_mut().on_cursor_init(slot);
        }

        let anchor = self.selected_anchor();
        self.marker.set_target(anchor);

        if self.config.start_animation {
            let start = *self.start_position.get_or_insert(self.marker.position());
            self.marker.snap_to(start);
        } else {
            self.marker.snap_to(anchor);
        }

        self.options[self.selected_index]
            .borrow_mut()
            .on_cursor_arrive();

        self.gate.reset();
        self.state = CursorState::Active;

        info!(
            "Cursor activated on target {} of {}",
            self.selected_index,
            self.options.len()
        );
        Ok(())
    }

    /// Deactivates the cursor and drops the target snapshot.
    ///
    /// The selected index survives for `keep_selected_index` cursors.
    pub fn deactivate(&mut self) {
        if self.state == CursorState::Inactive {
            return;
        }
        self.options.clear();
        self.state = CursorState::Inactive;
        info!("Cursor deactivated");
    }

    //--- Update Loop ------------------------------------------------------

    /// Runs one tick.
    pub fn update(&mut self, ctx: &FrameContext<'_>) {
        if self.state == CursorState::Active && self.gate.is_ready() {
            self.handle_input(ctx.input);
        }

        if self.idle_animation && !self.options.is_empty() {
            let offset = idle_offset(ctx.time, ctx.viewport_width);
            self.marker.set_target(self.selected_anchor() + Vec3::X * offset);
        }

        self.marker.step(self.config.movement_time, ctx.delta);
        self.gate.advance(ctx.delta);
    }

    fn handle_input(&mut self, input: &dyn InputQuery) {
        if input.is_pressed(InputSignal::Confirm) && self.selected_is_active() {
            self.audio.play_one_shot(&self.config.confirm_sound);
            self.options[self.selected_index].borrow_mut().on_confirm();
            self.consume_single_use();
        } else if input.is_pressed(InputSignal::Cancel) && self.selected_is_active() {
            self.audio.play_one_shot(&self.config.cancel_sound);
            self.options[self.selected_index].borrow_mut().on_cancel();
            self.consume_single_use();
        } else if let Some(direction) = Direction::ALL
            .into_iter()
            .find(|d| input.is_held(d.signal()))
        {
            if self.config.mode.accepts(direction) {
                if let Some(next) = self.step_index(direction) {
                    self.move_to(next);
                }
            }
            self.options[self.selected_index]
                .borrow_mut()
                .on_directional_input(direction);
        }
    }

    /// Index one step along `direction`, or `None` at a list boundary.
    fn step_index(&self, direction: Direction) -> Option<usize> {
        let next = self.selected_index.checked_add_signed(direction.step())?;
        (next < self.options.len()).then_some(next)
    }

    fn move_to(&mut self, next: usize) {
        self.previous_index = self.selected_index;
        self.selected_index = next;

        if !self.idle_animation {
            let anchor = self.selected_anchor();
            self.marker.set_target(anchor);
        }

        self.audio.play_one_shot(&self.config.move_sound);
        self.options[self.previous_index]
            .borrow_mut()
            .on_cursor_leave();
        self.options[self.selected_index]
            .borrow_mut()
            .on_cursor_arrive();

        self.gate.trigger();
        debug!("Cursor moved {} -> {}", self.previous_index, self.selected_index);
    }

    fn consume_single_use(&mut self) {
        if self.config.single_use {
            self.state = CursorState::Disabled;
            debug!("Single-use cursor spent");
        }
    }

    //--- Toggles ----------------------------------------------------------

    /// Switches input handling and marker visibility.
    ///
    /// Has no effect on input before [`activate`](Self::activate).
    pub fn set_active(&mut self, active: bool) {
        self.marker.set_visible(active);
        match self.state {
            CursorState::Inactive => {
                debug!("set_active({}) on an inactive cursor only toggles visibility", active)
            }
            _ if active => self.state = CursorState::Active,
            _ => self.state = CursorState::Disabled,
        }
    }

    /// Switches the idle sway on or off.
    pub fn set_idle_animation(&mut self, enabled: bool) {
        self.idle_animation = enabled;
    }

    /// Applies [`set_active`](Self::set_active) and
    /// [`set_idle_animation`](Self::set_idle_animation) together, the way
    /// existing menu data expects.
    pub fn set_activity_status(&mut self, active: bool) {
        self.set_active(active);
        self.set_idle_animation(active);
    }

    //--- Queries ----------------------------------------------------------

    pub fn state(&self) -> CursorState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == CursorState::Active
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn previous_index(&self) -> usize {
        self.previous_index
    }

    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    pub fn idle_animation(&self) -> bool {
        self.idle_animation
    }

    pub fn marker(&self) -> &Marker {
        &self.marker
    }

    //--- Internal Helpers -------------------------------------------------

    fn selected_anchor(&self) -> Vec3 {
        self.options[self.selected_index].borrow().anchor()
    }

    fn selected_is_active(&self) -> bool {
        self.options[self.selected_index].borrow().is_active()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
