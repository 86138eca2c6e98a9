//=========================================================================
// Move Gate
//=========================================================================
//
// Cooldown between accepted cursor actions.
//
//   Ready ──trigger()──> Cooling { elapsed: 0 }
//     ▲                        │ advance(dt)
//     └──── elapsed ≥ threshold┘
//
// A zero threshold never leaves `Ready`.
//
//=========================================================================

//=== GateState ===========================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GateState {
    Ready,
    Cooling { elapsed: f32 },
}

//=== MoveGate ============================================================

#[derive(Debug, Clone)]
pub struct MoveGate {
    threshold: f32,
    state: GateState,
}

impl MoveGate {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            state: GateState::Ready,
        }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, GateState::Ready)
    }

    /// Starts a cooldown after an accepted move.
    pub fn trigger(&mut self) {
        if self.threshold > 0.0 {
            self.state = GateState::Cooling { elapsed: 0.0 };
        }
    }

    /// Lets `delta` seconds pass.
    pub fn advance(&mut self, delta: f32) {
        if let GateState::Cooling { elapsed } = self.state {
            let elapsed = elapsed + delta;
            self.state = if elapsed >= self.threshold {
                GateState::Ready
            } else {
                GateState::Cooling { elapsed }
            };
        }
    }

    /// Returns to `Ready` immediately.
    pub fn reset(&mut self) {
        self.state = GateState::Ready;
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_ready() {
        assert!(MoveGate::new(0.25).is_ready());
    }

    #[test]
    fn zero_threshold_never_cools() {
        let mut gate = MoveGate::new(0.0);
        gate.trigger();
        assert!(gate.is_ready());
    }

    #[test]
    fn cools_until_threshold() {
        let mut gate = MoveGate::new(0.25);

        gate.trigger();
        assert_eq!(gate.state(), GateState::Cooling { elapsed: 0.0 });

        gate.advance(0.1);
        assert!(!gate.is_ready());
        gate.advance(0.1);
        assert!(!gate.is_ready());
        gate.advance(0.1);
        assert!(gate.is_ready());
    }

    #[test]
    fn retrigger_restarts_cooldown() {
        let mut gate = MoveGate::new(0.5);

        gate.trigger();
        gate.advance(0.4);
        gate.trigger();
        gate.advance(0.4);
        assert!(!gate.is_ready());
    }

    #[test]
    fn reset_forces_ready() {
        let mut gate = MoveGate::new(1.0);
        gate.trigger();
        gate.reset();
        assert!(gate.is_ready());
    }
}
