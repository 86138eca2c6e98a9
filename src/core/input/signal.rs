//=========================================================================
// Input Signals
//=========================================================================
//
// The six discrete menu signals and the directional vocabulary shared
// by the cursor and its targets.
//
//=========================================================================

//=== InputSignal =========================================================

/// Discrete menu input. Every signal exposes a "newly pressed" and a
/// "currently held" form through [`super::InputQuery`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSignal {
    Confirm,
    Cancel,
    Up,
    Down,
    Left,
    Right,
}

impl InputSignal {
    /// All signals, in cursor evaluation priority order.
    pub const ALL: [InputSignal; 6] = [
        InputSignal::Confirm,
        InputSignal::Cancel,
        InputSignal::Up,
        InputSignal::Down,
        InputSignal::Left,
        InputSignal::Right,
    ];

    /// Returns the direction carried by this signal, if any.
    pub fn direction(self) -> Option<Direction> {
        match self {
            InputSignal::Up => Some(Direction::Up),
            InputSignal::Down => Some(Direction::Down),
            InputSignal::Left => Some(Direction::Left),
            InputSignal::Right => Some(Direction::Right),
            InputSignal::Confirm | InputSignal::Cancel => None,
        }
    }
}

//=== SignalEvent =========================================================

/// Edge event fed into a [`super::SignalTracker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalEvent {
    Pressed(InputSignal),
    Released(InputSignal),
}

//=== Axis / Direction ====================================================

/// Axis a cursor navigates along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Vertical,
    Horizontal,
}

/// Raw direction forwarded to selectable targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Directions in cursor evaluation priority order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn axis(self) -> Axis {
        match self {
            Direction::Up | Direction::Down => Axis::Vertical,
            Direction::Left | Direction::Right => Axis::Horizontal,
        }
    }

    /// Index delta along a list: up/left go back, down/right go forward.
    pub fn step(self) -> isize {
        match self {
            Direction::Up | Direction::Left => -1,
            Direction::Down | Direction::Right => 1,
        }
    }

    pub fn signal(self) -> InputSignal {
        match self {
            Direction::Up => InputSignal::Up,
            Direction::Down => InputSignal::Down,
            Direction::Left => InputSignal::Left,
            Direction::Right => InputSignal::Right,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_axis_and_step() {
        assert_eq!(Direction::Up.axis(), Axis::Vertical);
        assert_eq!(Direction::Down.axis(), Axis::Vertical);
        assert_eq!(Direction::Left.axis(), Axis::Horizontal);
        assert_eq!(Direction::Right.axis(), Axis::Horizontal);

        assert_eq!(Direction::Up.step(), -1);
        assert_eq!(Direction::Right.step(), 1);
    }

    #[test]
    fn signal_direction_round_trip() {
        for dir in Direction::ALL {
            assert_eq!(dir.signal().direction(), Some(dir));
        }
        assert_eq!(InputSignal::Confirm.direction(), None);
        assert_eq!(InputSignal::Cancel.direction(), None);
    }
}
