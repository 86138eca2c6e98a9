//=========================================================================
// Frame Context
//=========================================================================
//
// Per-tick data handed to components by the host loop.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::InputQuery;

//=== FrameContext ========================================================

/// Shared, read-only data for one tick.
///
/// - `delta`: seconds since the previous tick
/// - `time`: seconds since the host started ticking
/// - `viewport_width`: width of the render target in pixels
/// - `input`: menu input state for this tick
pub struct FrameContext<'a> {
    pub delta: f32,
    pub time: f32,
    pub viewport_width: f32,
    pub input: &'a dyn InputQuery,
}

impl<'a> FrameContext<'a> {
    pub fn new(delta: f32, time: f32, viewport_width: f32, input: &'a dyn InputQuery) -> Self {
        Self {
            delta,
            time,
            viewport_width,
            input,
        }
    }
}
