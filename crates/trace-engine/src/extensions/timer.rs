// extensions/timer.rs
//
// Delayed cues: the frame-loop stand-in for "wait N seconds, then continue".

/// Pending delayed cues of one owner.
#[derive(Debug)]
pub struct TimerState<C> {
    pending: Vec<(f32, C)>,
}

impl<C> TimerState<C> {
    pub fn new() -> Self {
        Self { pending: Vec::new() }
    }

    /// Fire `cue` once `delay` seconds of ticks have elapsed.
    pub fn schedule(&mut self, delay: f32, cue: C) {
        self.pending.push((delay, cue));
    }

    /// Fire `cue` on the next tick.
    pub fn next_tick(&mut self, cue: C) {
        self.schedule(0.0, cue);
    }

    /// Advance all timers. Returns the cues that fired, in schedule order.
    pub fn tick(&mut self, dt: f32) -> Vec<C> {
        let mut fired = Vec::new();
        let mut i = 0;
        while i < self.pending.len() {
            self.pending[i].0 -= dt;
            if self.pending[i].0 <= 0.0 {
                fired.push(self.pending.remove(i).1);
            } else {
                i += 1;
            }
        }
        fired
    }

    /// Drop every pending cue.
    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl<C> Default for TimerState<C> {
    fn default() -> Self {
        Self::new()
    }
}
