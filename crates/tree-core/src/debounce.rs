use crate::gesture::Gesture;

/// Emits a gesture only when it differs from the previously emitted one.
///
/// There is no dwell time: a single differing frame flips the output, so a
/// hand hovering on a threshold can produce alternating events.
#[derive(Clone, Debug, Default)]
pub struct GestureDebouncer {
    last_emitted: Gesture,
}

impl GestureDebouncer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, raw: Gesture) -> Option<Gesture> {
        if raw == self.last_emitted {
            return None;
        }
        self.last_emitted = raw;
        Some(raw)
    }

    #[inline]
    pub fn last(&self) -> Gesture {
        self.last_emitted
    }

    pub fn reset(&mut self) {
        self.last_emitted = Gesture::None;
    }
}
