use crate::constants::DIAL_MAX_SECONDS;

/// Transient duration held by one dial.
///
/// `current` is what the face shows. `reference` is the amount that counts as
/// "full" for the miniature indicator; a drag redefines it, ticking does not.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DurationState {
    current: u32,
    reference: u32,
}

#[inline]
pub fn clamp_seconds(seconds: i64) -> u32 {
    seconds.clamp(0, DIAL_MAX_SECONDS as i64) as u32
}

impl DurationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_seconds(&self) -> u32 {
        self.current
    }

    pub fn reference_seconds(&self) -> u32 {
        self.reference
    }

    /// Programmatic update (countdown tick, reset). Raises the reference when
    /// the new value would overflow it, so a longer reset still reads as full.
    pub fn set_seconds(&mut self, seconds: i64) {
        self.current = clamp_seconds(seconds);
        if self.current > self.reference {
            self.reference = self.current;
        }
    }

    /// Direct manipulation: the chosen value becomes the new "full".
    pub fn set_by_user(&mut self, seconds: i64) {
        let s = clamp_seconds(seconds);
        self.current = s;
        self.reference = s;
    }

    /// Fill of the miniature indicator relative to the reference, in `[0, 1]`.
    pub fn reference_ratio(&self) -> f32 {
        if self.reference == 0 {
            return 0.0;
        }
        (self.current as f32 / self.reference as f32).clamp(0.0, 1.0)
    }
}
