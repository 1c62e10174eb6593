use super::types::{Frame, TileId};
use crate::error::TilesetError;

/// A looping, frame-accurate animation for one base tile.
///
/// The frame list is ordered and non-empty, and every duration is positive;
/// `new` enforces both so the lookup below is total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileAnimation {
    frames: Vec<Frame>,
    /// Precomputed sum of all frame durations (ms)
    cycle_ms: u64,
}

impl TileAnimation {
    pub fn new(frames: Vec<Frame>) -> Result<Self, TilesetError> {
        if frames.is_empty() {
            return Err(TilesetError::MalformedAsset(
                "animation has no frames".to_string(),
            ));
        }
        for frame in &frames {
            if frame.duration_ms == 0 {
                return Err(TilesetError::MalformedAsset(format!(
                    "frame targeting tile {} has zero duration",
                    frame.tile_id
                )));
            }
        }
        let cycle_ms = frames.iter().map(|f| u64::from(f.duration_ms)).sum();
        Ok(Self { frames, cycle_ms })
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Total duration of one loop in milliseconds; always positive
    pub fn cycle_ms(&self) -> u64 {
        self.cycle_ms
    }

    /// Index of the frame displayed at `elapsed_ms`, wrapping at the cycle
    /// length
    pub fn frame_index_at(&self, elapsed_ms: u64) -> usize {
        let t = elapsed_ms % self.cycle_ms;
        let mut upper = 0u64;
        for (index, frame) in self.frames.iter().enumerate() {
            upper += u64::from(frame.duration_ms);
            if t < upper {
                return index;
            }
        }
        // t < cycle_ms, so the loop always returns
        self.frames.len() - 1
    }

    /// Tile to draw at `elapsed_ms`
    pub fn tile_at(&self, elapsed_ms: u64) -> TileId {
        self.frames[self.frame_index_at(elapsed_ms)].tile_id
    }
}

/// Monotonic animation clock in milliseconds.
///
/// One shared clock per scene keeps every animated tile in phase, the same
/// way a single global animation time drives a whole tile layer. The resolver
/// itself is stateless; this is only a convenience for callers that advance
/// time by per-frame deltas.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnimationClock {
    elapsed_ms: f64,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by a frame delta in seconds
    pub fn advance_secs(&mut self, delta_secs: f32) {
        self.elapsed_ms += f64::from(delta_secs) * 1000.0;
    }

    /// Advance by a frame delta in milliseconds
    pub fn advance_ms(&mut self, delta_ms: f64) {
        self.elapsed_ms += delta_ms;
    }

    /// Whole milliseconds elapsed, as the resolver consumes them
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms as u64
    }

    pub fn reset(&mut self) {
        self.elapsed_ms = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frames(ids: &[TileId], duration_ms: u32) -> Vec<Frame> {
        ids.iter().map(|&id| Frame::new(id, duration_ms)).collect()
    }

    #[test]
    fn test_water_tile_cycle() {
        // Tile 16 from the overworld tileset: six 100ms frames
        let anim = TileAnimation::new(frames(&[16, 58, 100, 142, 184, 226], 100)).unwrap();

        assert_eq!(anim.cycle_ms(), 600);
        assert_eq!(anim.tile_at(0), 16);
        assert_eq!(anim.tile_at(99), 16);
        assert_eq!(anim.tile_at(100), 58);
        assert_eq!(anim.tile_at(599), 226);
        assert_eq!(anim.tile_at(600), 16); // wraps
    }

    #[test]
    fn test_three_frame_cycle() {
        // Tile 382: three 300ms frames, cycle 900ms
        let anim = TileAnimation::new(frames(&[382, 385, 388], 300)).unwrap();

        assert_eq!(anim.tile_at(899), 388);
        assert_eq!(anim.tile_at(900), 382);
    }

    #[test]
    fn test_variable_frame_durations() {
        let anim = TileAnimation::new(vec![Frame::new(7, 50), Frame::new(9, 150)]).unwrap();

        assert_eq!(anim.cycle_ms(), 200);
        assert_eq!(anim.tile_at(49), 7);
        assert_eq!(anim.tile_at(50), 9);
        assert_eq!(anim.tile_at(199), 9);
        assert_eq!(anim.tile_at(200), 7);
    }

    #[test]
    fn test_periodicity_and_closure() {
        let anim = TileAnimation::new(vec![
            Frame::new(1, 70),
            Frame::new(2, 30),
            Frame::new(3, 100),
        ])
        .unwrap();
        let cycle = anim.cycle_ms();

        for t in (0..cycle).step_by(7) {
            // Periodic with period cycle_ms
            assert_eq!(anim.tile_at(t), anim.tile_at(t + cycle));
            // Always one of the declared frames
            assert!(anim.frames().iter().any(|f| f.tile_id == anim.tile_at(t)));
        }
    }

    #[test]
    fn test_rejects_empty_frame_list() {
        assert!(matches!(
            TileAnimation::new(Vec::new()),
            Err(TilesetError::MalformedAsset(_))
        ));
    }

    #[test]
    fn test_rejects_zero_duration() {
        assert!(matches!(
            TileAnimation::new(vec![Frame::new(1, 100), Frame::new(2, 0)]),
            Err(TilesetError::MalformedAsset(_))
        ));
    }

    #[test]
    fn test_clock_advance_and_reset() {
        let mut clock = AnimationClock::new();
        assert_eq!(clock.elapsed_ms(), 0);

        clock.advance_secs(1.5);
        assert_eq!(clock.elapsed_ms(), 1500);

        clock.advance_ms(250.0);
        assert_eq!(clock.elapsed_ms(), 1750);

        clock.reset();
        assert_eq!(clock.elapsed_ms(), 0);
    }
}
