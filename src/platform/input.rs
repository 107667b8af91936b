//! Latest-sample hand input
//!
//! The hand tracker runs at its own rate and may deliver any number of samples
//! between two frames, or none at all. The game only ever wants the newest
//! one, so samples go through a one-slot mailbox instead of a queue.

use std::sync::atomic::{AtomicU64, Ordering};

use glam::Vec2;

use crate::config::GameConfig;

/// Slot value meaning "no sample received yet" (both halves are NaN bit patterns)
const EMPTY: u64 = u64::MAX;

/// Source of the latest known finger position, in surface coordinates
pub trait InputSource {
    /// Non-blocking read of the newest sample, `None` if none ever arrived
    fn latest_sample(&self) -> Option<Vec2>;
}

/// Overwrite-on-write single slot shared between the tracker and the game loop
///
/// Both coordinates are packed into one atomic word so a reader never sees
/// `x` from one sample and `y` from another.
#[derive(Debug)]
pub struct Mailbox {
    slot: AtomicU64,
}

impl Mailbox {
    pub const fn new() -> Self {
        Self {
            slot: AtomicU64::new(EMPTY),
        }
    }

    /// Replace the stored sample. Non-finite samples are dropped.
    pub fn publish(&self, sample: Vec2) {
        if !sample.is_finite() {
            log::trace!("Dropping non-finite hand sample {:?}", sample);
            return;
        }
        self.slot.store(pack(sample), Ordering::Release);
    }

    /// Forget the stored sample
    pub fn clear(&self) {
        self.slot.store(EMPTY, Ordering::Release);
    }
}

impl Default for Mailbox {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for Mailbox {
    fn latest_sample(&self) -> Option<Vec2> {
        match self.slot.load(Ordering::Acquire) {
            EMPTY => None,
            bits => Some(unpack(bits)),
        }
    }
}

impl<T: InputSource + ?Sized> InputSource for &T {
    fn latest_sample(&self) -> Option<Vec2> {
        (**self).latest_sample()
    }
}

impl<T: InputSource + ?Sized> InputSource for std::sync::Arc<T> {
    fn latest_sample(&self) -> Option<Vec2> {
        (**self).latest_sample()
    }
}

/// Input that never reports a finger
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInput;

impl InputSource for NoInput {
    fn latest_sample(&self) -> Option<Vec2> {
        None
    }
}

/// Scale a landmark in normalized image coordinates (`0..1` on both axes) to the surface
pub fn from_normalized(nx: f32, ny: f32, config: &GameConfig) -> Vec2 {
    Vec2::new(nx * config.surface_width, ny * config.surface_height)
}

#[inline]
fn pack(sample: Vec2) -> u64 {
    ((sample.x.to_bits() as u64) << 32) | sample.y.to_bits() as u64
}

#[inline]
fn unpack(bits: u64) -> Vec2 {
    Vec2::new(f32::from_bits((bits >> 32) as u32), f32::from_bits(bits as u32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_starts_unknown() {
        let mailbox = Mailbox::new();
        assert_eq!(mailbox.latest_sample(), None);
    }

    #[test]
    fn test_last_value_wins() {
        let mailbox = Mailbox::new();
        mailbox.publish(Vec2::new(10.0, 20.0));
        mailbox.publish(Vec2::new(30.0, 40.0));
        mailbox.publish(Vec2::new(-5.5, 470.25));
        assert_eq!(mailbox.latest_sample(), Some(Vec2::new(-5.5, 470.25)));
    }

    #[test]
    fn test_read_has_no_side_effects() {
        let mailbox = Mailbox::new();
        mailbox.publish(Vec2::new(1.0, 2.0));
        assert_eq!(mailbox.latest_sample(), mailbox.latest_sample());
    }

    #[test]
    fn test_non_finite_is_dropped() {
        let mailbox = Mailbox::new();
        mailbox.publish(Vec2::new(f32::NAN, 2.0));
        assert_eq!(mailbox.latest_sample(), None);

        mailbox.publish(Vec2::new(3.0, 4.0));
        mailbox.publish(Vec2::new(3.0, f32::INFINITY));
        assert_eq!(mailbox.latest_sample(), Some(Vec2::new(3.0, 4.0)));
    }

    #[test]
    fn test_zero_and_negative_zero_are_samples() {
        let mailbox = Mailbox::new();
        mailbox.publish(Vec2::ZERO);
        assert_eq!(mailbox.latest_sample(), Some(Vec2::ZERO));
        mailbox.publish(Vec2::new(-0.0, -0.0));
        assert!(mailbox.latest_sample().is_some());
    }

    #[test]
    fn test_clear() {
        let mailbox = Mailbox::new();
        mailbox.publish(Vec2::new(1.0, 2.0));
        mailbox.clear();
        assert_eq!(mailbox.latest_sample(), None);
    }

    #[test]
    fn test_cross_thread_publish() {
        let mailbox = Arc::new(Mailbox::new());
        let producer = {
            let mailbox = Arc::clone(&mailbox);
            std::thread::spawn(move || {
                for i in 0..1000 {
                    let v = i as f32;
                    mailbox.publish(Vec2::new(v, v));
                }
            })
        };

        // Every observed sample is a whole sample, never a torn pair
        while !producer.is_finished() {
            if let Some(s) = mailbox.latest_sample() {
                assert_eq!(s.x, s.y);
            }
        }
        producer.join().unwrap();
        assert_eq!(mailbox.latest_sample(), Some(Vec2::new(999.0, 999.0)));
    }

    #[test]
    fn test_from_normalized() {
        let config = GameConfig::default();
        assert_eq!(from_normalized(0.5, 0.25, &config), Vec2::new(320.0, 120.0));
    }

    #[test]
    fn test_no_input() {
        assert_eq!(NoInput.latest_sample(), None);
    }
}
