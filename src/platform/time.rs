//! Frame clocks

use std::time::{Duration, Instant};

use super::FrameClock;

/// Real-time clock pacing the loop at a fixed frame rate
#[derive(Debug)]
pub struct FixedRateClock {
    frame: Duration,
    last_frame: Instant,
    next_deadline: Instant,
}

impl FixedRateClock {
    pub fn new(frame_rate: u32) -> Self {
        let frame = Duration::from_secs(1) / frame_rate.max(1);
        let now = Instant::now();
        Self {
            frame,
            last_frame: now,
            next_deadline: now + frame,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }
}

impl FrameClock for FixedRateClock {
    fn elapsed_ms(&mut self) -> u32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        elapsed.as_millis().min(u32::MAX as u128) as u32
    }

    fn wait_for_next_frame(&mut self) {
        let now = Instant::now();
        if now < self.next_deadline {
            std::thread::sleep(self.next_deadline - now);
            self.next_deadline += self.frame;
        } else {
            // Overran: restart the schedule instead of bursting to catch up
            log::warn!(
                "Frame overran by {:?}",
                now.duration_since(self.next_deadline)
            );
            self.next_deadline = now + self.frame;
        }
    }
}

/// Clock that never sleeps and reports a constant frame time
#[derive(Debug, Clone)]
pub struct ManualClock {
    frame_ms: u32,
    pub frames_waited: u64,
}

impl ManualClock {
    pub fn new(frame_ms: u32) -> Self {
        Self {
            frame_ms,
            frames_waited: 0,
        }
    }
}

impl FrameClock for ManualClock {
    fn elapsed_ms(&mut self) -> u32 {
        self.frame_ms
    }

    fn wait_for_next_frame(&mut self) {
        self.frames_waited += 1;
    }
}
