use thiserror::Error;

/// Latest report from the playback surface. Modeled as a tagged union so the
/// "extract position or default to zero" policy is a single match.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackStatus {
    /// The surface has not produced a status yet.
    Loading,
    Loaded {
        position_millis: u64,
        duration_millis: u64,
        is_playing: bool,
    },
    Error(String),
}

impl PlaybackStatus {
    /// Reel time in whole seconds, truncated toward zero. A surface that is
    /// still loading or errored reports time zero rather than an error.
    pub fn position_seconds(&self) -> u64 {
        match self {
            PlaybackStatus::Loaded {
                position_millis, ..
            } => position_millis / 1000,
            PlaybackStatus::Loading | PlaybackStatus::Error(_) => 0,
        }
    }

    /// Fractional seconds for the time overlay; zero while unavailable.
    pub fn position_secs_f64(&self) -> f64 {
        match self {
            PlaybackStatus::Loaded {
                position_millis, ..
            } => *position_millis as f64 / 1000.0,
            PlaybackStatus::Loading | PlaybackStatus::Error(_) => 0.0,
        }
    }
}

#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("playback control rejected: {0}")]
    Rejected(String),
}

/// Control handle the shop flow needs from the playback surface: read the
/// latest status, and ask it to pause or resume. Both control calls are
/// best-effort; an extra pause on a paused surface is a no-op.
pub trait PlaybackControl {
    fn status(&self) -> PlaybackStatus;
    fn pause(&mut self) -> Result<(), PlaybackError>;
    fn resume(&mut self) -> Result<(), PlaybackError>;
}

/// Stand-in playback surface: a looping wall-clock position source. The real
/// decode/render surface is outside this app; this keeps the reel time
/// ticking so the resolver has something to resolve against.
#[derive(Debug, Clone)]
pub struct ClockPlayback {
    position_secs: f64,
    duration_secs: f64,
    playing: bool,
}

impl ClockPlayback {
    pub fn new(duration_secs: f64) -> Self {
        ClockPlayback {
            position_secs: 0.0,
            duration_secs,
            playing: true,
        }
    }

    /// Advance the playhead by `dt` seconds, wrapping at the reel duration.
    pub fn tick(&mut self, dt: f64) {
        if !self.playing || dt <= 0.0 {
            return;
        }
        self.position_secs += dt;
        if self.duration_secs > 0.0 {
            self.position_secs %= self.duration_secs;
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }
}

impl PlaybackControl for ClockPlayback {
    fn status(&self) -> PlaybackStatus {
        PlaybackStatus::Loaded {
            position_millis: (self.position_secs * 1000.0) as u64,
            duration_millis: (self.duration_secs * 1000.0) as u64,
            is_playing: self.playing,
        }
    }

    fn pause(&mut self) -> Result<(), PlaybackError> {
        self.playing = false;
        Ok(())
    }

    fn resume(&mut self) -> Result<(), PlaybackError> {
        self.playing = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_seconds_truncates() {
        let status = PlaybackStatus::Loaded {
            position_millis: 5_999,
            duration_millis: 20_000,
            is_playing: true,
        };
        assert_eq!(status.position_seconds(), 5);
    }

    #[test]
    fn test_missing_position_defaults_to_zero() {
        assert_eq!(PlaybackStatus::Loading.position_seconds(), 0);
        assert_eq!(
            PlaybackStatus::Error("decoder died".to_string()).position_seconds(),
            0
        );
        assert_eq!(PlaybackStatus::Loading.position_secs_f64(), 0.0);
    }

    #[test]
    fn test_clock_playback_ticks_and_loops() {
        let mut player = ClockPlayback::new(10.0);
        player.tick(3.5);
        assert_eq!(player.status().position_seconds(), 3);
        player.tick(8.0);
        // 11.5 wraps to 1.5 on a 10s reel
        assert_eq!(player.status().position_seconds(), 1);
    }

    #[test]
    fn test_pause_freezes_and_resume_restarts() {
        let mut player = ClockPlayback::new(10.0);
        player.tick(2.0);
        player.pause().unwrap();
        assert!(!player.is_playing());
        player.tick(5.0);
        assert_eq!(player.status().position_seconds(), 2);
        player.resume().unwrap();
        player.tick(1.0);
        assert_eq!(player.status().position_seconds(), 3);
    }

    #[test]
    fn test_repeated_pause_is_a_no_op() {
        let mut player = ClockPlayback::new(10.0);
        player.pause().unwrap();
        player.pause().unwrap();
        assert!(!player.is_playing());
        player.resume().unwrap();
        player.resume().unwrap();
        assert!(player.is_playing());
    }
}
