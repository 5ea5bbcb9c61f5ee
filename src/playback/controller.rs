use std::time::Duration;

use tracing::{debug, warn};

use crate::audio::AudioOutput;
use crate::config::MotionSettings;
use crate::motion::{ScaleStore, ease_out_cubic};

use super::phase::{Active, EndReason, PlaybackEvent, Releasing, TrackPhase, VisualPhase};

/// Owns the playback state of the landing page.
///
/// Phases are entered with a timestamp and advanced by `tick`, which compares
/// elapsed time against the configured delays. At most one track is ever in
/// Starting/Playing; selecting another track ends the current one first.
pub struct PlaybackController {
    motion: MotionSettings,
    track_count: usize,
    active: Option<Active>,
    releasing: Vec<Releasing>,
    scales: ScaleStore,
    events: Vec<PlaybackEvent>,
}

impl PlaybackController {
    pub fn new(track_count: usize, motion: MotionSettings) -> Self {
        let scales = ScaleStore::new(track_count, motion.rest_scale);
        Self {
            motion,
            track_count,
            active: None,
            releasing: Vec::new(),
            scales,
            events: Vec::new(),
        }
    }

    /// The track in Starting or Playing, if any.
    pub fn active_index(&self) -> Option<usize> {
        self.active.map(|a| a.index)
    }

    pub fn phase(&self, index: usize) -> TrackPhase {
        if let Some(a) = self.active.filter(|a| a.index == index) {
            return a.phase;
        }
        if self.releasing.iter().any(|r| r.index == index) {
            TrackPhase::Ending
        } else {
            TrackPhase::Idle
        }
    }

    /// User picked track `index`: toggle it off if it is the active one,
    /// otherwise end the active track and start this one.
    pub fn select(&mut self, index: usize, now: Duration, audio: &mut dyn AudioOutput) {
        if index >= self.track_count {
            debug!("ignoring selection of track {index} (catalog has {})", self.track_count);
            return;
        }

        if let Some(current) = self.active.take() {
            let toggled = current.index == index;
            let reason = if toggled {
                EndReason::Toggled
            } else {
                EndReason::Interrupted
            };
            self.begin_ending(current, reason, now, audio);
            if toggled {
                return;
            }
        }

        self.releasing.retain(|r| r.index != index);
        self.active = Some(Active {
            index,
            phase: TrackPhase::Starting,
            since: now,
        });
        self.scales
            .animate(index, self.motion.active_scale, now, self.motion.scale_duration());
        self.events.push(PlaybackEvent::Starting { index });
    }

    /// The cancel input. Returns true when it ended a track, in which case the
    /// input's default action must not run.
    pub fn cancel(&mut self, now: Duration, audio: &mut dyn AudioOutput) -> bool {
        match self.active.take() {
            Some(current) => {
                self.begin_ending(current, EndReason::Cancelled, now, audio);
                true
            }
            None => false,
        }
    }

    /// Advance every phase whose delay has elapsed at `now`.
    pub fn tick(&mut self, now: Duration, audio: &mut dyn AudioOutput) {
        let settle = self.motion.settle();
        let events = &mut self.events;
        self.releasing.retain(|r| {
            if now.saturating_sub(r.since) >= settle {
                events.push(PlaybackEvent::Idle { index: r.index });
                false
            } else {
                true
            }
        });

        let Some(current) = self.active else {
            return;
        };
        match current.phase {
            TrackPhase::Starting
                if now.saturating_sub(current.since) >= self.motion.start_delay() =>
            {
                match audio.play(current.index) {
                    Ok(()) => {
                        self.active = Some(Active {
                            phase: TrackPhase::Playing,
                            since: now,
                            ..current
                        });
                        self.events.push(PlaybackEvent::Playing {
                            index: current.index,
                        });
                    }
                    Err(e) => {
                        warn!("playback of track {} failed: {e}", current.index);
                        self.active = None;
                        self.scales.animate(
                            current.index,
                            self.motion.rest_scale,
                            now,
                            self.motion.scale_duration(),
                        );
                        self.events.push(PlaybackEvent::Failed {
                            index: current.index,
                            error: e.to_string(),
                        });
                    }
                }
            }
            TrackPhase::Playing if audio.finished() => {
                self.active = None;
                self.begin_ending(current, EndReason::Finished, now, audio);
            }
            _ => {}
        }
    }

    fn begin_ending(
        &mut self,
        current: Active,
        reason: EndReason,
        now: Duration,
        audio: &mut dyn AudioOutput,
    ) {
        if current.phase == TrackPhase::Playing {
            audio.stop();
        }
        self.scales.animate(
            current.index,
            self.motion.rest_scale,
            now,
            self.motion.scale_duration(),
        );
        self.releasing.push(Releasing {
            index: current.index,
            since: now,
        });
        self.events.push(PlaybackEvent::Ending {
            index: current.index,
            reason,
        });
    }

    fn playing_for(&self, index: usize, now: Duration) -> Option<Duration> {
        self.active
            .filter(|a| a.index == index && a.phase == TrackPhase::Playing)
            .map(|a| now.saturating_sub(a.since))
    }

    pub fn visual_phase(&self, index: usize, now: Duration) -> VisualPhase {
        match self.playing_for(index, now) {
            Some(t) if t >= self.motion.info_after() => VisualPhase::InfoShown,
            Some(t) if t >= self.motion.darken_after() => VisualPhase::Darkened,
            _ => VisualPhase::Normal,
        }
    }

    /// Opacity of the info overlay, fading in once it is revealed.
    pub fn info_opacity(&self, index: usize, now: Duration) -> f64 {
        let Some(t) = self.playing_for(index, now) else {
            return 0.0;
        };
        let info_after = self.motion.info_after();
        if t < info_after {
            return 0.0;
        }
        let fade = self.motion.info_fade();
        if fade.is_zero() {
            return 1.0;
        }
        ease_out_cubic((t - info_after).as_secs_f64() / fade.as_secs_f64())
    }

    /// True once nothing is running, settling or moving at `now`.
    pub fn is_settled(&self, now: Duration) -> bool {
        self.active.is_none() && self.releasing.is_empty() && !self.scales.is_animating(now)
    }

    /// Background scale of layer `index`.
    pub fn scale(&self, index: usize, now: Duration) -> f64 {
        self.scales.value_at(index, now)
    }

    /// Transitions since the last call, oldest first.
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.events)
    }
}
