use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::change::ChangeSet;

/// One step of an animation: `before` applies when the frame starts,
/// `after` once `ticks` ticks have passed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationFrame {
    pub ticks: u32,
    pub before: ChangeSet,
    pub after: ChangeSet,
}

/// Cyclic list of frames; a JSON array of frames
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Animation {
    frames: Vec<AnimationFrame>,
}

impl Animation {
    pub fn new(frames: Vec<AnimationFrame>) -> Self {
        Self { frames }
    }

    pub fn frames(&self) -> &[AnimationFrame] {
        &self.frames
    }

    pub fn into_frames(self) -> Vec<AnimationFrame> {
        self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// Playback state of one body's animation.
///
/// A frame starts only once the previous frame's `after` change has
/// fired, so frames never overlap.
#[derive(Clone, Debug)]
pub struct AnimationPlayer {
    frames: VecDeque<AnimationFrame>,
    ready: bool,
    serial: u64,
}

impl AnimationPlayer {
    pub fn new(animation: Animation) -> Self {
        Self { frames: animation.frames.into(), ready: true, serial: 0 }
    }

    /// Tag the player so resume events can be matched to it.
    pub fn with_serial(mut self, serial: u64) -> Self {
        self.serial = serial;
        self
    }

    pub fn serial(&self) -> u64 {
        self.serial
    }

    pub fn is_ready(&self) -> bool {
        self.ready && !self.frames.is_empty()
    }

    /// Take the next frame if ready and rotate it to the back.
    pub fn start_next(&mut self) -> Option<AnimationFrame> {
        if !self.is_ready() {
            return None;
        }
        let frame = self.frames.pop_front()?;
        self.frames.push_back(frame.clone());
        self.ready = false;
        Some(frame)
    }

    /// The running frame's `after` change fired.
    pub fn resume(&mut self) {
        self.ready = true;
    }
}
