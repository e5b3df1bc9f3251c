//! Frame bookkeeping for unit animations.
use std::collections::BTreeMap;

use skirmish_content::AnimationSpec;
use skirmish_core::Animator;

use crate::shared::Shared;

#[derive(Clone, Debug, Default)]
pub struct Sprite {
    animations: BTreeMap<String, AnimationSpec>,
    current: Option<&'static str>,
    frame: u32,
    clock: f64,
}

impl Sprite {
    pub fn new(animations: BTreeMap<String, AnimationSpec>) -> Self {
        Self {
            animations,
            ..Self::default()
        }
    }

    /// Name of the animation being played.
    pub fn current(&self) -> Option<&'static str> {
        self.current
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    pub fn play(&mut self, animation: &'static str) {
        self.current = Some(animation);
        self.frame = 0;
        self.clock = 0.0;
    }

    pub fn advance(&mut self, delta: f64) {
        let Some(spec) = self.current.and_then(|name| self.animations.get(name)) else {
            return;
        };
        if spec.frames == 0 || spec.frame_time <= 0.0 {
            return;
        }
        self.clock += delta;
        while self.clock >= spec.frame_time {
            self.clock -= spec.frame_time;
            if self.frame + 1 < spec.frames {
                self.frame += 1;
            } else if spec.looping {
                self.frame = 0;
            }
        }
    }
}

impl Animator for Shared<Sprite> {
    fn play(&mut self, animation: &'static str) {
        self.lock().play(animation);
    }
}
