use super::easing::{lerp, Ease};
use smallvec::SmallVec;
use std::fmt::Write;

/// Index of an element registered with a [`TweenSet`].
pub type Handle = usize;
/// Identifies the group of channel tweens started by one `to`/`from_to` call.
pub type TweenId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    X,
    Y,
    Scale,
    RotationX,
    RotationY,
    Opacity,
    /// Scroll-driven vertical offset, summed into `y` when rendered.
    ParallaxY,
}

pub type Props = SmallVec<[(Channel, f32); 4]>;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub rotation_x: f32,
    pub rotation_y: f32,
    pub opacity: f32,
    pub parallax_y: f32,
    pub perspective: Option<f32>,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale: 1.0,
            rotation_x: 0.0,
            rotation_y: 0.0,
            opacity: 1.0,
            parallax_y: 0.0,
            perspective: None,
        }
    }
}

impl Transform {
    pub fn get(&self, channel: Channel) -> f32 {
        match channel {
            Channel::X => self.x,
            Channel::Y => self.y,
            Channel::Scale => self.scale,
            Channel::RotationX => self.rotation_x,
            Channel::RotationY => self.rotation_y,
            Channel::Opacity => self.opacity,
            Channel::ParallaxY => self.parallax_y,
        }
    }

    pub fn set(&mut self, channel: Channel, value: f32) {
        match channel {
            Channel::X => self.x = value,
            Channel::Y => self.y = value,
            Channel::Scale => self.scale = value,
            Channel::RotationX => self.rotation_x = value,
            Channel::RotationY => self.rotation_y = value,
            Channel::Opacity => self.opacity = value,
            Channel::ParallaxY => self.parallax_y = value,
        }
    }

    /// CSS `transform` value for the current state.
    pub fn to_css(&self) -> String {
        let mut css = String::with_capacity(96);
        if let Some(p) = self.perspective {
            _ = write!(css, "perspective({p}px) ");
        }
        _ = write!(
            css,
            "translate3d({:.2}px, {:.2}px, 0px) rotateX({:.2}deg) rotateY({:.2}deg) scale({:.4})",
            self.x,
            self.y + self.parallax_y,
            self.rotation_x,
            self.rotation_y,
            self.scale
        );
        css
    }

    pub fn opacity_css(&self) -> String {
        format!("{:.3}", self.opacity.clamp(0.0, 1.0))
    }
}

/// One numeric channel animating towards `to`.
///
/// A tween without an explicit start value captures the element's value the
/// first time it becomes active, after its delay has elapsed.
#[derive(Clone, Debug)]
pub struct Tween {
    pub channel: Channel,
    pub from: Option<f32>,
    pub to: f32,
    pub delay: f32,
    pub duration: f32,
    pub elapsed: f32,
    pub ease: Ease,
}

impl Tween {
    pub fn new(channel: Channel, to: f32, duration: f32, ease: Ease) -> Self {
        Self {
            channel,
            from: None,
            to,
            delay: 0.0,
            duration,
            elapsed: 0.0,
            ease,
        }
    }

    pub fn from_value(mut self, from: f32) -> Self {
        self.from = Some(from);
        self
    }

    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    pub fn is_active(&self) -> bool {
        self.elapsed >= self.delay
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.delay + self.duration
    }

    /// Eased value at the current elapsed time, given the value the element
    /// holds right now (used as the start when none was captured yet).
    pub fn value(&self, current: f32) -> f32 {
        let from = self.from.unwrap_or(current);
        if !self.is_active() {
            return from;
        }
        if self.duration <= 0.0 {
            return self.to;
        }
        let t = ((self.elapsed - self.delay) / self.duration).min(1.0);
        if t >= 1.0 {
            return self.to;
        }
        lerp(from, self.to, self.ease.apply(t))
    }

    /// Advance by `dt` seconds and return the new value, or `None` while
    /// still waiting out the delay.
    pub fn step(&mut self, dt: f32, current: f32) -> Option<f32> {
        self.elapsed += dt.max(0.0);
        if !self.is_active() {
            return None;
        }
        if self.from.is_none() {
            self.from = Some(current);
        }
        if self.is_finished() {
            return Some(self.to);
        }
        Some(self.value(current))
    }
}

#[derive(Debug)]
struct Running {
    handle: Handle,
    id: TweenId,
    tween: Tween,
}

#[derive(Debug, Default)]
pub struct StepReport {
    /// Elements whose transform changed this step.
    pub dirty: SmallVec<[Handle; 8]>,
    /// Tween groups whose every channel reached its end value.
    pub completed: SmallVec<[TweenId; 4]>,
    /// Tween groups whose channels were all overwritten before finishing.
    pub killed: SmallVec<[TweenId; 4]>,
}

/// Element transforms plus the tweens currently driving them.
///
/// Starting a tween on a channel that is already animating replaces the old
/// tween for that channel; the new one continues from the current value.
#[derive(Debug, Default)]
pub struct TweenSet {
    slots: Vec<Option<Transform>>,
    running: Vec<Running>,
    next_id: TweenId,
    killed: SmallVec<[TweenId; 4]>,
}

impl TweenSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, initial: Transform) -> Handle {
        if let Some(free) = self.slots.iter().position(Option::is_none) {
            self.slots[free] = Some(initial);
            return free;
        }
        self.slots.push(Some(initial));
        self.slots.len() - 1
    }

    /// Drop an element and any tweens still targeting it.
    pub fn unregister(&mut self, handle: Handle) {
        if let Some(slot) = self.slots.get_mut(handle) {
            *slot = None;
        }
        self.running.retain(|r| r.handle != handle);
    }

    pub fn transform(&self, handle: Handle) -> Option<&Transform> {
        self.slots.get(handle).and_then(Option::as_ref)
    }

    pub fn is_idle(&self) -> bool {
        self.running.is_empty()
    }

    /// Write a value immediately, cancelling any tween on that channel.
    pub fn set(&mut self, handle: Handle, channel: Channel, value: f32) -> bool {
        self.kill_channel(handle, channel);
        match self.slots.get_mut(handle).and_then(Option::as_mut) {
            Some(t) => {
                t.set(channel, value);
                true
            }
            None => false,
        }
    }

    pub fn set_perspective(&mut self, handle: Handle, perspective: Option<f32>) {
        if let Some(t) = self.slots.get_mut(handle).and_then(Option::as_mut) {
            t.perspective = perspective;
        }
    }

    /// Animate the listed channels from their current values.
    pub fn to(
        &mut self,
        handle: Handle,
        props: &[(Channel, f32)],
        duration: f32,
        ease: Ease,
        delay: f32,
    ) -> Option<TweenId> {
        self.transform(handle)?;
        let id = self.allocate_id();
        for &(channel, to) in props {
            self.kill_channel(handle, channel);
            self.running.push(Running {
                handle,
                id,
                tween: Tween::new(channel, to, duration, ease).with_delay(delay),
            });
        }
        Some(id)
    }

    /// Render the start state now, then animate to the end state.
    pub fn from_to(
        &mut self,
        handle: Handle,
        from: &[(Channel, f32)],
        to: &[(Channel, f32)],
        duration: f32,
        ease: Ease,
        delay: f32,
    ) -> Option<TweenId> {
        self.transform(handle)?;
        for &(channel, value) in from {
            self.set(handle, channel, value);
        }
        let id = self.allocate_id();
        for &(channel, target) in to {
            self.kill_channel(handle, channel);
            let start = from
                .iter()
                .find(|(c, _)| *c == channel)
                .map(|&(_, v)| v);
            let mut tween = Tween::new(channel, target, duration, ease).with_delay(delay);
            if let Some(start) = start {
                tween = tween.from_value(start);
            }
            self.running.push(Running { handle, id, tween });
        }
        Some(id)
    }

    pub fn step(&mut self, dt: f32) -> StepReport {
        let mut report = StepReport::default();
        let slots = &mut self.slots;
        for r in self.running.iter_mut() {
            let Some(t) = slots.get_mut(r.handle).and_then(Option::as_mut) else {
                continue;
            };
            let current = t.get(r.tween.channel);
            if let Some(v) = r.tween.step(dt, current) {
                t.set(r.tween.channel, v);
                if !report.dirty.contains(&r.handle) {
                    report.dirty.push(r.handle);
                }
            }
        }

        let mut finished: SmallVec<[TweenId; 4]> = SmallVec::new();
        self.running.retain(|r| {
            if r.tween.is_finished() {
                if !finished.contains(&r.id) {
                    finished.push(r.id);
                }
                false
            } else {
                true
            }
        });
        for id in finished {
            if !self.running.iter().any(|r| r.id == id) {
                report.completed.push(id);
            }
        }
        report.killed = std::mem::take(&mut self.killed);
        report
    }

    fn allocate_id(&mut self) -> TweenId {
        self.next_id += 1;
        self.next_id
    }

    fn kill_channel(&mut self, handle: Handle, channel: Channel) {
        let mut removed: SmallVec<[TweenId; 2]> = SmallVec::new();
        self.running.retain(|r| {
            let hit = r.handle == handle && r.tween.channel == channel;
            if hit {
                removed.push(r.id);
            }
            !hit
        });
        for id in removed {
            if !self.running.iter().any(|r| r.id == id) && !self.killed.contains(&id) {
                self.killed.push(id);
            }
        }
    }
}
