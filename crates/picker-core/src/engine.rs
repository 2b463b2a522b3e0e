use crate::clock::Clock;
use crate::config::{DeparturePolicy, PickerConfig};
use crate::constants::MAX_CATCHUP_TRANSITIONS;
use crate::curve;
use crate::registry::{Membership, TouchId, TouchIds, TouchRegistry};
use crate::scheduler::{Scheduler, Timer, TimerKind};
use crate::state::{Phase, RenderState, SelectionState, SelectionView, TouchView};
use glam::Vec2;
use rand::prelude::*;
use smallvec::SmallVec;
use std::time::Duration;

/// Raw input as delivered by the host, already mapped to surface coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Start(TouchId, Vec2),
    Move(TouchId, Vec2),
    End(TouchId),
    Cancel(TouchId),
}

/// Uniform pick over `ids`; `None` only when there is nothing to pick from.
pub fn select_random<R: Rng + ?Sized>(ids: &[TouchId], rng: &mut R) -> Option<TouchId> {
    ids.choose(rng).copied()
}

/// Timed selection state machine over a [`TouchRegistry`].
///
/// Driven cooperatively: the host applies input events as they arrive and
/// calls [`tick`](Self::tick) once per frame. Every delayed transition goes
/// through the single phase-advance slot of the [`Scheduler`], so superseded
/// timers are cancelled before they can fire.
pub struct SelectionEngine<C: Clock> {
    config: PickerConfig,
    clock: C,
    rng: StdRng,
    registry: TouchRegistry,
    scheduler: Scheduler,
    phase: Phase,
    phase_started: Duration,
    selected: Option<TouchId>,
    cycle_step: u32,
    rounds: u64,
}

impl<C: Clock> SelectionEngine<C> {
    pub fn new(config: PickerConfig, clock: C) -> Self {
        Self::with_rng(config, clock, StdRng::from_entropy())
    }

    pub fn with_seed(config: PickerConfig, clock: C, seed: u64) -> Self {
        Self::with_rng(config, clock, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: PickerConfig, clock: C, rng: StdRng) -> Self {
        let phase_started = clock.now();
        Self {
            config,
            clock,
            rng,
            registry: TouchRegistry::new(),
            scheduler: Scheduler::new(),
            phase: Phase::Idle,
            phase_started,
            selected: None,
            cycle_step: 0,
            rounds: 0,
        }
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn registry(&self) -> &TouchRegistry {
        &self.registry
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn selected_id(&self) -> Option<TouchId> {
        self.selected
    }

    /// Completed random picks since construction.
    pub fn rounds(&self) -> u64 {
        self.rounds
    }

    /// Number of pending phase-advance timers (never more than one).
    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending_count()
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.scheduler.pending().map(|t| t.due)
    }

    /// Whether intensity is currently changing frame to frame.
    pub fn is_animating(&self) -> bool {
        self.scheduler.animating()
    }

    pub fn apply(&mut self, event: InputEvent) {
        self.apply_batch(&[event]);
    }

    /// Apply every registry mutation in `events`, then evaluate transitions once.
    pub fn apply_batch(&mut self, events: &[InputEvent]) {
        let now = self.clock.now();
        let mut changes: SmallVec<[Membership; 8]> = SmallVec::new();
        for ev in events {
            match *ev {
                InputEvent::Start(id, pos) => changes.extend(self.registry.upsert(id, pos, now)),
                InputEvent::Move(id, pos) => {
                    self.registry.update(id, pos, now);
                }
                InputEvent::End(id) | InputEvent::Cancel(id) => {
                    changes.extend(self.registry.remove(id))
                }
            }
        }
        self.on_membership(&changes, now);
    }

    /// Advance the machine to the clock's current time.
    pub fn tick(&mut self) {
        let now = self.clock.now();
        if let Some(threshold) = self.config.stale_threshold() {
            let gone = self.registry.prune_stale(now, threshold);
            if !gone.is_empty() {
                log::warn!("[picker] dropped {} stale touch(es)", gone.len());
                self.on_membership(&gone, now);
            }
        }
        if self.backlog(now) > curve::round_duration(&self.config) {
            self.resync(now);
        }
        for _ in 0..MAX_CATCHUP_TRANSITIONS {
            match self.scheduler.take_due(now) {
                Some(timer) => self.fire(timer),
                None => break,
            }
        }
        if self.phase == Phase::Selected
            && now.saturating_sub(self.phase_started) >= curve::blink_window(&self.config)
        {
            self.scheduler.stop_animation();
        }
    }

    fn backlog(&self, now: Duration) -> Duration {
        self.scheduler
            .pending()
            .map_or(Duration::ZERO, |t| now.saturating_sub(t.due))
    }

    // A stall longer than a whole round (a backgrounded tab, say) would only
    // replay rounds nobody saw. Land where the round would have ended instead.
    fn resync(&mut self, now: Duration) {
        log::warn!(
            "[picker] {}ms behind, skipping missed rounds",
            self.backlog(now).as_millis()
        );
        if self.registry.is_empty() || !self.config.auto_repeat {
            self.go_idle(now);
        } else {
            self.arm(now);
        }
    }

    /// Return to Idle, dropping the selection and every pending timer.
    pub fn reset(&mut self) {
        if self.config.reset_clears_touches {
            self.registry.clear();
        }
        let now = self.clock.now();
        self.go_idle(now);
        log::info!("[picker] reset ({} touches kept)", self.registry.len());
    }

    /// Reset and forget every touch.
    pub fn clear_all(&mut self) {
        self.registry.clear();
        let now = self.clock.now();
        self.go_idle(now);
        log::info!("[picker] cleared");
    }

    pub fn intensity(&self) -> f32 {
        let now = self.clock.now();
        self.intensity_at(now)
    }

    fn intensity_at(&self, now: Duration) -> f32 {
        curve::intensity(
            self.phase,
            now.saturating_sub(self.phase_started),
            &self.config,
        )
    }

    pub fn selection_state(&self) -> SelectionState {
        SelectionState {
            phase: self.phase,
            selected_id: self.selected,
            intensity: self.intensity(),
        }
    }

    pub fn render_state(&self) -> RenderState {
        let now = self.clock.now();
        let touches = self
            .registry
            .snapshot()
            .into_iter()
            .map(|(id, position)| TouchView { id, position })
            .collect();
        let selection = self
            .selected
            .filter(|id| self.phase.is_highlighted() && self.registry.contains(*id))
            .map(|id| SelectionView {
                id,
                intensity: self.intensity_at(now),
            });
        RenderState {
            phase: self.phase,
            touches,
            selection,
        }
    }

    // ---------------- transitions ----------------

    fn on_membership(&mut self, changes: &[Membership], now: Duration) {
        let mut departed = TouchIds::new();
        let mut arrived = false;
        for change in changes {
            match *change {
                Membership::FirstArrival(_) | Membership::Arrival(_) => arrived = true,
                Membership::Departure { id, .. } => departed.push(id),
            }
        }
        if !departed.is_empty() {
            self.on_departure(&departed, now);
        }
        if arrived && self.phase == Phase::Idle && !self.registry.is_empty() {
            self.arm(now);
        }
    }

    fn on_departure(&mut self, departed: &[TouchId], now: Duration) {
        if self.registry.is_empty() {
            if self.phase != Phase::Idle {
                self.go_idle(now);
            }
            return;
        }
        let lost_selected = self.selected.is_some_and(|s| departed.contains(&s));
        let policy = self.config.departure_policy;
        match self.phase {
            Phase::Idle | Phase::Cooldown => {}
            Phase::Armed => {
                if policy == DeparturePolicy::Rearm {
                    log::debug!("[picker] departure while armed, restarting dwell");
                    self.arm(now);
                }
            }
            Phase::Cycling => match policy {
                DeparturePolicy::Rearm => {
                    log::debug!("[picker] departure while cycling, re-arming");
                    self.arm(now);
                }
                DeparturePolicy::Keep => {
                    if lost_selected {
                        self.selected = self.highlight_at(self.cycle_step);
                    }
                }
            },
            Phase::Selected | Phase::Fading => {
                if lost_selected {
                    log::info!("[picker] selected touch left, re-arming");
                    self.arm(now);
                }
            }
        }
    }

    fn fire(&mut self, timer: Timer) {
        let at = timer.due;
        match timer.kind {
            TimerKind::Dwell => {
                if self.registry.is_empty() {
                    self.go_idle(at);
                } else if self.config.cycling_active() {
                    self.start_cycling(at);
                } else {
                    self.select(at);
                }
            }
            TimerKind::CycleStep => {
                self.cycle_step += 1;
                if self.cycle_step >= self.config.cycling_steps {
                    self.select(at);
                } else {
                    self.selected = self.highlight_at(self.cycle_step);
                    self.scheduler.schedule(
                        TimerKind::CycleStep,
                        at + self.config.cycling_step_delay(),
                    );
                }
            }
            TimerKind::Hold => {
                self.set_phase(Phase::Fading, at);
                self.scheduler
                    .schedule(TimerKind::FadeOut, at + curve::fade_duration(&self.config));
            }
            TimerKind::FadeOut => self.finish_fade(at),
            TimerKind::Cooldown => {
                if self.registry.is_empty() {
                    self.go_idle(at);
                } else {
                    self.arm(at);
                }
            }
        }
    }

    fn arm(&mut self, at: Duration) {
        self.scheduler.cancel_all();
        self.selected = None;
        self.set_phase(Phase::Armed, at);
        self.scheduler
            .schedule(TimerKind::Dwell, at + self.config.dwell_delay());
    }

    fn go_idle(&mut self, at: Duration) {
        self.scheduler.cancel_all();
        self.selected = None;
        self.cycle_step = 0;
        self.set_phase(Phase::Idle, at);
    }

    fn start_cycling(&mut self, at: Duration) {
        self.cycle_step = 0;
        self.selected = self.highlight_at(0);
        self.set_phase(Phase::Cycling, at);
        self.scheduler
            .schedule(TimerKind::CycleStep, at + self.config.cycling_step_delay());
    }

    fn highlight_at(&self, step: u32) -> Option<TouchId> {
        let ids = self.registry.ids();
        if ids.is_empty() {
            return None;
        }
        Some(ids[step as usize % ids.len()])
    }

    fn select(&mut self, at: Duration) {
        let ids = self.registry.ids();
        match select_random(&ids, &mut self.rng) {
            Some(id) => {
                self.selected = Some(id);
                self.rounds += 1;
                log::info!("[picker] selected {:?} among {} touch(es)", id, ids.len());
                self.set_phase(Phase::Selected, at);
                self.scheduler
                    .schedule(TimerKind::Hold, at + self.config.hold_duration());
            }
            None => self.go_idle(at),
        }
    }

    fn finish_fade(&mut self, at: Duration) {
        self.selected = None;
        if self.registry.is_empty() || !self.config.auto_repeat {
            self.go_idle(at);
            return;
        }
        match self.config.cooldown() {
            Some(cooldown) => {
                self.scheduler.cancel_all();
                self.set_phase(Phase::Cooldown, at);
                self.scheduler.schedule(TimerKind::Cooldown, at + cooldown);
            }
            None => self.arm(at),
        }
    }

    fn set_phase(&mut self, phase: Phase, at: Duration) {
        if phase != self.phase {
            log::debug!(
                "[picker] {:?} -> {:?} at {}ms",
                self.phase,
                phase,
                at.as_millis()
            );
        }
        self.phase = phase;
        self.phase_started = at;
        let animated = match phase {
            Phase::Cycling | Phase::Fading => true,
            Phase::Selected => self.config.blink_count > 0,
            Phase::Idle | Phase::Armed | Phase::Cooldown => false,
        };
        if animated {
            self.scheduler.start_animation();
        } else {
            self.scheduler.stop_animation();
        }
    }
}
