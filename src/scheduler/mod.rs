//! Branching event scheduler.
//!
//! A scenario is a tree of [`Step`]s built once at setup time with the fluent
//! [`StepBuilder`] API:
//!
//! ```text
//! scheduler.at(1.0)          anchored step, fires when the clock reaches 1.0
//!     .call(..)              hooks run in registration order
//!     .after(2.0)            child step at parent time + 2.0
//!     .when(predicate)       child sharing the parent time, entered only if
//!                            the predicate holds when the parent fires
//! ```
//!
//! Only anchored steps start out pending. A step's `after` children become
//! pending when it fires, so the subtree of a branch whose predicate was false
//! is never reached. `when` children are not pending at all: their parent
//! evaluates the guard and fires them synchronously.
//!
//! [`Scheduler::update`] repeats "fire every due step" passes until a pass
//! finds nothing due, so zero-offset chains resolve within one call. Hooks
//! get the [`World`] but not the scheduler: the step tree is fixed once the
//! scenario is built, which bounds every cascade.

pub mod actions;
mod step;

use log::debug;

pub use step::StepBuilder;

use crate::ecs::World;
use crate::error::ScenarioError;

/// Action run when a step fires.
pub type Hook = Box<dyn FnOnce(&mut World) -> Result<(), ScenarioError>>;

/// Branch guard, evaluated once when the parent step fires.
pub type Predicate = Box<dyn FnOnce(&World) -> bool>;

/// Index of a step inside its [`Scheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StepId(usize);

enum Action {
    Call(Hook),
    /// Enter a `when` child if its guard holds.
    Branch(StepId),
}

/// Node of the scenario graph.
pub struct Step {
    time: f32,
    actions: Vec<Action>,
    children: Vec<StepId>,
    guard: Option<Predicate>,
    fired: bool,
    /// Created by [`Scheduler::at`] rather than chained from another step.
    anchored: bool,
}

impl Step {
    fn new(time: f32, anchored: bool) -> Self {
        Step {
            time,
            actions: Vec::new(),
            children: Vec::new(),
            guard: None,
            fired: false,
            anchored,
        }
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

/// Scenario clock plus the step arena.
#[derive(Default)]
pub struct Scheduler {
    time: f32,
    steps: Vec<Step>,
    /// Steps waiting for the clock, in the order they became pending.
    pending: Vec<StepId>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current scenario time in seconds.
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Number of steps still waiting for the clock.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Drop every step and rewind the clock.
    pub fn reset(&mut self) {
        self.time = 0.0;
        self.steps.clear();
        self.pending.clear();
    }

    /// The anchored step firing at `time`, created if no pending one exists.
    ///
    /// Calling `at` twice with the same time appends to the same step.
    pub fn at(&mut self, time: f32) -> StepBuilder<'_> {
        let existing = self.pending.iter().copied().find(|id| {
            let step = &self.steps[id.0];
            step.anchored && step.time == time
        });
        let id = match existing {
            Some(id) => id,
            None => {
                let id = self.push_step(Step::new(time, true));
                self.pending.push(id);
                id
            }
        };
        StepBuilder::new(self, id)
    }

    /// Resume building from a step created earlier.
    pub fn step(&mut self, id: StepId) -> StepBuilder<'_> {
        StepBuilder::new(self, id)
    }

    pub fn get(&self, id: StepId) -> Option<&Step> {
        self.steps.get(id.0)
    }

    /// Advance the clock by `dt` and fire every step that is due, including
    /// steps made due by the ones fired during this call.
    ///
    /// Within a pass steps fire in time order, and steps with equal times
    /// fire in the order they became pending. Children made pending by a pass
    /// fire in the next one. Returns the number of steps whose hooks ran.
    pub fn update(&mut self, world: &mut World, dt: f32) -> Result<usize, ScenarioError> {
        self.time += dt;
        let mut fired = 0;
        loop {
            let mut due: Vec<StepId> = self
                .pending
                .iter()
                .copied()
                .filter(|id| self.steps[id.0].time <= self.time)
                .collect();
            if due.is_empty() {
                break;
            }
            due.sort_by(|a, b| self.steps[a.0].time.total_cmp(&self.steps[b.0].time));
            self.pending.retain(|id| !due.contains(id));

            for id in due {
                fired += self.fire(world, id)?;
            }
        }
        Ok(fired)
    }

    fn push_step(&mut self, step: Step) -> StepId {
        self.steps.push(step);
        StepId(self.steps.len() - 1)
    }

    fn child(&mut self, parent: StepId, time: f32) -> StepId {
        let id = self.push_step(Step::new(time, false));
        self.steps[parent.0].children.push(id);
        id
    }

    fn add_action(&mut self, id: StepId, action: Action) {
        self.steps[id.0].actions.push(action);
    }

    /// Run a step's actions, then make its `after` children pending.
    fn fire(&mut self, world: &mut World, id: StepId) -> Result<usize, ScenarioError> {
        let step = &mut self.steps[id.0];
        if step.fired {
            return Ok(0);
        }
        step.fired = true;
        let actions = std::mem::take(&mut step.actions);
        debug!("step {} fires at t={:.2}", id.0, self.time);

        let mut fired = 1;
        for action in actions {
            match action {
                Action::Call(hook) => hook(world)?,
                Action::Branch(child) => {
                    let entered = self.steps[child.0]
                        .guard
                        .take()
                        .map(|guard| guard(world))
                        .unwrap_or(true);
                    if entered {
                        fired += self.fire(world, child)?;
                    } else {
                        debug!("step {} skipped, guard is false", child.0);
                        self.steps[child.0].fired = true;
                    }
                }
            }
        }

        let children = std::mem::take(&mut self.steps[id.0].children);
        self.pending.extend(children);
        Ok(fired)
    }
}
