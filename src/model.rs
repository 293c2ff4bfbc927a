//! The workflow-model boundary: descriptors and the capability contract.
//!
//! The layout engine does not author or parse workflows. It consumes anything
//! that can expose an ordered sequence of states and an ordered sequence of
//! transitions — the [`WorkflowModel`] trait. [`Workflow`] is an owned
//! implementation with a chainable builder for callers (and tests) that
//! assemble workflows in code.

#[cfg(not(feature = "std"))]
use alloc::{format, string::String, vec::Vec};

/// Width used for a state that declares none.
pub const DEFAULT_STATE_WIDTH: f64 = 120.0;
/// Height used for a state that declares none.
pub const DEFAULT_STATE_HEIGHT: f64 = 60.0;

/// One state of the workflow graph, as declared by the model.
///
/// `width` and `height` are optional; layout resolves them against
/// [`DEFAULT_STATE_WIDTH`] / [`DEFAULT_STATE_HEIGHT`] via [`extent`](Self::extent).
#[derive(Clone, Debug, PartialEq)]
pub struct StateDescriptor {
    /// Unique state id. Identity integrity is the model's responsibility.
    pub id: String,
    /// Display text.
    pub label: String,
    /// Declared width, if any.
    pub width: Option<f64>,
    /// Declared height, if any.
    pub height: Option<f64>,
}

impl StateDescriptor {
    /// Create a descriptor with default extents.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            width: None,
            height: None,
        }
    }

    /// Set explicit width and height.
    pub fn sized(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// The (width, height) extent with defaults applied.
    pub fn extent(&self) -> (f64, f64) {
        (
            self.width.unwrap_or(DEFAULT_STATE_WIDTH),
            self.height.unwrap_or(DEFAULT_STATE_HEIGHT),
        )
    }
}

/// One directed transition of the workflow graph.
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionDescriptor {
    /// Source state id.
    pub source: String,
    /// Target state id.
    pub target: String,
    /// Display text; layout substitutes the empty string when absent.
    pub label: Option<String>,
}

impl TransitionDescriptor {
    /// Create an unlabeled transition.
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            label: None,
        }
    }

    /// Set the display label.
    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Read-only capability contract over a workflow description.
///
/// Layout computation is a pure function of these two sequences (plus the
/// orientation chosen at construction). Iteration order is the model's order
/// and determines placement order and synthesized transition ids.
pub trait WorkflowModel {
    /// The model's states, in declaration order.
    fn states(&self) -> &[StateDescriptor];
    /// The model's transitions, in declaration order.
    fn transitions(&self) -> &[TransitionDescriptor];
}

/// An owned workflow description with a chainable builder.
///
/// # Example
///
/// ```
/// use flowlayout::{Workflow, WorkflowModel};
///
/// let workflow = Workflow::new()
///     .state("draft")
///     .state("review")
///     .labeled_transition("state_id1", "state_id2", "submit");
///
/// assert_eq!(workflow.states().len(), 2);
/// assert_eq!(workflow.states()[0].id, "state_id1");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Workflow {
    states: Vec<StateDescriptor>,
    transitions: Vec<TransitionDescriptor>,
}

impl Workflow {
    /// Create an empty workflow.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a state with a synthesized id `state_id<N>` (1-based) and
    /// default extents.
    pub fn state(mut self, label: impl Into<String>) -> Self {
        let id = format!("state_id{}", self.states.len() + 1);
        self.states.push(StateDescriptor::new(id, label));
        self
    }

    /// Append a state with a synthesized id and explicit extents.
    pub fn state_sized(mut self, label: impl Into<String>, width: f64, height: f64) -> Self {
        let id = format!("state_id{}", self.states.len() + 1);
        self.states
            .push(StateDescriptor::new(id, label).sized(width, height));
        self
    }

    /// Append an explicit state descriptor.
    pub fn with_state(mut self, state: StateDescriptor) -> Self {
        self.states.push(state);
        self
    }

    /// Append an unlabeled transition between two state ids.
    pub fn transition(mut self, source: impl Into<String>, target: impl Into<String>) -> Self {
        self.transitions.push(TransitionDescriptor::new(source, target));
        self
    }

    /// Append a labeled transition between two state ids.
    pub fn labeled_transition(
        mut self,
        source: impl Into<String>,
        target: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        self.transitions
            .push(TransitionDescriptor::new(source, target).labeled(label));
        self
    }

    /// Append an explicit transition descriptor.
    pub fn with_transition(mut self, transition: TransitionDescriptor) -> Self {
        self.transitions.push(transition);
        self
    }
}

impl WorkflowModel for Workflow {
    fn states(&self) -> &[StateDescriptor] {
        &self.states
    }

    fn transitions(&self) -> &[TransitionDescriptor] {
        &self.transitions
    }
}
