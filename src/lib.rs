//! Workflow chart layout computation with orientation and transition routing.
//!
//! Converts an abstract workflow graph (states and directed transitions) into
//! concrete 2-D geometry for a renderer: a center point per state, a connector
//! path and label anchor per transition, and an overall chart size. Pure
//! geometry — no I/O, no rendering, `no_std` compatible (requires `alloc`).
//!
//! # Modules
//!
//! - [`model`] — workflow-model capability contract and descriptors
//! - [`orientation`] — primary-axis selection and name normalization
//! - [`layout`] — state placement, transition routing, chart size
//! - [`geometry`] — `Point` and `Size` primitives
//!
//! # Example
//!
//! ```
//! use flowlayout::{Layout, Orientation, Workflow};
//!
//! let workflow = Workflow::new()
//!     .state("first")
//!     .state("second")
//!     .transition("state_id1", "state_id2");
//!
//! let layout = Layout::from_workflow(&workflow, Orientation::default()).unwrap();
//!
//! assert_eq!(layout.states().len(), 2);
//! assert_eq!(layout.transitions()[0].id, "transition_id1");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod geometry;
pub mod layout;
pub mod model;
pub mod orientation;

// Re-exports: public surface
pub use geometry::{Point, Size};
pub use layout::{
    CHART_MARGIN, GeometryState, GeometryTransition, Layout, LayoutError, STATE_GAP,
    TransitionLabel,
};
pub use model::{
    DEFAULT_STATE_HEIGHT, DEFAULT_STATE_WIDTH, StateDescriptor, TransitionDescriptor, Workflow,
    WorkflowModel,
};
pub use orientation::Orientation;
