// File: crates/quadrant-core/src/lib.rs
// Summary: Core library entry point; exports the quadrant chart API.

pub mod axis;
pub mod chart;
pub mod dom;
pub mod error;
pub mod layout;
pub mod reconcile;
pub mod scale;
pub mod svg;
pub mod types;

pub use chart::{QuadrantChart, NODE_MOUSEOUT, NODE_MOUSEOVER};
pub use dom::{Document, Event, NodeId, PointerEvent, PointerKind};
pub use error::{QuadrantError, QuadrantResult};
pub use layout::{Anchor, Annotation, ArtboardLayout};
pub use scale::LinearScale;
pub use types::{ChartConfig, DataPoint, Labels};
