//! Syntax tree for mindmark sources
//!
//!     A parse produces a forest: an ordered list of top-level [`Statement`]s. Each
//!     statement holds the elements of its line (terminals and [`Function`] calls) and the
//!     statements indented under it. Every node carries its [`Range`] and the exact source
//!     text it covers.
//!
//!     See [node] for the node model and its canonical rendering, [visitor] for the
//!     traversal protocol and [snapshot] for the serializable view used by the formats.

pub mod error;
pub mod literals;
pub mod node;
pub mod range;
pub mod snapshot;
pub mod visitor;

pub use error::ErrorReason;
pub use literals::{CalendarDate, CalendarDateTime};
pub use node::{Function, Node, NodeKind, QuoteMarker, Statement, Token, TokenKind};
pub use range::{Position, Range};
pub use snapshot::{snapshot_forest, NodeSnapshot, SnapshotBuilder};
pub use visitor::Visitor;
