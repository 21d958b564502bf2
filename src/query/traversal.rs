//! Typed traversal handles
//!
//! [`Traversal<K>`] is a view over a shared statement buffer, tagged with the
//! [`ResultKind`] of its last step. Each step appends a fragment to the buffer
//! and hands back a view of the kind that step yields, so only steps that are
//! grammatical at the current position can be chained.
//!
//! ```
//! use gremlin_statement::{Comparer, Statement};
//!
//! # fn main() -> Result<(), gremlin_statement::Error> {
//! let query = Statement::new()
//!     .v()
//!     .has_label("person")
//!     .has("age", Comparer::gt(30))
//!     .values(["name"])?;
//! assert_eq!(
//!     query.to_string(),
//!     "g.V().hasLabel('person').has('age',gt(30)).values('name')"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! Steps that are not valid for the current kind do not exist on the view.
//! `limit` is an edge step, so a vertex traversal cannot call it:
//!
//! ```compile_fail
//! use gremlin_statement::Statement;
//!
//! let _ = Statement::new().v().limit(5);
//! ```
//!
//! `values` is a vertex step, so an edge traversal cannot call it:
//!
//! ```compile_fail
//! use gremlin_statement::Statement;
//!
//! let _ = Statement::new().e().values(["weight"]);
//! ```
//!
//! A grouped traversal only accepts `by` modulators and the general steps:
//!
//! ```compile_fail
//! use gremlin_statement::Statement;
//!
//! let _ = Statement::new().v().group().out(None);
//! ```
//!
//! `to` and `from` only embed vertex traversals:
//!
//! ```compile_fail
//! use gremlin_statement::Statement;
//!
//! let edges = Statement::new().e();
//! let _ = Statement::new().v_id("1").add_e(Some("knows")).to(&edges);
//! ```
//!
//! Source steps only follow the bare traversal source, never an added element:
//!
//! ```compile_fail
//! use gremlin_statement::Statement;
//!
//! let _ = Statement::new().add_v(None).e();
//! ```
//!
//! and a fresh statement has to pick a source before any other step:
//!
//! ```compile_fail
//! use gremlin_statement::Statement;
//!
//! let _ = Statement::new().limit(1);
//! ```
//!
//! The root handle cannot be cloned, so no alias can start a second source:
//!
//! ```compile_fail
//! use gremlin_statement::Statement;
//!
//! let root = Statement::new();
//! let _ = root.clone();
//! ```
//!
//! Handles alias one buffer through `Rc` and are confined to the thread that
//! built them:
//!
//! ```compile_fail
//! fn assert_send<T: Send>(_: T) {}
//!
//! assert_send(gremlin_statement::Statement::new());
//! ```

use super::buffer::SharedBuffer;
use super::kind::{Added, Chained, Edge, Group, ResultKind, Root, Vertex, YieldsVertices};
use crate::config::{Quoting, StatementConfig};
use crate::error::{Error, Result};
use crate::types::{ElementId, HasValue, PropertyValue};
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;
use tracing::{debug, trace};

/// A handle on a statement, typed by what its last step yields
pub struct Traversal<K> {
    buffer: SharedBuffer,
    _kind: PhantomData<K>,
}

/// Root handle: a fresh statement holding only the traversal source
pub type Statement = Traversal<Root>;

/// Handle on the element just added by `addV`/`addE`
pub type AddedResult = Traversal<Added>;

/// Handle whose last step yields vertices
pub type VertexResult = Traversal<Vertex>;

/// Handle whose last step yields edges
pub type EdgeResult = Traversal<Edge>;

/// Handle whose last step yields a grouped map
pub type GroupResult = Traversal<Group>;

impl<K: ResultKind> Traversal<K> {
    pub(super) fn from_buffer(buffer: SharedBuffer) -> Self {
        Traversal {
            buffer,
            _kind: PhantomData,
        }
    }

    /// Add a vertex. Follow with `property` steps to set its properties.
    pub fn add_v(self, label: Option<&str>) -> AddedResult {
        self.labeled_step("addV", label)
    }

    /// Add an edge. Follow with `from`/`to` and `property` steps.
    pub fn add_e(self, label: Option<&str>) -> AddedResult {
        self.labeled_step("addE", label)
    }

    // ========================================================================
    // Inspection
    // ========================================================================

    /// Name of the current result kind
    pub fn kind_name(&self) -> &'static str {
        K::NAME
    }

    /// Length of the rendered text in bytes
    pub fn len(&self) -> usize {
        self.buffer.borrow().text().len()
    }

    /// Always false: the text starts with the traversal source
    pub fn is_empty(&self) -> bool {
        self.buffer.borrow().text().is_empty()
    }

    pub fn config(&self) -> StatementConfig {
        self.buffer.borrow().config().clone()
    }

    /// Whether both handles are views of the same underlying statement
    pub fn same_statement<J>(&self, other: &Traversal<J>) -> bool {
        Rc::ptr_eq(&self.buffer, &other.buffer)
    }

    // ========================================================================
    // Fragment helpers
    // ========================================================================

    pub(super) fn quoting(&self) -> Quoting {
        self.buffer.borrow().quoting()
    }

    pub(super) fn dotted_edge_source(&self) -> bool {
        self.buffer.borrow().config().dotted_edge_source
    }

    /// Append `fragment` verbatim and retag the handle
    pub(super) fn push<T: ResultKind>(self, fragment: &str) -> Traversal<T> {
        self.buffer.borrow_mut().append(fragment);
        trace!(step = fragment, kind = T::NAME, "appended step");
        Traversal::from_buffer(self.buffer)
    }

    /// `.step()` or `.step('label')`
    pub(super) fn labeled_step<T: ResultKind>(self, step: &str, label: Option<&str>) -> Traversal<T> {
        let fragment = match label {
            Some(label) => format!(".{}({})", step, self.quoting().quote(label)),
            None => format!(".{}()", step),
        };
        self.push(&fragment)
    }

    /// `.step('arg')`
    pub(super) fn quoted_step<T: ResultKind>(self, step: &str, arg: &str) -> Traversal<T> {
        let fragment = format!(".{}({})", step, self.quoting().quote(arg));
        self.push(&fragment)
    }

    /// `.step(id)` with string ids quoted
    pub(super) fn id_step<T: ResultKind>(self, step: &str, id: ElementId) -> Traversal<T> {
        let fragment = format!(".{}({})", step, id.render(self.quoting()));
        self.push(&fragment)
    }

    /// `.has('name',value)`
    pub(super) fn has_step<T: ResultKind>(self, name: &str, value: HasValue) -> Traversal<T> {
        let quoting = self.quoting();
        let fragment = format!(".has({},{})", quoting.quote(name), value.render(quoting));
        self.push(&fragment)
    }

    /// `.property('name',value)`
    pub(super) fn property_step<T: ResultKind>(
        self,
        name: &str,
        value: PropertyValue,
    ) -> Traversal<T> {
        let quoting = self.quoting();
        let fragment = format!(".property({},{})", quoting.quote(name), value.render(quoting));
        self.push(&fragment)
    }

    /// `.step('a','b',...)`; an empty list is rejected and nothing is appended
    pub(super) fn joined_step<T, I, S>(self, step: &'static str, items: I) -> Result<Traversal<T>>
    where
        T: ResultKind,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let items: Vec<String> = items
            .into_iter()
            .map(|item| item.as_ref().to_string())
            .collect();
        if items.is_empty() {
            debug!(step, "rejected empty argument list");
            return Err(Error::EmptyArgumentList { step });
        }
        let joined = self.quoting().quote_all(&items);
        let fragment = format!(".{}({})", step, joined);
        Ok(self.push(&fragment))
    }

    /// `.step(<nested text>)`, embedding a snapshot of the nested handle
    pub(super) fn embed_step<T, J>(self, step: &str, nested: &Traversal<J>) -> Traversal<T>
    where
        T: ResultKind,
        J: YieldsVertices,
    {
        // Take the snapshot before borrowing our own buffer: `nested` may alias it.
        let inner = nested.to_string();
        let fragment = format!(".{}({})", step, inner);
        self.push(&fragment)
    }
}

// ============================================================================
// General steps
// ============================================================================

impl<K: Chained> Traversal<K> {
    /// Remove the matching elements from the graph
    pub fn drop(self) -> Self {
        self.push(".drop()")
    }

    /// De-duplicate the current results (a.k.a. DISTINCT)
    pub fn dedup(self) -> Self {
        self.push(".dedup()")
    }

    pub fn count(self) -> Self {
        self.push(".count()")
    }

    /// Mean of the current results (a.k.a. AVERAGE)
    pub fn mean(self) -> VertexResult {
        self.push(".mean()")
    }
}

impl<K: Chained> Clone for Traversal<K> {
    /// Another view of the same statement; the buffer is not copied
    fn clone(&self) -> Self {
        Traversal {
            buffer: Rc::clone(&self.buffer),
            _kind: PhantomData,
        }
    }
}

impl<K> fmt::Display for Traversal<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.buffer.borrow().text())
    }
}

impl<K: ResultKind> fmt::Debug for Traversal<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Traversal")
            .field("kind", &K::NAME)
            .field("text", &self.buffer.borrow().text())
            .finish()
    }
}
