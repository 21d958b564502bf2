//! Step sets per result kind
//!
//! Each `impl` block below is the grammar for one kind: the steps it may be
//! followed by and the kind each step yields.
//!
//! | kind   | to vertex                                | to edge                           | stays                                  |
//! |--------|------------------------------------------|-----------------------------------|----------------------------------------|
//! | root   | `v v_id`                                 | `e e_id`                          |                                        |
//! | added  |                                          |                                   | `property to from has has_label has_id as_` |
//! | vertex | all except `out_e in_e group`            | `out_e in_e`                      |                                        |
//! | edge   | `out_v in_v`                             | all except `out_v in_v`           |                                        |
//! | group  |                                          |                                   | `by`                                   |
//!
//! `add_v`/`add_e` lead from every kind to the added kind, and `group` moves
//! vertex handles to the group kind. The general steps (`drop`, `dedup`,
//! `count`, `mean`) live on every kind except root.

use super::buffer::Buffer;
use super::kind::YieldsVertices;
use super::traversal::{
    AddedResult, EdgeResult, GroupResult, Statement, Traversal, VertexResult,
};
use crate::config::StatementConfig;
use crate::error::Result;
use crate::types::{ByKey, ElementId, HasValue, PropertyValue};
use tracing::debug;

// ============================================================================
// Root
// ============================================================================

impl Statement {
    /// Start a statement on the default traversal source `g`
    pub fn new() -> Self {
        Traversal::from_buffer(Buffer::shared(StatementConfig::default()))
    }

    /// Start a statement with a custom source, quoting or edge-source form
    pub fn with_config(config: StatementConfig) -> Result<Self> {
        config.validate()?;
        if !config.is_default() {
            debug!(
                source = %config.source,
                quoting = ?config.quoting,
                dotted_edge_source = config.dotted_edge_source,
                "statement with custom config"
            );
        }
        Ok(Traversal::from_buffer(Buffer::shared(config)))
    }

    /// All vertices: `.V()`
    pub fn v(self) -> VertexResult {
        self.push(".V()")
    }

    /// One vertex: `.V('id')` for string ids, `.V(id)` for integers
    pub fn v_id(self, id: impl Into<ElementId>) -> VertexResult {
        self.id_step("V", id.into())
    }

    /// All edges: `E()`, appended directly after the source (`gE()`) unless the
    /// statement was configured with `dotted_edge_source`
    pub fn e(self) -> EdgeResult {
        let fragment = format!("{}E()", self.edge_separator());
        self.push(&fragment)
    }

    /// One edge: `E('id')`, with the same separator rule as [`Statement::e`]
    pub fn e_id(self, id: impl Into<ElementId>) -> EdgeResult {
        let fragment = format!(
            "{}E({})",
            self.edge_separator(),
            id.into().render(self.quoting())
        );
        self.push(&fragment)
    }

    fn edge_separator(&self) -> &'static str {
        if self.dotted_edge_source() {
            "."
        } else {
            ""
        }
    }
}

impl Default for Statement {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Added element
// ============================================================================

impl AddedResult {
    /// Set a property on the element just added
    pub fn property(self, name: &str, value: impl Into<PropertyValue>) -> AddedResult {
        self.property_step(name, value.into())
    }

    /// Target vertex of the edge being added; `goal` is embedded as it reads now
    pub fn to<K: YieldsVertices>(self, goal: &Traversal<K>) -> AddedResult {
        self.embed_step("to", goal)
    }

    /// Source vertex of the edge being added; `source` is embedded as it reads now
    pub fn from<K: YieldsVertices>(self, source: &Traversal<K>) -> AddedResult {
        self.embed_step("from", source)
    }

    pub fn has(self, name: &str, value: impl Into<HasValue>) -> AddedResult {
        self.has_step(name, value.into())
    }

    pub fn has_label(self, label: &str) -> AddedResult {
        self.quoted_step("hasLabel", label)
    }

    pub fn has_id(self, id: impl Into<ElementId>) -> AddedResult {
        self.id_step("hasId", id.into())
    }

    pub fn as_(self, name: &str) -> AddedResult {
        self.quoted_step("as", name)
    }
}

// ============================================================================
// Vertex
// ============================================================================

impl VertexResult {
    /// Outgoing vertex of the current edge context
    pub fn out_v(self, label: Option<&str>) -> VertexResult {
        self.labeled_step("outV", label)
    }

    /// Incoming vertex of the current edge context
    pub fn in_v(self, label: Option<&str>) -> VertexResult {
        self.labeled_step("inV", label)
    }

    /// Adjacent vertices along outgoing edges
    pub fn out(self, label: Option<&str>) -> VertexResult {
        self.labeled_step("out", label)
    }

    /// Adjacent vertices along incoming edges
    pub fn in_(self, label: Option<&str>) -> VertexResult {
        self.labeled_step("in", label)
    }

    pub fn out_e(self, label: Option<&str>) -> EdgeResult {
        self.labeled_step("outE", label)
    }

    pub fn in_e(self, label: Option<&str>) -> EdgeResult {
        self.labeled_step("inE", label)
    }

    /// Filter by a property: literals are quoted, [`Comparer`](crate::Comparer)s are not
    pub fn has(self, name: &str, value: impl Into<HasValue>) -> VertexResult {
        self.has_step(name, value.into())
    }

    pub fn has_label(self, label: &str) -> VertexResult {
        self.quoted_step("hasLabel", label)
    }

    pub fn has_id(self, id: impl Into<ElementId>) -> VertexResult {
        self.id_step("hasId", id.into())
    }

    /// Strings are quoted; integers, doubles and booleans are rendered bare
    pub fn property(self, name: &str, value: impl Into<PropertyValue>) -> VertexResult {
        self.property_step(name, value.into())
    }

    /// `.values('f1','f2',...)`; fails with
    /// [`Error::EmptyArgumentList`](crate::Error::EmptyArgumentList) when `fields` is empty
    pub fn values<I, S>(self, fields: I) -> Result<VertexResult>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.joined_step("values", fields)
    }

    /// `.select('a','b',...)`; same contract as [`values`](Self::values)
    pub fn select<I, S>(self, names: I) -> Result<VertexResult>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.joined_step("select", names)
    }

    pub fn as_(self, name: &str) -> VertexResult {
        self.quoted_step("as", name)
    }

    pub fn by(self, label: &str) -> VertexResult {
        self.quoted_step("by", label)
    }

    pub fn group(self) -> GroupResult {
        self.push(".group()")
    }
}

// ============================================================================
// Edge
// ============================================================================

impl EdgeResult {
    pub fn to<K: YieldsVertices>(self, goal: &Traversal<K>) -> EdgeResult {
        self.embed_step("to", goal)
    }

    pub fn from<K: YieldsVertices>(self, source: &Traversal<K>) -> EdgeResult {
        self.embed_step("from", source)
    }

    pub fn has_label(self, label: &str) -> EdgeResult {
        self.quoted_step("hasLabel", label)
    }

    pub fn has_id(self, id: impl Into<ElementId>) -> EdgeResult {
        self.id_step("hasId", id.into())
    }

    pub fn has(self, name: &str, value: impl Into<HasValue>) -> EdgeResult {
        self.has_step(name, value.into())
    }

    pub fn property(self, name: &str, value: impl Into<PropertyValue>) -> EdgeResult {
        self.property_step(name, value.into())
    }

    pub fn out_e(self, label: Option<&str>) -> EdgeResult {
        self.labeled_step("outE", label)
    }

    pub fn in_e(self, label: Option<&str>) -> EdgeResult {
        self.labeled_step("inE", label)
    }

    pub fn out_v(self, label: Option<&str>) -> VertexResult {
        self.labeled_step("outV", label)
    }

    pub fn in_v(self, label: Option<&str>) -> VertexResult {
        self.labeled_step("inV", label)
    }

    pub fn limit(self, limit: i64) -> EdgeResult {
        self.push(&format!(".limit({})", limit))
    }
}

// ============================================================================
// Group
// ============================================================================

impl GroupResult {
    /// `.by('field')` for names, `.by(T.label)` for [`PropertyToken`](crate::PropertyToken)s
    pub fn by(self, key: impl Into<ByKey>) -> GroupResult {
        let fragment = format!(".by({})", key.into().render(self.quoting()));
        self.push(&fragment)
    }
}
