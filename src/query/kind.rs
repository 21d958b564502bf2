//! Result kinds
//!
//! Marker types that tag a [`Traversal`](super::Traversal) with what its last
//! step yields. The tag decides which steps can be chained next; it carries no
//! data of its own.
//!
//! `Root` is the only kind that is not `Clone`, so a source step can only be
//! called on a statement that has no steps yet.

mod private {
    pub trait Sealed {}
}

/// What the current end of a traversal yields.
///
/// Sealed: the grammar only knows the kinds defined here.
pub trait ResultKind: private::Sealed {
    /// Name used in log events and `Debug` output
    const NAME: &'static str;
}

/// Kinds that follow at least one step. Only these take the general steps
/// (`drop`, `dedup`, `count`, `mean`) and can be cloned into aliases.
pub trait Chained: ResultKind {}

/// Kinds whose text can be embedded as the target of `to(...)` / `from(...)`.
pub trait YieldsVertices: ResultKind {}

/// A fresh statement holding only the traversal source. Only source steps
/// (`V`, `E`, `addV`, `addE`) can follow.
#[derive(Debug)]
pub enum Root {}

/// The element just created by `addV`/`addE`, awaiting `property`, `from`/`to`
/// or filter steps.
#[derive(Debug)]
pub enum Added {}

/// The traversal currently yields vertices (or a scalar aggregate over them).
#[derive(Debug)]
pub enum Vertex {}

/// The traversal currently yields edges.
#[derive(Debug)]
pub enum Edge {}

/// The traversal currently yields a grouped map awaiting `by` modulators.
#[derive(Debug)]
pub enum Group {}

impl private::Sealed for Root {}
impl private::Sealed for Added {}
impl private::Sealed for Vertex {}
impl private::Sealed for Edge {}
impl private::Sealed for Group {}

impl ResultKind for Root {
    const NAME: &'static str = "root";
}

impl ResultKind for Added {
    const NAME: &'static str = "added";
}

impl ResultKind for Vertex {
    const NAME: &'static str = "vertex";
}

impl ResultKind for Edge {
    const NAME: &'static str = "edge";
}

impl ResultKind for Group {
    const NAME: &'static str = "group";
}

impl Chained for Added {}
impl Chained for Vertex {}
impl Chained for Edge {}
impl Chained for Group {}

impl YieldsVertices for Added {}
impl YieldsVertices for Vertex {}
