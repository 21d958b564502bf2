//! Gremlin 语句构建模块
//!
//! 基于类型状态的流式构建器，只允许拼出语法上合法的遍历链
//!
//! 主要特性:
//! - 结果类型: Root, Added, Vertex, Edge, Group
//! - 所有句柄共享同一个只追加的缓冲区
//! - 非法的步骤组合在编译期被拒绝

mod buffer;
mod kind;
mod steps;
mod traversal;

// 导出结果类型标记
pub use kind::{Added, Chained, Edge, Group, ResultKind, Root, Vertex, YieldsVertices};

// 导出句柄
pub use traversal::{
    AddedResult, EdgeResult, GroupResult, Statement, Traversal, VertexResult,
};
