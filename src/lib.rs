//! gremlin-statement - 编译期检查的 Gremlin 语句构建器
//!
//! 用一串带类型的方法调用拼出 Gremlin 遍历语句，而不是手写字符串：
//! - 每一步都返回与其结果类型（顶点、边、分组）对应的句柄
//! - 句柄只暴露在当前位置合法的步骤
//! - 所有句柄共享同一个只追加的文本缓冲区
//!
//! ```
//! use gremlin_statement::Statement;
//!
//! let added = Statement::new()
//!     .add_v(Some("person"))
//!     .property("name", "Alice")
//!     .property("age", 30);
//! assert_eq!(
//!     added.to_string(),
//!     "g.addV('person').property('name','Alice').property('age',30)"
//! );
//! ```
//!
//! 句柄基于 `Rc`，不能跨线程使用；并发构建时每个线程各自创建 [`Statement`]。

pub mod config;
pub mod error;
pub mod query;
pub mod types;

// 重导出常用类型
pub use config::{Quoting, StatementConfig};
pub use error::{Error, Result};
pub use query::{
    AddedResult, EdgeResult, GroupResult, Statement, Traversal, VertexResult,
};
pub use types::{ByKey, Comparer, ElementId, HasValue, PropertyToken, PropertyValue};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
