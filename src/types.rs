//! 步骤参数类型定义
//!
//! 字面量、元素 ID、谓词片段（Comparer）和属性令牌（PropertyToken）

use crate::config::Quoting;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 属性值
///
/// 字符串渲染为单引号字面量，数值和布尔值原样输出。
/// 浮点数使用 Rust 的 `Display`，与区域设置无关，小数点始终是 `.`；
/// 非有限值渲染为 `Double.NaN`、`Double.POSITIVE_INFINITY`、`Double.NEGATIVE_INFINITY`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    String(String),
    Integer(i64),
    Double(f64),
    Boolean(bool),
}

impl PropertyValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyValue::String(_) => "string",
            PropertyValue::Integer(_) => "int",
            PropertyValue::Double(_) => "double",
            PropertyValue::Boolean(_) => "bool",
        }
    }

    pub fn as_string(&self) -> Option<&str> {
        match self {
            PropertyValue::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            PropertyValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// 渲染为 Gremlin 参数文本
    pub fn render(&self, quoting: Quoting) -> String {
        match self {
            PropertyValue::String(v) => quoting.quote(v),
            PropertyValue::Integer(v) => v.to_string(),
            PropertyValue::Double(v) => render_double(*v),
            PropertyValue::Boolean(v) => v.to_string(),
        }
    }
}

fn render_double(v: f64) -> String {
    if v.is_nan() {
        "Double.NaN".to_string()
    } else if v == f64::INFINITY {
        "Double.POSITIVE_INFINITY".to_string()
    } else if v == f64::NEG_INFINITY {
        "Double.NEGATIVE_INFINITY".to_string()
    } else {
        v.to_string()
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Quoting::Verbatim))
    }
}

impl From<String> for PropertyValue {
    fn from(v: String) -> Self {
        PropertyValue::String(v)
    }
}

impl From<&str> for PropertyValue {
    fn from(v: &str) -> Self {
        PropertyValue::String(v.to_string())
    }
}

impl From<i32> for PropertyValue {
    fn from(v: i32) -> Self {
        PropertyValue::Integer(v as i64)
    }
}

impl From<i64> for PropertyValue {
    fn from(v: i64) -> Self {
        PropertyValue::Integer(v)
    }
}

impl From<u32> for PropertyValue {
    fn from(v: u32) -> Self {
        PropertyValue::Integer(v as i64)
    }
}

impl From<f32> for PropertyValue {
    /// 经由 f32 的最短十进制表示转换，`0.1f32` 仍渲染为 `0.1`
    fn from(v: f32) -> Self {
        PropertyValue::Double(v.to_string().parse().unwrap_or(v as f64))
    }
}

impl From<f64> for PropertyValue {
    fn from(v: f64) -> Self {
        PropertyValue::Double(v)
    }
}

impl From<bool> for PropertyValue {
    fn from(v: bool) -> Self {
        PropertyValue::Boolean(v)
    }
}

/// 顶点/边 ID：字符串 ID 加引号，整数 ID 原样输出
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementId {
    Str(String),
    Int(i64),
}

impl ElementId {
    pub fn render(&self, quoting: Quoting) -> String {
        match self {
            ElementId::Str(id) => quoting.quote(id),
            ElementId::Int(id) => id.to_string(),
        }
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        ElementId::Str(id.to_string())
    }
}

impl From<String> for ElementId {
    fn from(id: String) -> Self {
        ElementId::Str(id)
    }
}

impl From<i32> for ElementId {
    fn from(id: i32) -> Self {
        ElementId::Int(id as i64)
    }
}

impl From<i64> for ElementId {
    fn from(id: i64) -> Self {
        ElementId::Int(id)
    }
}

impl From<u32> for ElementId {
    fn from(id: u32) -> Self {
        ElementId::Int(id as i64)
    }
}

/// 谓词片段，例如 `gt(5)`
///
/// 以不带引号的形式嵌入 `has` 步骤。`raw` 文本不做解释；`P` 辅助函数保留参数值，
/// 在追加步骤时按语句的引号配置渲染。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparer(Predicate);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
enum Predicate {
    Raw(String),
    Call {
        name: String,
        args: Vec<PropertyValue>,
    },
}

impl Comparer {
    /// 使用调用方已渲染好的谓词文本
    pub fn raw(text: impl Into<String>) -> Self {
        Comparer(Predicate::Raw(text.into()))
    }

    pub fn eq(value: impl Into<PropertyValue>) -> Self {
        Self::call("eq", vec![value.into()])
    }

    pub fn neq(value: impl Into<PropertyValue>) -> Self {
        Self::call("neq", vec![value.into()])
    }

    pub fn lt(value: impl Into<PropertyValue>) -> Self {
        Self::call("lt", vec![value.into()])
    }

    pub fn lte(value: impl Into<PropertyValue>) -> Self {
        Self::call("lte", vec![value.into()])
    }

    pub fn gt(value: impl Into<PropertyValue>) -> Self {
        Self::call("gt", vec![value.into()])
    }

    pub fn gte(value: impl Into<PropertyValue>) -> Self {
        Self::call("gte", vec![value.into()])
    }

    pub fn inside(low: impl Into<PropertyValue>, high: impl Into<PropertyValue>) -> Self {
        Self::call("inside", vec![low.into(), high.into()])
    }

    pub fn outside(low: impl Into<PropertyValue>, high: impl Into<PropertyValue>) -> Self {
        Self::call("outside", vec![low.into(), high.into()])
    }

    pub fn between(low: impl Into<PropertyValue>, high: impl Into<PropertyValue>) -> Self {
        Self::call("between", vec![low.into(), high.into()])
    }

    /// `within(...)`，至少需要一个值
    pub fn within<I, V>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<PropertyValue>,
    {
        Self::variadic("within", values)
    }

    /// `without(...)`，至少需要一个值
    pub fn without<I, V>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<PropertyValue>,
    {
        Self::variadic("without", values)
    }

    /// 按给定的引号配置渲染；`raw` 文本原样输出
    pub fn render(&self, quoting: Quoting) -> String {
        match &self.0 {
            Predicate::Raw(text) => text.clone(),
            Predicate::Call { name, args } => {
                let args: Vec<String> = args.iter().map(|arg| arg.render(quoting)).collect();
                format!("{}({})", name, args.join(","))
            }
        }
    }

    fn call(name: &str, args: Vec<PropertyValue>) -> Self {
        Comparer(Predicate::Call {
            name: name.to_string(),
            args,
        })
    }

    fn variadic<I, V>(name: &'static str, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<PropertyValue>,
    {
        let args: Vec<PropertyValue> = values.into_iter().map(Into::into).collect();
        if args.is_empty() {
            return Err(Error::EmptyArgumentList { step: name });
        }
        Ok(Self::call(name, args))
    }
}

impl fmt::Display for Comparer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Quoting::Verbatim))
    }
}

/// 属性令牌，例如 `T.label`，不加引号输出
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertyToken(String);

impl PropertyToken {
    pub fn raw(text: impl Into<String>) -> Self {
        PropertyToken(text.into())
    }

    /// `T.id`
    pub fn id() -> Self {
        Self::raw("T.id")
    }

    /// `T.label`
    pub fn label() -> Self {
        Self::raw("T.label")
    }

    /// `T.key`
    pub fn key() -> Self {
        Self::raw("T.key")
    }

    /// `T.value`
    pub fn value() -> Self {
        Self::raw("T.value")
    }

    /// `Column.keys`
    pub fn keys() -> Self {
        Self::raw("Column.keys")
    }

    /// `Column.values`
    pub fn values() -> Self {
        Self::raw("Column.values")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PropertyToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `has` 的第二个参数：字面量或谓词
#[derive(Debug, Clone, PartialEq)]
pub enum HasValue {
    Literal(String),
    Predicate(Comparer),
}

impl HasValue {
    pub fn render(&self, quoting: Quoting) -> String {
        match self {
            HasValue::Literal(v) => quoting.quote(v),
            HasValue::Predicate(p) => p.render(quoting),
        }
    }
}

impl From<&str> for HasValue {
    fn from(v: &str) -> Self {
        HasValue::Literal(v.to_string())
    }
}

impl From<String> for HasValue {
    fn from(v: String) -> Self {
        HasValue::Literal(v)
    }
}

impl From<Comparer> for HasValue {
    fn from(p: Comparer) -> Self {
        HasValue::Predicate(p)
    }
}

/// 分组 `by` 的参数：字段名或属性令牌
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ByKey {
    Field(String),
    Token(PropertyToken),
}

impl ByKey {
    pub fn render(&self, quoting: Quoting) -> String {
        match self {
            ByKey::Field(f) => quoting.quote(f),
            ByKey::Token(t) => t.to_string(),
        }
    }
}

impl From<&str> for ByKey {
    fn from(f: &str) -> Self {
        ByKey::Field(f.to_string())
    }
}

impl From<String> for ByKey {
    fn from(f: String) -> Self {
        ByKey::Field(f)
    }
}

impl From<PropertyToken> for ByKey {
    fn from(t: PropertyToken) -> Self {
        ByKey::Token(t)
    }
}
