//! 语句构建配置
//!
//! 遍历源名称、字符串字面量的引号处理方式以及 `E()` 入口的分隔符形式

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// 默认遍历源
pub const DEFAULT_SOURCE: &str = "g";

/// 单引号字面量的处理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quoting {
    /// 原样输出，不做任何转义（与已有的下游消费者保持兼容）
    #[default]
    Verbatim,
    /// 转义字面量中的 `\` 和 `'`
    Escaped,
}

impl Quoting {
    /// 把文本包成单引号字面量
    pub fn quote(self, text: &str) -> String {
        match self {
            Quoting::Verbatim => format!("'{}'", text),
            Quoting::Escaped => {
                let mut out = String::with_capacity(text.len() + 2);
                out.push('\'');
                for c in text.chars() {
                    if c == '\\' || c == '\'' {
                        out.push('\\');
                    }
                    out.push(c);
                }
                out.push('\'');
                out
            }
        }
    }

    /// 逐个加引号后以逗号连接，不带空格
    pub fn quote_all<I, S>(self, items: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        items
            .into_iter()
            .map(|item| self.quote(item.as_ref()))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// 语句配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatementConfig {
    /// 遍历源名称
    pub source: String,
    /// 字面量引号处理
    pub quoting: Quoting,
    /// 为 `true` 时 `E()` 入口渲染为 `g.E()`，否则保持 `gE()`
    pub dotted_edge_source: bool,
}

impl Default for StatementConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            quoting: Quoting::Verbatim,
            dotted_edge_source: false,
        }
    }
}

impl StatementConfig {
    /// 从 JSON 文本加载配置，缺省字段取默认值
    pub fn from_json(json: &str) -> Result<Self> {
        let config: StatementConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn with_quoting(mut self, quoting: Quoting) -> Self {
        self.quoting = quoting;
        self
    }

    pub fn with_dotted_edge_source(mut self, dotted: bool) -> Self {
        self.dotted_edge_source = dotted;
        self
    }

    /// 遍历源必须是非空的 ASCII 标识符
    pub fn validate(&self) -> Result<()> {
        let mut chars = self.source.chars();
        let valid = match chars.next() {
            Some(first) => {
                (first.is_ascii_alphabetic() || first == '_')
                    && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            }
            None => false,
        };
        if valid {
            Ok(())
        } else {
            Err(Error::InvalidArgument(format!(
                "遍历源必须是标识符: {:?}",
                self.source
            )))
        }
    }

    pub(crate) fn is_default(&self) -> bool {
        *self == StatementConfig::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_verbatim() {
        assert_eq!(Quoting::Verbatim.quote("name"), "'name'");
        assert_eq!(Quoting::Verbatim.quote("O'Brien"), "'O'Brien'");
    }

    #[test]
    fn test_quote_escaped() {
        assert_eq!(Quoting::Escaped.quote("O'Brien"), r"'O\'Brien'");
        assert_eq!(Quoting::Escaped.quote(r"a\b"), r"'a\\b'");
    }

    #[test]
    fn test_quote_all() {
        assert_eq!(Quoting::Verbatim.quote_all(["a", "b", "c"]), "'a','b','c'");
        assert_eq!(Quoting::Verbatim.quote_all(["solo"]), "'solo'");
    }

    #[test]
    fn test_config_from_json() {
        let config =
            StatementConfig::from_json(r#"{"source": "social", "quoting": "escaped"}"#).unwrap();
        assert_eq!(config.source, "social");
        assert_eq!(config.quoting, Quoting::Escaped);
        assert!(!config.dotted_edge_source);

        let config = StatementConfig::from_json("{}").unwrap();
        assert!(config.is_default());
    }

    #[test]
    fn test_config_rejects_bad_source() {
        let err = StatementConfig::from_json(r#"{"source": ""}"#).unwrap_err();
        assert!(err.is_invalid_argument());

        let err = StatementConfig::default()
            .with_source("g.V()")
            .validate()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_config_rejects_malformed_json() {
        let err = StatementConfig::from_json(r#"{"quoting": "shouting"}"#).unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
    }
}
