//! Danger 运行的输入数据
//!
//! Danger 在 JS 里通过全局变量 `danger` / `results` 暴露这些数据；
//! 这里改为显式传入的结构体，由宿主负责填充。

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{Result, SlackError};
use crate::pr::PrProvider;

/// 单条 Danger 违规信息
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// 消息内容（可能包含 markdown）
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
}

impl Violation {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }
}

/// 按类别划分的 review 结果，每个类别内保持插入顺序
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReviewResults {
    #[serde(default, alias = "fails")]
    pub failures: Vec<Violation>,
    #[serde(default)]
    pub warnings: Vec<Violation>,
    #[serde(default, alias = "messages")]
    pub informational: Vec<Violation>,
    /// 原始 markdown 文本
    #[serde(default, alias = "markdowns", deserialize_with = "deserialize_notes")]
    pub notes: Vec<String>,
}

impl ReviewResults {
    /// failures / warnings / informational 是否都为空（不考虑 notes）
    pub fn has_no_violations(&self) -> bool {
        self.failures.is_empty() && self.warnings.is_empty() && self.informational.is_empty()
    }
}

/// Danger 的 markdowns 可能是字符串，也可能是带 message 的对象
#[derive(Deserialize)]
#[serde(untagged)]
enum NoteEntry {
    Text(String),
    Violation(Violation),
}

fn deserialize_notes<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Vec::<NoteEntry>::deserialize(deserializer)?;
    Ok(entries
        .into_iter()
        .map(|entry| match entry {
            NoteEntry::Text(text) => text,
            NoteEntry::Violation(v) => v.message,
        })
        .collect())
}

/// Danger DSL：按 provider 分组的 PR 数据，如 `{"github": {"pr": {...}}}`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct DangerDsl(Value);

impl DangerDsl {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// 取出指定 provider 下的原始 PR JSON
    pub fn pull_request(&self, provider: &PrProvider) -> Result<&Value> {
        self.0
            .get(provider.as_str())
            .and_then(|section| section.get("pr"))
            .filter(|pr| !pr.is_null())
            .ok_or_else(|| SlackError::missing(format!("{}.pr", provider.as_str())))
    }
}
