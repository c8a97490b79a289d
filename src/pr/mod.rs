//! Pull Request 规范化
//!
//! 不同平台（GitHub、Bitbucket Server）的 PR 结构不同，
//! 这里统一转换为 [`PullRequest`]，供消息组装使用。

pub mod normalizer;
pub mod provider;

pub use normalizer::normalize;
pub use provider::PrProvider;

/// PR 编号：GitHub 为整数，部分平台为字符串
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrNumber {
    Int(i64),
    Text(String),
}

impl std::fmt::Display for PrNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrNumber::Int(n) => write!(f, "{}", n),
            PrNumber::Text(s) => write!(f, "{}", s),
        }
    }
}

/// PR 作者
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrAuthor {
    pub login: String,
    /// 作者主页链接；Bitbucket Server 下为 `mailto: <email>` 或空字符串
    pub profile_url: String,
}

/// 规范化后的 PR 描述
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequest {
    pub number: PrNumber,
    pub title: String,
    /// PR 描述，可能为空
    pub body: String,
    pub url: String,
    pub author: PrAuthor,
}
