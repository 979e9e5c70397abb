//! Fixed-capacity recency map
//! 固定容量的最近使用映射
//!
//! Touching a key (read or write) moves it to the most-recently-used end.
//! Inserting past capacity evicts exactly one least-recently-used entry.
//! 访问（读或写）键会将其移到最近使用端。
//! 超出容量插入时恰好淘汰一个最久未使用的条目。
//!
//! # Features
//!
//! - `bitcode`: binary encode/decode of [`LruDump`]
//!
//! # 特性
//!
//! - `bitcode`：[`LruDump`] 的二进制编解码

#![cfg_attr(docsrs, feature(doc_cfg))]

mod cache;
pub mod dump;
pub mod error;
mod lru;

pub use cache::Cache;
pub use dump::LruDump;
pub use error::{Error, Result};
pub use lru::Lru;
