//! Error definitions
//! 错误定义

use std::convert::Infallible;

use thiserror::Error;

/// `E` is the key function's own error, passed through as `Key`
/// `E` 为排序键函数自身的错误，通过 `Key` 原样传出
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error<E = Infallible> {
  #[error("item not found / 元素不存在")]
  NotFound,

  #[error("item can not be held by a weak handle / 元素无法被弱引用持有")]
  InvalidItem,

  #[error("sort keys are not comparable / 排序键无法比较")]
  NotOrderable,

  #[error("sort key: {0}")]
  Key(E),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
