use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  #[error("key not found / 键不存在")]
  NotFound,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
