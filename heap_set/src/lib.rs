//! Min-heap ordered set over weak handles
//! 基于弱句柄的最小堆有序集合
//!
//! Tracks a working set of items owned elsewhere. The set stores only weak
//! handles, so dropping the last owner silently retires the item: the next
//! `peek`/`pop`/`sorted` skips it instead of failing.
//!
//! 跟踪由外部持有的元素工作集。集合只保存弱句柄，最后一个持有者释放后，
//! 元素会在下次 `peek`/`pop`/`sorted` 时被跳过，而不是报错。
//!
//! ```
//! use std::{convert::Infallible, rc::Rc};
//!
//! use heap_set::{HeapSet, Ident};
//!
//! struct Job {
//!   name: &'static str,
//!   pri: u32,
//! }
//!
//! impl Ident for Job {
//!   type Id = &'static str;
//!
//!   fn id(&self) -> Self::Id {
//!     self.name
//!   }
//! }
//!
//! let mut set: HeapSet<Rc<Job>, u32, _> = HeapSet::new(|j: &Job| Ok::<_, Infallible>(j.pri));
//! let a = Rc::new(Job { name: "a", pri: 2 });
//! let b = Rc::new(Job { name: "b", pri: 1 });
//! set.add(&a).unwrap();
//! set.add(&b).unwrap();
//! assert_eq!(set.pop().unwrap().name, "b");
//!
//! drop(a);
//! assert!(set.pop().is_err());
//! ```
//!
//! # Features
//!
//! - `bitcode`: binary encode/decode of [`Dump`]
//!
//! # 特性
//!
//! - `bitcode`：[`Dump`] 的二进制编解码

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod dump;
mod entry;
pub mod error;
mod heap;
mod set;
mod shared;
mod sorted;

pub use dump::Dump;
pub use error::{Error, Result};
pub use set::HeapSet;
pub use shared::{Ident, Shared};
pub use sorted::Sorted;
