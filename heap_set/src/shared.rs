//! Owning pointers and item identity
//! 持有型指针与元素身份

use std::{
  hash::Hash,
  ops::Deref,
  rc::{self, Rc},
  sync::{self, Arc},
};

/// Item equality for the membership index
/// 成员索引使用的元素相等性
///
/// Two items with the same id are the same set member.
/// id 相同的两个元素视为同一成员。
pub trait Ident {
  type Id: Hash + Eq + Clone;

  fn id(&self) -> Self::Id;
}

/// Owning pointer that can hand out non-owning handles
/// 可以给出非持有句柄的持有型指针
///
/// The set only ever stores `Weak`, so the caller's owner alone decides
/// how long an item lives.
/// 集合只保存 `Weak`，元素的生命周期完全由调用方决定。
pub trait Shared: Deref + Sized {
  type Weak: Clone;

  /// Non-owning handle, `None` if this item can not be observed
  /// 非持有句柄，元素不可观察时返回 `None`
  fn observe(&self) -> Option<Self::Weak>;

  fn revive(weak: &Self::Weak) -> Option<Self>;

  fn alive(weak: &Self::Weak) -> bool;

  /// New owner for a deserialized item
  /// 为反序列化的元素创建新的持有者
  fn wrap(item: Self::Target) -> Self
  where
    Self::Target: Sized;
}

impl<T> Shared for Rc<T> {
  type Weak = rc::Weak<T>;

  #[inline(always)]
  fn observe(&self) -> Option<Self::Weak> {
    Some(Rc::downgrade(self))
  }

  #[inline(always)]
  fn revive(weak: &Self::Weak) -> Option<Self> {
    weak.upgrade()
  }

  #[inline(always)]
  fn alive(weak: &Self::Weak) -> bool {
    weak.strong_count() != 0
  }

  #[inline(always)]
  fn wrap(item: T) -> Self {
    Rc::new(item)
  }
}

impl<T> Shared for Arc<T> {
  type Weak = sync::Weak<T>;

  #[inline(always)]
  fn observe(&self) -> Option<Self::Weak> {
    Some(Arc::downgrade(self))
  }

  #[inline(always)]
  fn revive(weak: &Self::Weak) -> Option<Self> {
    weak.upgrade()
  }

  #[inline(always)]
  fn alive(weak: &Self::Weak) -> bool {
    weak.strong_count() != 0
  }

  #[inline(always)]
  fn wrap(item: T) -> Self {
    Arc::new(item)
  }
}
