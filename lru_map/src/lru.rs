//! LRU (Least Recently Used) map
//! LRU（最近最少使用）映射
//!
//! # Complexity
//! 复杂度
//!
//! - get: O(1)
//! - set: O(1)
//! - rm: O(1)
//!
//! Based on hashlink::LruCache with linked list for O(1) access order tracking.
//! 基于 hashlink::LruCache，用链表实现 O(1) 访问顺序跟踪。

use std::{borrow::Borrow, hash::Hash};

use hashlink::LruCache;
use log::trace;

use crate::{Cache, Error, LruDump, Result};

/// LRU map with fixed capacity
/// 固定容量的 LRU 映射
///
/// Iteration order is recency order, oldest first.
/// 迭代顺序为最近使用顺序，最旧的在前。
pub struct Lru<K: Hash + Eq, V>(LruCache<K, V>);

impl<K: Hash + Eq, V> Lru<K, V> {
  /// Create with capacity (min 1)
  /// 创建，指定容量（最小 1）
  #[inline(always)]
  pub fn new(cap: usize) -> Self {
    Self(LruCache::new(cap.max(1)))
  }

  #[inline(always)]
  pub fn cap(&self) -> usize {
    self.0.capacity()
  }

  #[inline(always)]
  pub fn len(&self) -> usize {
    self.0.len()
  }

  #[inline(always)]
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  #[inline]
  pub fn contains<Q>(&self, key: &Q) -> bool
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
  {
    self.0.contains_key(key)
  }

  /// Get value and mark the key most recently used
  /// 获取值并标记为最近使用
  #[inline]
  pub fn get<Q>(&mut self, key: &Q) -> Result<&V>
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
  {
    self.0.get(key).ok_or(Error::NotFound)
  }

  /// Read without touching recency
  /// 读取但不更新访问顺序
  #[inline]
  pub fn peek<Q>(&self, key: &Q) -> Option<&V>
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
  {
    self.0.peek(key)
  }

  /// Insert or overwrite, key becomes most recently used.
  /// A new key on a full map evicts the oldest entry, which is returned.
  ///
  /// 插入或覆盖，键成为最近使用。
  /// 已满时插入新键会淘汰最旧条目并返回。
  pub fn set(&mut self, key: K, val: V) -> Option<(K, V)> {
    let evicted = if self.0.len() >= self.0.capacity() && !self.0.contains_key(&key) {
      self.0.remove_lru()
    } else {
      None
    };
    if evicted.is_some() {
      trace!("lru evict, cap {}", self.0.capacity());
    }
    // insert moves an existing key to the back
    // insert 会把已存在的键移到尾部
    self.0.insert(key, val);
    evicted
  }

  #[inline]
  pub fn rm<Q>(&mut self, key: &Q) -> Option<V>
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
  {
    self.0.remove(key)
  }

  #[inline]
  pub fn clear(&mut self) {
    self.0.clear();
  }

  /// Keys, oldest first
  /// 键，最旧的在前
  pub fn keys(&self) -> impl Iterator<Item = &K> {
    self.0.iter().map(|(k, _)| k)
  }

  /// Entries, oldest first
  /// 条目，最旧的在前
  pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
    self.0.iter()
  }

  /// Snapshot as `(cap, entries oldest first)`
  /// 导出为 `(容量, 从旧到新的条目)`
  pub fn dump(&self) -> LruDump<K, V>
  where
    K: Clone,
    V: Clone,
  {
    LruDump {
      cap: self.cap() as u64,
      li: self
        .0
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect(),
    }
  }

  /// Rebuild from a snapshot, recency order is replayed
  /// 从快照重建，按原顺序重放访问
  pub fn load(dump: LruDump<K, V>) -> Self {
    let mut lru = Self::new(dump.cap as usize);
    for (k, v) in dump.li {
      lru.set(k, v);
    }
    lru
  }
}

impl<K: Hash + Eq, V> Cache<K, V> for Lru<K, V> {
  #[inline(always)]
  fn get(&mut self, key: &K) -> Result<&V> {
    Lru::get(self, key)
  }

  #[inline(always)]
  fn set(&mut self, key: K, val: V) -> Option<(K, V)> {
    Lru::set(self, key, val)
  }

  #[inline(always)]
  fn rm(&mut self, key: &K) -> Option<V> {
    Lru::rm(self, key)
  }
}
