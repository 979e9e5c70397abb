//! Cache trait definition
//! 缓存 trait 定义

use crate::Result;

/// Recency cache operations
/// 最近使用缓存操作
///
/// # Complexity
/// 复杂度
///
/// - get: O(1), touches the key / 刷新键的访问时间
/// - set: O(1) amortized
/// - rm: O(1)
pub trait Cache<K, V> {
  /// Get value by key, `Error::NotFound` on miss
  /// 按键获取值，未命中返回 `Error::NotFound`
  fn get(&mut self, key: &K) -> Result<&V>;

  /// Insert or overwrite, return the evicted entry
  /// 插入或覆盖，返回被淘汰的条目
  fn set(&mut self, key: K, val: V) -> Option<(K, V)>;

  /// Remove by key
  /// 按键删除
  fn rm(&mut self, key: &K) -> Option<V>;
}
