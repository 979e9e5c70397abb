//! Non-destructive ascending iteration
//! 非破坏性的升序迭代

use std::{cmp::Ordering, collections::BinaryHeap, iter::FusedIterator};

use crate::{Shared, entry::order};

/// Borrowed view of one live entry
/// 某个存活条目的借用视图
pub(crate) struct Pending<'a, K, W> {
  pub key: &'a K,
  pub seq: u64,
  pub weak: &'a W,
}

impl<K, W> Eq for Pending<'_, K, W> where K: PartialOrd {}

impl<K, W> PartialEq for Pending<'_, K, W>
where
  K: PartialOrd,
{
  fn eq(&self, other: &Self) -> bool {
    self.seq == other.seq
  }
}

impl<K, W> PartialOrd for Pending<'_, K, W>
where
  K: PartialOrd,
{
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl<K, W> Ord for Pending<'_, K, W>
where
  K: PartialOrd,
{
  fn cmp(&self, other: &Self) -> Ordering {
    // BinaryHeap pops greatest, reverse for min first
    // BinaryHeap 弹出最大值，反序得到最小优先
    order((other.key, other.seq), (self.key, self.seq))
  }
}

/// Live items in non-decreasing key order, ties in insertion order.
///
/// Runs over a private heap of borrowed entries, the set itself is never
/// touched. Items whose owner is dropped mid-iteration are skipped.
///
/// 按键非递减顺序产出存活元素，同键按插入顺序。
/// 在借用条目组成的私有堆上运行，不修改集合本身；迭代中被释放的元素会被跳过。
pub struct Sorted<'a, P: Shared, K> {
  pub(crate) pending: BinaryHeap<Pending<'a, K, P::Weak>>,
}

impl<P, K> Iterator for Sorted<'_, P, K>
where
  P: Shared,
  K: PartialOrd,
{
  type Item = P;

  fn next(&mut self) -> Option<P> {
    loop {
      let next = self.pending.pop()?;
      if let Some(item) = P::revive(next.weak) {
        return Some(item);
      }
    }
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (0, Some(self.pending.len()))
  }
}

impl<P, K> FusedIterator for Sorted<'_, P, K>
where
  P: Shared,
  K: PartialOrd,
{
}
