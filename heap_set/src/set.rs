//! Heap-ordered set over weak handles
//! 基于弱句柄的堆序集合
//!
//! # Complexity
//! 复杂度
//!
//! - add / pop: O(log n) amortized
//! - contains / remove / discard: O(1), removal leaves a tombstone
//! - len / is_empty: O(n) over registrations, released members are not counted
//! - peek: O(1) amortized, tombstones at the root are popped on the way
//! - sorted: O(n) to start, O(log n) per item
//!
//! Tombstones are entries whose member was removed, re-added, or released by
//! its owner. They are skipped lazily and purged by `compact` or `load`.
//! 墓碑指成员已被删除、重新添加或被持有者释放的条目，惰性跳过，
//! 由 `compact` 或 `load` 清除。

use std::{
  cmp::Ordering, collections::HashMap, convert::Infallible, fmt, marker::PhantomData, ops::Deref,
};

use log::trace;

use crate::{
  Dump, Error, Ident, Result, Shared, Sorted,
  entry::{Entry, Member},
  heap,
  sorted::Pending,
};

pub(crate) type Id<P> = <<P as Deref>::Target as Ident>::Id;
type Slot<P, K> = Entry<K, Id<P>, <P as Shared>::Weak>;

/// Set of externally owned items ordered by a derived sort key
/// 按派生排序键排序、元素由外部持有的集合
///
/// - `P`: owning pointer the caller keeps, e.g. `Rc<T>` / 调用方持有的指针
/// - `K`: sort key / 排序键
/// - `F`: `Fn(&T) -> Result<K, E>` key function / 排序键函数
///
/// Equal keys pop in insertion order.
/// 相同键按插入顺序弹出。
pub struct HeapSet<P, K, F, E = Infallible>
where
  P: Shared,
  P::Target: Ident,
{
  key: F,
  heap: Vec<Slot<P, K>>,
  index: HashMap<Id<P>, Member<P::Weak>>,
  seq: u64,
  _err: PhantomData<fn() -> E>,
}

impl<P, K, F, E> HeapSet<P, K, F, E>
where
  P: Shared,
  P::Target: Ident,
{
  /// Live members, the ones `contains` reports
  /// 存活成员数，与 `contains` 一致
  pub fn len(&self) -> usize {
    self.index.values().filter(|m| P::alive(&m.weak)).count()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    !self.index.values().any(|m| P::alive(&m.weak))
  }

  /// Physical heap length, tombstones included
  /// 堆数组实际长度，包含墓碑
  #[inline(always)]
  pub fn heap_len(&self) -> usize {
    self.heap.len()
  }

  #[inline]
  pub fn contains(&self, item: &P::Target) -> bool {
    self.live_id(&item.id())
  }

  /// Every live item once, unspecified order
  /// 每个存活元素产出一次，顺序不定
  pub fn iter(&self) -> impl Iterator<Item = P> {
    self.index.values().filter_map(|m| P::revive(&m.weak))
  }

  /// Remove if present, return whether it was
  /// 存在则删除，返回是否存在
  pub fn discard(&mut self, item: &P::Target) -> bool {
    let id = item.id();
    if !self.live_id(&id) {
      return false;
    }
    self.index.remove(&id);
    self.reclaim();
    true
  }

  pub fn remove(&mut self, item: &P::Target) -> Result<()> {
    if self.discard(item) {
      Ok(())
    } else {
      Err(Error::NotFound)
    }
  }

  pub fn clear(&mut self) {
    self.heap.clear();
    self.index.clear();
  }

  #[inline]
  fn live_id(&self, id: &Id<P>) -> bool {
    self.index.get(id).is_some_and(|m| P::alive(&m.weak))
  }

  #[inline]
  fn is_live(&self, e: &Slot<P, K>) -> bool {
    self.index.get(&e.id).is_some_and(|m| m.seq == e.seq) && P::alive(&e.weak)
  }

  /// No live member means every slot is a tombstone
  /// 无存活成员则所有槽位都是墓碑
  #[inline]
  fn reclaim(&mut self) {
    if self.is_empty() {
      self.clear();
    }
  }
}

impl<P, K, F, E> HeapSet<P, K, F, E>
where
  P: Shared,
  P::Target: Ident,
  K: PartialOrd,
{
  /// Pop tombstones off the root until a live item surfaces
  /// 弹出堆顶墓碑，直到出现存活元素
  fn settle(&mut self) -> Option<P> {
    while let Some(root) = self.heap.first() {
      if self.index.get(&root.id).is_some_and(|m| m.seq == root.seq) {
        if let Some(item) = P::revive(&root.weak) {
          return Some(item);
        }
        // owner released it
        self.index.remove(&root.id);
      }
      heap::pop_root(&mut self.heap);
    }
    None
  }

  /// Smallest live item, left in place
  /// 最小的存活元素，不移除
  pub fn peek(&mut self) -> Result<P> {
    self.settle().ok_or(Error::NotFound)
  }

  pub fn pop(&mut self) -> Result<P> {
    let item = self.settle().ok_or(Error::NotFound)?;
    if let Some(root) = heap::pop_root(&mut self.heap) {
      self.index.remove(&root.id);
    }
    self.reclaim();
    Ok(item)
  }

  /// Up to `n` smallest live items, ascending
  /// 最多 `n` 个最小的存活元素，升序
  pub fn peekn(&self, n: usize) -> Vec<P> {
    self.sorted().take(n).collect()
  }

  fn max_slot(&self) -> Option<(&Slot<P, K>, P)> {
    self
      .heap
      .iter()
      .filter(|e| self.is_live(e))
      .max_by(|a, b| a.rank(b))
      .and_then(|e| P::revive(&e.weak).map(|item| (e, item)))
  }

  /// Greatest live item, O(n) scan
  /// 最大的存活元素，O(n) 扫描
  pub fn peek_max(&self) -> Result<P> {
    self.max_slot().map(|(_, item)| item).ok_or(Error::NotFound)
  }

  /// Remove the greatest live item, its slot stays as a tombstone
  /// 移除最大的存活元素，其槽位留作墓碑
  pub fn pop_max(&mut self) -> Result<P> {
    let (id, item) = self
      .max_slot()
      .map(|(e, item)| (e.id.clone(), item))
      .ok_or(Error::NotFound)?;
    self.index.remove(&id);
    self.reclaim();
    Ok(item)
  }

  pub fn sorted(&self) -> Sorted<'_, P, K> {
    Sorted {
      pending: self
        .heap
        .iter()
        .filter(|e| self.is_live(e))
        .map(|e| Pending {
          key: &e.key,
          seq: e.seq,
          weak: &e.weak,
        })
        .collect(),
    }
  }

  /// Drop tombstones and dead registrations, then re-heapify
  /// 清除墓碑与失效登记，然后重建堆
  pub fn compact(&mut self) {
    let before = self.heap.len();
    self.index.retain(|_, m| P::alive(&m.weak));
    let index = &self.index;
    self
      .heap
      .retain(|e| index.get(&e.id).is_some_and(|m| m.seq == e.seq) && P::alive(&e.weak));
    heap::heapify(&mut self.heap);
    trace!("heap_set compact {before} -> {}", self.heap.len());
  }

  /// Live items by value with their cached keys
  /// 按值导出存活元素及其缓存的键
  pub fn dump(&self) -> Dump<P::Target, K>
  where
    P::Target: Clone,
    K: Clone,
  {
    Dump {
      seq: self.seq,
      li: self
        .heap
        .iter()
        .filter(|e| self.is_live(e))
        .filter_map(|e| P::revive(&e.weak).map(|item| (e.key.clone(), e.seq, (*item).clone())))
        .collect(),
    }
  }
}

impl<P, K, F, E> HeapSet<P, K, F, E>
where
  P: Shared,
  P::Target: Ident,
  K: PartialOrd,
  F: Fn(&P::Target) -> Result<K, E>,
{
  pub fn new(key: F) -> Self {
    Self {
      key,
      heap: Vec::new(),
      index: HashMap::new(),
      seq: 0,
      _err: PhantomData,
    }
  }

  /// Add an item, `Ok(false)` if an equal item is already live.
  ///
  /// Everything that can fail runs before any mutation: the key function, the
  /// weak handle, and the comparisons along the sift-up path.
  ///
  /// 添加元素，已有相等的存活元素时返回 `Ok(false)`。
  /// 所有可能失败的步骤（排序键、弱句柄、上浮路径比较）都在修改前完成。
  pub fn add(&mut self, item: &P) -> Result<bool, Error<E>> {
    let id = item.id();
    if self.live_id(&id) {
      return Ok(false);
    }
    let key = (self.key)(&**item).map_err(Error::Key)?;
    let weak = P::observe(item).ok_or(Error::InvalidItem)?;
    self.check_path(&key)?;

    let seq = self.seq;
    self.seq = self.seq.saturating_add(1);
    // a dead registration under the same id becomes a tombstone here
    // 同 id 的失效登记在此处变为墓碑
    self.index.insert(
      id.clone(),
      Member {
        seq,
        weak: weak.clone(),
      },
    );
    self.heap.push(Entry { key, seq, id, weak });
    let last = self.heap.len() - 1;
    heap::sift_up(&mut self.heap, last);
    Ok(true)
  }

  /// Replay the comparisons `sift_up` would make for a new tail entry
  /// 重放新尾部条目上浮时会进行的比较
  fn check_path(&self, key: &K) -> Result<(), Error<E>> {
    // self-incomparable, e.g. NaN / 与自身不可比较，如 NaN
    if key.partial_cmp(key).is_none() {
      return Err(Error::NotOrderable);
    }
    let mut i = self.heap.len();
    while i > 0 {
      let parent = (i - 1) / 2;
      match key.partial_cmp(&self.heap[parent].key) {
        None => return Err(Error::NotOrderable),
        Some(Ordering::Less) => i = parent,
        Some(_) => break,
      }
    }
    Ok(())
  }

  /// Rebuild from a snapshot. Returns the set and the new owners of its
  /// items; the caller must keep the owners alive.
  ///
  /// The rebuilt heap holds no tombstones.
  ///
  /// 从快照重建，返回集合及元素的新持有者，调用方需保持持有者存活。
  /// 重建后的堆不含墓碑。
  pub fn load(dump: Dump<P::Target, K>, key: F) -> Result<(Self, Vec<P>)>
  where
    P::Target: Sized,
  {
    let n = dump.li.len();
    let mut owners = Vec::with_capacity(n);
    let mut set = Self::new(key);
    set.heap.reserve(n);
    set.index.reserve(n);
    set.seq = dump.seq;

    for (key, seq, item) in dump.li {
      let owner = P::wrap(item);
      let weak = P::observe(&owner).ok_or(Error::InvalidItem)?;
      let id = owner.id();
      if set.index.contains_key(&id) {
        continue;
      }
      set.seq = set.seq.max(seq.saturating_add(1));
      set.index.insert(
        id.clone(),
        Member {
          seq,
          weak: weak.clone(),
        },
      );
      set.heap.push(Entry { key, seq, id, weak });
      owners.push(owner);
    }
    heap::heapify(&mut set.heap);
    trace!("heap_set load {n} -> {}", set.heap.len());
    Ok((set, owners))
  }
}

impl<P, K, F, E> fmt::Debug for HeapSet<P, K, F, E>
where
  P: Shared,
  P::Target: Ident,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "<HeapSet: {} items>", self.len())
  }
}
