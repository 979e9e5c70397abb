use std::cmp::Ordering;

/// Heap slot: sort key, insertion sequence, member id, weak handle
/// 堆槽位：排序键、插入序号、成员 id、弱句柄
pub(crate) struct Entry<K, I, W> {
  pub key: K,
  pub seq: u64,
  pub id: I,
  pub weak: W,
}

/// Index record of the live entry for an id
/// 某 id 当前存活条目的索引记录
pub(crate) struct Member<W> {
  pub seq: u64,
  pub weak: W,
}

/// Order by (key, seq). Keys that refuse to compare fall back to seq.
/// 按 (key, seq) 排序，无法比较的键退化为按 seq 排序。
#[inline]
pub(crate) fn order<K: PartialOrd>(a: (&K, u64), b: (&K, u64)) -> Ordering {
  a.0
    .partial_cmp(b.0)
    .unwrap_or(Ordering::Equal)
    .then(a.1.cmp(&b.1))
}

impl<K: PartialOrd, I, W> Entry<K, I, W> {
  #[inline(always)]
  pub fn rank(&self, other: &Self) -> Ordering {
    order((&self.key, self.seq), (&other.key, other.seq))
  }
}
