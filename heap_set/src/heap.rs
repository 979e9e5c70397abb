//! Binary min-heap primitives over `Vec<Entry>`
//! `Vec<Entry>` 上的二叉最小堆基本操作

use std::cmp::Ordering;

use crate::entry::Entry;

pub(crate) fn sift_up<K: PartialOrd, I, W>(heap: &mut [Entry<K, I, W>], mut i: usize) {
  while i > 0 {
    let parent = (i - 1) / 2;
    if heap[i].rank(&heap[parent]) != Ordering::Less {
      break;
    }
    heap.swap(i, parent);
    i = parent;
  }
}

pub(crate) fn sift_down<K: PartialOrd, I, W>(heap: &mut [Entry<K, I, W>], mut i: usize) {
  let len = heap.len();
  loop {
    let left = 2 * i + 1;
    if left >= len {
      break;
    }
    let right = left + 1;
    let child = if right < len && heap[right].rank(&heap[left]) == Ordering::Less {
      right
    } else {
      left
    };
    if heap[child].rank(&heap[i]) != Ordering::Less {
      break;
    }
    heap.swap(i, child);
    i = child;
  }
}

pub(crate) fn heapify<K: PartialOrd, I, W>(heap: &mut [Entry<K, I, W>]) {
  for i in (0..heap.len() / 2).rev() {
    sift_down(heap, i);
  }
}

/// Remove the root: swap with last, then sift down
/// 移除堆顶：与末尾交换后下沉
pub(crate) fn pop_root<K: PartialOrd, I, W>(heap: &mut Vec<Entry<K, I, W>>) -> Option<Entry<K, I, W>> {
  if heap.is_empty() {
    return None;
  }
  let root = heap.swap_remove(0);
  sift_down(heap, 0);
  Some(root)
}
