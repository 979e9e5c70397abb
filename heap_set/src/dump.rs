//! HeapSet snapshot
//! HeapSet 快照
//!
//! Only live items cross the boundary, by value. Weak handles never do.
//! 只有存活元素按值导出，弱句柄从不导出。

/// `seq` is the next insertion sequence, `li` holds `(key, seq, item)`
/// `seq` 为下一个插入序号，`li` 为 `(key, seq, item)`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "bitcode", derive(bitcode::Encode, bitcode::Decode))]
pub struct Dump<T, K> {
  pub seq: u64,
  pub li: Vec<(K, u64, T)>,
}

/// Encode snapshot 编码快照
#[cfg(feature = "bitcode")]
#[inline]
pub fn encode<T, K>(dump: &Dump<T, K>) -> Vec<u8>
where
  Dump<T, K>: bitcode::Encode,
{
  bitcode::encode(dump)
}

/// Decode snapshot 解码快照
#[cfg(feature = "bitcode")]
#[inline]
pub fn decode<T, K>(data: &[u8]) -> Result<Dump<T, K>, bitcode::Error>
where
  for<'a> Dump<T, K>: bitcode::Decode<'a>,
{
  bitcode::decode(data)
}
