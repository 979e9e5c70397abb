//! Lru snapshot
//! Lru 快照

/// `(cap, entries oldest first)`
/// `(容量, 从旧到新的条目)`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "bitcode", derive(bitcode::Encode, bitcode::Decode))]
pub struct LruDump<K, V> {
  pub cap: u64,
  pub li: Vec<(K, V)>,
}

/// Encode snapshot 编码快照
#[cfg(feature = "bitcode")]
#[inline]
pub fn encode<K, V>(dump: &LruDump<K, V>) -> Vec<u8>
where
  LruDump<K, V>: bitcode::Encode,
{
  bitcode::encode(dump)
}

/// Decode snapshot 解码快照
#[cfg(feature = "bitcode")]
#[inline]
pub fn decode<K, V>(data: &[u8]) -> Result<LruDump<K, V>, bitcode::Error>
where
  for<'a> LruDump<K, V>: bitcode::Decode<'a>,
{
  bitcode::decode(data)
}
