//! # 二进制读取器
//!
//! 顺序游标 + 小端定长整数读取。所有读取先做边界检查，
//! 越界统一返回 `DecodeError::TruncatedInput`，不会 panic。

use super::DecodeError;

/// 只读字节缓冲上的顺序游标。
///
/// 只修改自身的 `pos`，底层缓冲借用且从不改写。
pub(crate) struct ByteReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// 当前游标位置（绝对偏移）。
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    /// 跳转到绝对偏移。允许恰好落在末尾，超出即视为截断。
    pub(crate) fn seek(&mut self, offset: usize) -> Result<(), DecodeError> {
        if offset > self.bytes.len() {
            return Err(DecodeError::TruncatedInput {
                offset: self.bytes.len(),
                wanted: offset - self.bytes.len(),
                available: 0,
            });
        }
        self.pos = offset;
        Ok(())
    }

    /// 读取 `len` 个原始字节，返回借用切片。
    pub(crate) fn bytes(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        let available = self.bytes.len() - self.pos;
        if len > available {
            return Err(DecodeError::TruncatedInput {
                offset: self.pos,
                wanted: len,
                available,
            });
        }
        let start = self.pos;
        self.pos += len;
        Ok(&self.bytes[start..start + len])
    }

    fn array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let slice = self.bytes(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(slice);
        Ok(out)
    }

    pub(crate) fn u8(&mut self) -> Result<u8, DecodeError> {
        Ok(self.array::<1>()?[0])
    }

    pub(crate) fn u16(&mut self) -> Result<u16, DecodeError> {
        Ok(u16::from_le_bytes(self.array()?))
    }

    pub(crate) fn u32(&mut self) -> Result<u32, DecodeError> {
        Ok(u32::from_le_bytes(self.array()?))
    }

    pub(crate) fn i32(&mut self) -> Result<i32, DecodeError> {
        Ok(i32::from_le_bytes(self.array()?))
    }
}
