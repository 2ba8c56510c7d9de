use num_traits::PrimInt;
use std::fmt::Debug;
use std::io;
use std::io::Write;
use std::mem::size_of;

/// Fixed-width integer element that can be stored in a fixture file.
///
/// Elements are always encoded little-endian, independent of the host.
pub trait DType: 'static + Sized + Copy + PrimInt + Debug {
    const SIZE: usize;
    fn write_le<W: Write + ?Sized>(self, writer: &mut W) -> io::Result<()>;
    /// `bytes` must be exactly `SIZE` long.
    fn from_le_slice(bytes: &[u8]) -> Self;
}

impl DType for i32 {
    const SIZE: usize = size_of::<i32>();
    #[inline]
    fn write_le<W: Write + ?Sized>(self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.to_le_bytes())
    }
    #[inline]
    fn from_le_slice(bytes: &[u8]) -> Self {
        let mut buf = [0u8; size_of::<i32>()];
        buf.copy_from_slice(bytes);
        i32::from_le_bytes(buf)
    }
}
