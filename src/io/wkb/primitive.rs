//! Reading and writing the fixed-width values that make up WKB, in either byte order.

use std::io::{Cursor, Write};

use byteorder::{BigEndian, LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::error::{WkbError, WkbResult};
use crate::geometry::Coord;
use crate::io::wkb::common::Endianness;

/// A read position over an in-memory WKB buffer.
///
/// Every read checks the remaining length first, so a truncated buffer is reported as
/// [`WkbError::UnexpectedEndOfInput`] with the offset of the field that did not fit.
#[derive(Debug, Clone)]
pub struct WkbCursor<'a> {
    reader: Cursor<&'a [u8]>,
}

impl<'a> WkbCursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            reader: Cursor::new(buf),
        }
    }

    /// The offset of the next byte to be read.
    pub fn position(&self) -> usize {
        self.reader.position() as usize
    }

    /// The number of bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.reader.get_ref().len().saturating_sub(self.position())
    }

    fn ensure(&self, needed: usize) -> WkbResult<()> {
        if self.remaining() < needed {
            return Err(WkbError::UnexpectedEndOfInput {
                offset: self.position(),
                needed,
            });
        }
        Ok(())
    }

    pub fn read_u8(&mut self) -> WkbResult<u8> {
        self.ensure(1)?;
        Ok(self.reader.read_u8()?)
    }

    pub fn read_u32(&mut self, byte_order: Endianness) -> WkbResult<u32> {
        self.ensure(4)?;
        let value = match byte_order {
            Endianness::BigEndian => self.reader.read_u32::<BigEndian>()?,
            Endianness::LittleEndian => self.reader.read_u32::<LittleEndian>()?,
        };
        Ok(value)
    }

    pub fn read_f64(&mut self, byte_order: Endianness) -> WkbResult<f64> {
        self.ensure(8)?;
        let value = match byte_order {
            Endianness::BigEndian => self.reader.read_f64::<BigEndian>()?,
            Endianness::LittleEndian => self.reader.read_f64::<LittleEndian>()?,
        };
        Ok(value)
    }

    /// Read an x/y pair.
    pub fn read_coord(&mut self, byte_order: Endianness) -> WkbResult<Coord> {
        self.ensure(16)?;
        let x = self.read_f64(byte_order)?;
        let y = self.read_f64(byte_order)?;
        Ok(Coord::new(x, y))
    }

    /// Read an element count and check that `count` elements of at least `min_element_size`
    /// bytes each could still fit in the buffer.
    ///
    /// This rejects corrupt counts before anything is allocated for them.
    pub fn read_count(
        &mut self,
        byte_order: Endianness,
        min_element_size: usize,
    ) -> WkbResult<usize> {
        let offset = self.position();
        let count = self.read_u32(byte_order)?;
        let count = usize::try_from(count).map_err(|_| {
            WkbError::malformed(offset, format!("count {count} does not fit in memory"))
        })?;

        let required = count.saturating_mul(min_element_size);
        if required > self.remaining() {
            return Err(WkbError::malformed(
                offset,
                format!(
                    "count {count} requires at least {required} bytes but only {} remain",
                    self.remaining()
                ),
            ));
        }
        Ok(count)
    }
}

/// Extends [`Write`] with methods for writing WKB values in a runtime-selected byte order.
pub trait WriteWkbExt: Write {
    fn write_byte_order(&mut self, byte_order: Endianness) -> WkbResult<()> {
        self.write_u8(byte_order.into())?;
        Ok(())
    }

    fn write_u32_with(&mut self, value: u32, byte_order: Endianness) -> WkbResult<()> {
        match byte_order {
            Endianness::BigEndian => self.write_u32::<BigEndian>(value)?,
            Endianness::LittleEndian => self.write_u32::<LittleEndian>(value)?,
        }
        Ok(())
    }

    fn write_f64_with(&mut self, value: f64, byte_order: Endianness) -> WkbResult<()> {
        match byte_order {
            Endianness::BigEndian => self.write_f64::<BigEndian>(value)?,
            Endianness::LittleEndian => self.write_f64::<LittleEndian>(value)?,
        }
        Ok(())
    }

    fn write_coord(&mut self, coord: Coord, byte_order: Endianness) -> WkbResult<()> {
        self.write_f64_with(coord.x, byte_order)?;
        self.write_f64_with(coord.y, byte_order)
    }

    /// Write an element count, failing if it does not fit in a `u32`.
    fn write_count(&mut self, count: usize, byte_order: Endianness) -> WkbResult<()> {
        let count: u32 = count.try_into().map_err(|_| {
            WkbError::malformed(None, format!("count {count} does not fit in a WKB u32"))
        })?;
        self.write_u32_with(count, byte_order)
    }
}

impl<W: Write + ?Sized> WriteWkbExt for W {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::WkbErrorKind;

    #[test]
    fn read_both_orders() {
        let buf = [0x00, 0x00, 0x00, 0x02, 0x02, 0x00, 0x00, 0x00];
        let mut cursor = WkbCursor::new(&buf);
        assert_eq!(cursor.read_u32(Endianness::BigEndian).unwrap(), 2);
        assert_eq!(cursor.read_u32(Endianness::LittleEndian).unwrap(), 2);
        assert_eq!(cursor.remaining(), 0);

        let buf = [0x3F, 0xF0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xF0, 0x3F];
        let mut cursor = WkbCursor::new(&buf);
        assert_eq!(cursor.read_f64(Endianness::BigEndian).unwrap(), 1.0);
        assert_eq!(cursor.read_f64(Endianness::LittleEndian).unwrap(), 1.0);
    }

    #[test]
    fn truncated() {
        let buf = [0x01, 0x02, 0x03];
        let mut cursor = WkbCursor::new(&buf);
        assert_eq!(cursor.read_u8().unwrap(), 1);
        let err = cursor.read_u32(Endianness::LittleEndian).unwrap_err();
        assert!(matches!(
            err,
            WkbError::UnexpectedEndOfInput {
                offset: 1,
                needed: 4
            }
        ));
        // a failed read does not consume anything
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn implausible_count() {
        // 3 coordinates announced, room for 1
        let mut buf = vec![3, 0, 0, 0];
        buf.extend_from_slice(&[0; 16]);
        let mut cursor = WkbCursor::new(&buf);
        let err = cursor.read_count(Endianness::LittleEndian, 16).unwrap_err();
        assert_eq!(err.kind(), WkbErrorKind::MalformedInput);
        assert_eq!(err.offset(), Some(0));

        let mut cursor = WkbCursor::new(&buf);
        assert_eq!(cursor.read_count(Endianness::LittleEndian, 4).unwrap(), 3);
    }

    #[test]
    fn write_both_orders() {
        let mut buf = vec![];
        buf.write_byte_order(Endianness::BigEndian).unwrap();
        buf.write_u32_with(2, Endianness::BigEndian).unwrap();
        buf.write_f64_with(1.0, Endianness::LittleEndian).unwrap();
        assert_eq!(buf, vec![0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0xF0, 0x3F]);
    }
}
