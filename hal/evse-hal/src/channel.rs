//! Byte channel abstraction
//!
//! A non-blocking byte source and sink. The engine asks how many bytes are
//! ready, reads that many, and writes whole frames back.

/// Serial byte channel
///
/// Reads never block: `available` reports what can be consumed right now and
/// `read_byte` returns `None` when nothing is pending.
pub trait ByteChannel {
    /// Error type for channel operations
    type Error;

    /// Number of bytes that can be read without blocking
    fn available(&mut self) -> Result<usize, Self::Error>;

    /// Read a single byte, or `None` if no byte is pending
    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error>;

    /// Write a single byte
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// Write all bytes in `data`
    fn write_all(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        for &byte in data {
            self.write_byte(byte)?;
        }
        Ok(())
    }

    /// Write a string
    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        self.write_all(s.as_bytes())
    }

    /// Flush any buffered output
    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl<T: ByteChannel + ?Sized> ByteChannel for &mut T {
    type Error = T::Error;

    fn available(&mut self) -> Result<usize, Self::Error> {
        (**self).available()
    }

    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        (**self).read_byte()
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        (**self).write_byte(byte)
    }

    fn write_all(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        (**self).write_all(data)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        (**self).flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;

    /// Channel that only implements the required methods
    struct Sink {
        written: Vec<u8>,
    }

    impl ByteChannel for Sink {
        type Error = Infallible;

        fn available(&mut self) -> Result<usize, Infallible> {
            Ok(0)
        }

        fn read_byte(&mut self) -> Result<Option<u8>, Infallible> {
            Ok(None)
        }

        fn write_byte(&mut self, byte: u8) -> Result<(), Infallible> {
            self.written.push(byte);
            Ok(())
        }
    }

    #[test]
    fn test_write_str_uses_write_byte() {
        let mut sink = Sink { written: Vec::new() };
        sink.write_str("$OK \r").unwrap();
        assert_eq!(sink.written, b"$OK \r");
    }

    fn emit<C: ByteChannel>(mut channel: C) -> Result<Option<u8>, C::Error> {
        channel.write_all(b"ST")?;
        channel.flush()?;
        channel.read_byte()
    }

    #[test]
    fn test_mut_ref_forwards() {
        let mut sink = Sink { written: Vec::new() };
        assert_eq!(emit(&mut sink).unwrap(), None);
        assert_eq!(sink.written, b"ST");
    }
}
