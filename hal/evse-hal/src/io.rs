//! `embedded-io` channel adapter
//!
//! Wraps any serial port implementing the `embedded-io` traits. Received
//! bytes are staged in a fixed-size queue so that `available` can report a
//! count without blocking.

use embedded_io::{Read, ReadReady, Write};
use heapless::Deque;

use crate::channel::ByteChannel;

/// [`ByteChannel`] over an `embedded-io` port
///
/// `N` bounds how many bytes are pulled from the port per `available` call.
pub struct IoChannel<T, const N: usize> {
    io: T,
    rx: Deque<u8, N>,
}

impl<T, const N: usize> IoChannel<T, N> {
    /// Wrap a serial port
    pub fn new(io: T) -> Self {
        Self {
            io,
            rx: Deque::new(),
        }
    }

    /// Access the underlying port
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.io
    }

    /// Release the underlying port, dropping any staged bytes
    pub fn into_inner(self) -> T {
        self.io
    }
}

impl<T: Read + ReadReady + Write, const N: usize> ByteChannel for IoChannel<T, N> {
    type Error = T::Error;

    fn available(&mut self) -> Result<usize, Self::Error> {
        if self.rx.is_empty() && self.io.read_ready()? {
            let mut buf = [0u8; N];
            let n = self.io.read(&mut buf)?;
            for &byte in &buf[..n] {
                // n <= N and the queue was empty
                let _ = self.rx.push_back(byte);
            }
        }
        Ok(self.rx.len())
    }

    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        if self.rx.is_empty() {
            self.available()?;
        }
        Ok(self.rx.pop_front())
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.io.write_all(&[byte])
    }

    fn write_all(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.io.write_all(data)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.io.flush()
    }
}
