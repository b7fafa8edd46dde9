use crate::error::TransportError;

/// Byte value a receiver returns when it has nothing queued
pub const NO_DATA: u8 = 0xFF;

/// Line terminator ending every sentence
pub const LINE_TERMINATOR: u8 = b'\n';

/// Trait for transports that hand out the receiver's output one byte at a time
///
/// Implementations wrap the bus (I2C, serial, a replay buffer in tests) and
/// report any bus fault as a `TransportError`.
pub trait ByteSource {
    /// Read the next byte from the device
    fn read_byte(&mut self) -> Result<u8, TransportError>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn read_byte(&mut self) -> Result<u8, TransportError> {
        (**self).read_byte()
    }
}
