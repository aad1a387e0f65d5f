//! Numeric wire seam shared by the chain and flat codecs.

use shapepack_buffers::{BufferError, Reader, Writer};

/// A numeric scalar kind with a fixed 8-byte big-endian wire form.
///
/// The chain and flat codecs are instantiated once per numeric kind
/// through this trait; integers and floats never mix within a single
/// structure.
pub trait WireNumber: Copy + PartialEq + std::fmt::Debug {
    /// Short kind name used in codec identifiers.
    const KIND: &'static str;

    fn write(self, writer: &mut Writer);
    fn read(reader: &mut Reader<'_>) -> Result<Self, BufferError>;
}

impl WireNumber for i64 {
    const KIND: &'static str = "int";

    fn write(self, writer: &mut Writer) {
        writer.i64(self);
    }

    fn read(reader: &mut Reader<'_>) -> Result<Self, BufferError> {
        reader.i64()
    }
}

impl WireNumber for f64 {
    const KIND: &'static str = "float";

    fn write(self, writer: &mut Writer) {
        writer.f64(self);
    }

    fn read(reader: &mut Reader<'_>) -> Result<Self, BufferError> {
        reader.f64()
    }
}
