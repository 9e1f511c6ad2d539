//! Text encodings for generated values, one value per line.

use std::io::Write;

/// Numeric base and letter case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Radix {
    #[default]
    Decimal,
    LowerHex,
    UpperHex,
}

/// How many low-order bits of each value are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Width {
    #[default]
    Bits64,
    /// Low 32 bits of the 64-bit output. Never a separately generated value.
    Bits32,
}

/// Output encoding: hex is zero-padded to 16 digits (64-bit) or 8 (32-bit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutputFormat {
    pub radix: Radix,
    pub width: Width,
}

impl OutputFormat {
    pub fn new(radix: Radix, width: Width) -> Self {
        Self { radix, width }
    }

    /// The value that will actually be printed.
    pub fn truncate(self, value: u64) -> u64 {
        match self.width {
            Width::Bits64 => value,
            Width::Bits32 => u64::from(value as u32),
        }
    }

    /// Write `value` followed by a newline.
    pub fn write_value<W: Write + ?Sized>(self, out: &mut W, value: u64) -> std::io::Result<()> {
        match (self.width, self.radix) {
            (Width::Bits64, Radix::Decimal) => writeln!(out, "{value}"),
            (Width::Bits64, Radix::LowerHex) => writeln!(out, "{value:016x}"),
            (Width::Bits64, Radix::UpperHex) => writeln!(out, "{value:016X}"),
            (Width::Bits32, radix) => {
                let low = self.truncate(value);
                match radix {
                    Radix::Decimal => writeln!(out, "{low}"),
                    Radix::LowerHex => writeln!(out, "{low:08x}"),
                    Radix::UpperHex => writeln!(out, "{low:08X}"),
                }
            }
        }
    }
}
