use num_enum::{IntoPrimitive, TryFromPrimitive};

/// TIFF field types, with their wire codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u16)]
pub enum DataType {
    Byte = 1,
    Ascii = 2,
    Short = 3,
    Long = 4,
    Rational = 5,
    /// Offset to an embedded sub-directory, not inline data.
    Ifd = 13,
}

/// Unsigned rational, the TIFF representation of resolution values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rational {
    pub numerator: u32,
    pub denominator: u32,
}

impl Rational {
    pub fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Approximate a non-negative floating-point value as a rational.
    ///
    /// Integral values map exactly; fractional values are scaled to a fixed
    /// denominator and reduced, which is plenty for resolution values.
    /// Non-finite or negative input maps to 0/1.
    pub fn approximate(value: f64) -> Self {
        if !value.is_finite() || value < 0.0 {
            return Self::new(0, 1);
        }
        if value.fract() == 0.0 && value <= f64::from(u32::MAX) {
            return Self::new(value as u32, 1);
        }

        let mut scale: u64 = 100_000;
        while scale > 1 && value * scale as f64 > f64::from(u32::MAX) {
            scale /= 10;
        }
        let numerator = (value * scale as f64).round() as u64;
        let g = gcd(numerator.max(1), scale);
        Self::new((numerator / g) as u32, (scale / g) as u32)
    }

    pub fn to_f64(self) -> f64 {
        f64::from(self.numerator) / f64::from(self.denominator)
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// A typed tag value.
///
/// One variant per value shape the entry assembly actually produces; each
/// knows its TIFF field type and element count. `Clone` performs a
/// structural copy, so a cloned entry never aliases its source.
#[derive(Debug, Clone, PartialEq)]
pub enum TagValue {
    Short(u16),
    ShortArray(Vec<u16>),
    Long(u32),
    Rational(Rational),
    Ascii(String),
    Byte(Vec<u8>),
    /// Offset of an embedded sub-directory.
    Ifd(u32),
}

impl TagValue {
    pub fn data_type(&self) -> DataType {
        match self {
            TagValue::Short(_) | TagValue::ShortArray(_) => DataType::Short,
            TagValue::Long(_) => DataType::Long,
            TagValue::Rational(_) => DataType::Rational,
            TagValue::Ascii(_) => DataType::Ascii,
            TagValue::Byte(_) => DataType::Byte,
            TagValue::Ifd(_) => DataType::Ifd,
        }
    }

    /// Element count as the directory serializer records it.
    ///
    /// ASCII counts include the terminating NUL.
    pub fn count(&self) -> u32 {
        match self {
            TagValue::Short(_) | TagValue::Long(_) | TagValue::Rational(_) | TagValue::Ifd(_) => 1,
            TagValue::ShortArray(values) => values.len() as u32,
            TagValue::Ascii(s) => s.len() as u32 + 1,
            TagValue::Byte(bytes) => bytes.len() as u32,
        }
    }
}

/// One directory entry: a tag identifier paired with its typed value.
///
/// Identity is the tag; replacing the value means replacing the entry.
#[derive(Debug, Clone, PartialEq)]
pub struct TagEntry {
    tag: u16,
    value: TagValue,
}

impl TagEntry {
    pub fn new(tag: impl Into<u16>, value: TagValue) -> Self {
        Self {
            tag: tag.into(),
            value,
        }
    }

    pub fn tag(&self) -> u16 {
        self.tag
    }

    pub fn value(&self) -> &TagValue {
        &self.value
    }

    pub fn data_type(&self) -> DataType {
        self.value.data_type()
    }
}
