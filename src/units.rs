//! Unit tables
//!
//! Size units scale to bytes, speed units scale to bits per second.
//! Both tables use binary (1024) prefixes; byte-based speeds carry an
//! extra factor of 8.

const KIB: f64 = 1024.0;
const MIB: f64 = KIB * 1024.0;
const GIB: f64 = MIB * 1024.0;
const TIB: f64 = GIB * 1024.0;

/// Selectable file size units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeUnit {
    B,
    KB,
    MB,
    #[default]
    GB,
    TB,
}

impl SizeUnit {
    pub const ALL: [SizeUnit; 5] = [
        SizeUnit::B,
        SizeUnit::KB,
        SizeUnit::MB,
        SizeUnit::GB,
        SizeUnit::TB,
    ];

    /// Label used as the lookup key (and as the selector's value)
    pub fn label(&self) -> &'static str {
        match self {
            SizeUnit::B => "B",
            SizeUnit::KB => "KB",
            SizeUnit::MB => "MB",
            SizeUnit::GB => "GB",
            SizeUnit::TB => "TB",
        }
    }

    /// Bytes per unit
    pub fn factor(&self) -> f64 {
        match self {
            SizeUnit::B => 1.0,
            SizeUnit::KB => KIB,
            SizeUnit::MB => MIB,
            SizeUnit::GB => GIB,
            SizeUnit::TB => TIB,
        }
    }

    /// Exact, case-sensitive match on the label
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|u| u.label() == label)
    }
}

/// Selectable transfer speed units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpeedUnit {
    Bits,
    Kbits,
    #[default]
    Mbits,
    Gbits,
    Bytes,
    KBytes,
    MBytes,
    GBytes,
}

impl SpeedUnit {
    pub const ALL: [SpeedUnit; 8] = [
        SpeedUnit::Bits,
        SpeedUnit::Kbits,
        SpeedUnit::Mbits,
        SpeedUnit::Gbits,
        SpeedUnit::Bytes,
        SpeedUnit::KBytes,
        SpeedUnit::MBytes,
        SpeedUnit::GBytes,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SpeedUnit::Bits => "bs",
            SpeedUnit::Kbits => "Kbs",
            SpeedUnit::Mbits => "Mbs",
            SpeedUnit::Gbits => "Gbs",
            SpeedUnit::Bytes => "Bs",
            SpeedUnit::KBytes => "KBs",
            SpeedUnit::MBytes => "MBs",
            SpeedUnit::GBytes => "GBs",
        }
    }

    /// Human-facing name shown in the selector
    pub fn display_name(&self) -> &'static str {
        match self {
            SpeedUnit::Bits => "bit/s",
            SpeedUnit::Kbits => "Kbit/s",
            SpeedUnit::Mbits => "Mbit/s",
            SpeedUnit::Gbits => "Gbit/s",
            SpeedUnit::Bytes => "B/s",
            SpeedUnit::KBytes => "KB/s",
            SpeedUnit::MBytes => "MB/s",
            SpeedUnit::GBytes => "GB/s",
        }
    }

    /// Bits per second per unit
    pub fn factor(&self) -> f64 {
        match self {
            SpeedUnit::Bits => 1.0,
            SpeedUnit::Kbits => KIB,
            SpeedUnit::Mbits => MIB,
            SpeedUnit::Gbits => GIB,
            SpeedUnit::Bytes => 8.0,
            SpeedUnit::KBytes => 8.0 * KIB,
            SpeedUnit::MBytes => 8.0 * MIB,
            SpeedUnit::GBytes => 8.0 * GIB,
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|u| u.label() == label)
    }
}

/// Bytes per unit for a size label, `None` when the label is unknown
pub fn size_factor(label: &str) -> Option<f64> {
    SizeUnit::from_label(label).map(|u| u.factor())
}

/// Bits per second per unit for a speed label, `None` when the label is unknown
pub fn speed_factor(label: &str) -> Option<f64> {
    SpeedUnit::from_label(label).map(|u| u.factor())
}
