use std::fmt::{self, Display};

/// Sample payload for operator tests: something routed, weighed, and
/// compared, so fan-out and filter assertions read naturally.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Parcel {
    pub label: &'static str,
    pub weight_grams: u32,
}

impl Parcel {
    pub const fn new(label: &'static str, weight_grams: u32) -> Self {
        Self {
            label,
            weight_grams,
        }
    }
}

impl Display for Parcel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}g)", self.label, self.weight_grams)
    }
}

pub fn parcel_letter() -> Parcel {
    Parcel::new("letter", 50)
}

pub fn parcel_book() -> Parcel {
    Parcel::new("book", 700)
}

pub fn parcel_crate() -> Parcel {
    Parcel::new("crate", 12_000)
}

pub fn parcel_pallet() -> Parcel {
    Parcel::new("pallet", 250_000)
}
