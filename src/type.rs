use std::fmt::Debug;

use float_next_after::NextAfter;
use num_traits::{Num, NumCast};

/// A primitive number usable as a point coordinate.
///
/// Note that float `NaN` is not supported and may panic during sorting.
pub trait IndexableNum: Num + NumCast + PartialOrd + Copy + Debug + Send + Sync {
    /// The smallest representable value strictly greater than `self`.
    ///
    /// Integer types saturate at their maximum; float types step to the next
    /// representable value toward positive infinity. Used to rewrite a closed
    /// upper bound as an exclusive one.
    fn successor(self) -> Self;
}

impl IndexableNum for i8 {
    fn successor(self) -> Self {
        self.saturating_add(1)
    }
}

impl IndexableNum for u8 {
    fn successor(self) -> Self {
        self.saturating_add(1)
    }
}

impl IndexableNum for i16 {
    fn successor(self) -> Self {
        self.saturating_add(1)
    }
}

impl IndexableNum for u16 {
    fn successor(self) -> Self {
        self.saturating_add(1)
    }
}

impl IndexableNum for i32 {
    fn successor(self) -> Self {
        self.saturating_add(1)
    }
}

impl IndexableNum for u32 {
    fn successor(self) -> Self {
        self.saturating_add(1)
    }
}

impl IndexableNum for i64 {
    fn successor(self) -> Self {
        self.saturating_add(1)
    }
}

impl IndexableNum for u64 {
    fn successor(self) -> Self {
        self.saturating_add(1)
    }
}

impl IndexableNum for f32 {
    fn successor(self) -> Self {
        self.next_after(f32::INFINITY)
    }
}

impl IndexableNum for f64 {
    fn successor(self) -> Self {
        self.next_after(f64::INFINITY)
    }
}
