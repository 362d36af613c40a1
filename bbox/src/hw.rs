use crate::common::*;
use std::fmt;

/// Image or rectangle size in height-width order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HW<T> {
    h: T,
    w: T,
}

impl<T> HW<T> {
    pub fn try_cast<U>(self) -> Option<HW<U>>
    where
        T: ToPrimitive,
        U: NumCast,
    {
        Some(HW {
            h: U::from(self.h)?,
            w: U::from(self.w)?,
        })
    }

    pub fn cast<U>(self) -> HW<U>
    where
        T: ToPrimitive,
        U: NumCast,
    {
        self.try_cast().unwrap()
    }
}

impl<T> HW<T>
where
    T: Num + PartialOrd + Copy,
{
    pub fn try_from_hw(hw: [T; 2]) -> Result<Self> {
        let [h, w] = hw;
        let zero = T::zero();
        ensure!(
            h >= zero && w >= zero,
            "height and width parameters must be non-negative"
        );
        Ok(Self { h, w })
    }

    pub fn from_hw(hw: [T; 2]) -> Self {
        Self::try_from_hw(hw).unwrap()
    }

    pub fn hw(&self) -> [T; 2] {
        [self.h, self.w]
    }

    /// Returns true if either side is zero.
    pub fn is_empty(&self) -> bool {
        self.h == T::zero() || self.w == T::zero()
    }

    /// Returns true if `other` fits inside this size on both axes.
    pub fn contains(&self, other: &Self) -> bool {
        other.h <= self.h && other.w <= self.w
    }

    pub fn w(&self) -> T {
        self.w
    }

    pub fn h(&self) -> T {
        self.h
    }
}

impl<T> fmt::Display for HW<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.h, self.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_contains() {
        let outer = HW::from_hw([100usize, 100]);
        assert!(outer.contains(&HW::from_hw([50, 100])));
        assert!(!outer.contains(&HW::from_hw([150, 50])));
        assert!(HW::from_hw([0usize, 3]).is_empty());
        assert_eq!(format!("{}", HW::from_hw([4usize, 7])), "4x7");
    }

    #[test]
    fn size_reject_negative() {
        assert!(HW::try_from_hw([-1i64, 3]).is_err());
    }
}
