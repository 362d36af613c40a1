use super::TLBR;
use crate::{common::*, HW};

/// The generic rectangle.
///
/// The vertical axis grows downwards as image rows do, so `t <= b` and
/// `l <= r` hold for every well-formed rectangle.
pub trait Rect {
    type Type;

    fn t(&self) -> Self::Type;
    fn l(&self) -> Self::Type;
    fn b(&self) -> Self::Type;
    fn r(&self) -> Self::Type;
    fn h(&self) -> Self::Type;
    fn w(&self) -> Self::Type;

    fn try_from_tlbr(tlbr: [Self::Type; 4]) -> Result<Self>
    where
        Self: Sized;

    /// Build from `[xmin, ymin, xmax, ymax]` order used by annotation files.
    fn try_from_xyxy(xyxy: [Self::Type; 4]) -> Result<Self>
    where
        Self: Sized,
    {
        let [l, t, r, b] = xyxy;
        Self::try_from_tlbr([t, l, b, r])
    }
}

pub trait RectNum: Rect
where
    Self::Type: Copy + Num + PartialOrd,
{
    fn from_xyxy(xyxy: [Self::Type; 4]) -> Self
    where
        Self: Sized,
    {
        Self::try_from_xyxy(xyxy).unwrap()
    }

    /// Corners in `[xmin, ymin, xmax, ymax]` order.
    fn xyxy(&self) -> [Self::Type; 4] {
        [self.l(), self.t(), self.r(), self.b()]
    }

    fn hw(&self) -> [Self::Type; 2] {
        [self.h(), self.w()]
    }

    /// Returns true if either side has zero length.
    fn is_degenerate(&self) -> bool {
        self.h() == Self::Type::zero() || self.w() == Self::Type::zero()
    }

    /// Returns true if the rectangle lies within `[0, w] x [0, h]` of the image size.
    fn is_within(&self, size: &HW<Self::Type>) -> bool {
        let zero = Self::Type::zero();
        self.t() >= zero && self.l() >= zero && self.b() <= size.h() && self.r() <= size.w()
    }

    /// Clamp the rectangle into `[0, w] x [0, h]` of the image size.
    ///
    /// The outcome can be degenerate if the rectangle lies outside the image.
    fn clamp_within(&self, size: &HW<Self::Type>) -> TLBR<Self::Type> {
        let zero = Self::Type::zero();
        let clamp = |value, max| partial_min(partial_max(value, zero), max);
        TLBR {
            t: clamp(self.t(), size.h()),
            l: clamp(self.l(), size.w()),
            b: clamp(self.b(), size.h()),
            r: clamp(self.r(), size.w()),
        }
    }
}

impl<T> RectNum for T
where
    T: Rect,
    T::Type: Copy + Num + PartialOrd,
{
}

fn partial_max<T: PartialOrd>(lhs: T, rhs: T) -> T {
    if lhs >= rhs {
        lhs
    } else {
        rhs
    }
}

fn partial_min<T: PartialOrd>(lhs: T, rhs: T) -> T {
    if lhs <= rhs {
        lhs
    } else {
        rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_bounds_on_floats() {
        let size = HW::from_hw([10.0, 20.0]);
        let bbox = TLBR::from_xyxy([-2.5, 1.0, 25.0, 4.0]);
        assert!(!bbox.is_degenerate());
        assert!(!bbox.is_within(&size));

        let clamped = bbox.clamp_within(&size);
        assert_eq!(clamped.xyxy(), [0.0, 1.0, 20.0, 4.0]);
        assert!(clamped.is_within(&size));
        assert!(TLBR::from_xyxy([3.0, 3.0, 3.0, 8.0]).is_degenerate());
    }
}
