use super::Rect;
use crate::{common::*, Transform, HW};

/// Bounding box in TLBR format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TLBR<T> {
    pub(crate) t: T,
    pub(crate) l: T,
    pub(crate) b: T,
    pub(crate) r: T,
}

impl<T> TLBR<T>
where
    T: Copy + Num,
{
    pub fn transform(&self, transform: &Transform<T>) -> Self {
        TLBR {
            t: self.t * transform.sy + transform.ty,
            l: self.l * transform.sx + transform.tx,
            b: self.b * transform.sy + transform.ty,
            r: self.r * transform.sx + transform.tx,
        }
    }
}

impl TLBR<i64> {
    /// Map the box from an image of `src` size onto the same image resized to `tgt`.
    ///
    /// Every coordinate is computed as `value * new / old` in `f64` and truncated
    /// toward zero. The truncation may shrink a box by one pixel or collapse it.
    pub fn resize_truncated(&self, src: &HW<usize>, tgt: &HW<usize>) -> Self {
        let scale = |value: i64, old: usize, new: usize| -> i64 {
            (value as f64 * new as f64 / old as f64) as i64
        };

        TLBR {
            t: scale(self.t, src.h(), tgt.h()),
            l: scale(self.l, src.w(), tgt.w()),
            b: scale(self.b, src.h(), tgt.h()),
            r: scale(self.r, src.w(), tgt.w()),
        }
    }
}

impl<T> Rect for TLBR<T>
where
    T: Copy + Num + PartialOrd,
{
    type Type = T;

    fn t(&self) -> Self::Type {
        self.t
    }

    fn l(&self) -> Self::Type {
        self.l
    }

    fn b(&self) -> Self::Type {
        self.b
    }

    fn r(&self) -> Self::Type {
        self.r
    }

    fn h(&self) -> Self::Type {
        self.b - self.t
    }

    fn w(&self) -> Self::Type {
        self.r - self.l
    }

    fn try_from_tlbr(tlbr: [Self::Type; 4]) -> Result<Self> {
        let [t, l, b, r] = tlbr;
        ensure!(b >= t && r >= l, "b >= t and r >= l must hold");

        Ok(Self { t, l, b, r })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RectNum;

    #[test]
    fn tlbr_from_xyxy_order() {
        let bbox = TLBR::from_xyxy([10, 20, 50, 60]);
        assert_eq!([bbox.t(), bbox.l(), bbox.b(), bbox.r()], [20, 10, 60, 50]);
        assert_eq!(bbox.xyxy(), [10, 20, 50, 60]);
        assert_eq!(bbox.hw(), [40, 40]);
    }

    #[test]
    fn tlbr_reject_inverted() {
        assert!(TLBR::try_from_xyxy([50, 10, 10, 50]).is_err());
        assert!(TLBR::try_from_xyxy([10, 10, 10, 10]).is_ok());
    }

    #[test]
    fn tlbr_resize_truncated() {
        let src = HW::from_hw([100, 200]);
        let tgt = HW::from_hw([50, 100]);
        let bbox = TLBR::from_xyxy([10, 10, 50, 50]);
        assert_eq!(bbox.resize_truncated(&src, &tgt).xyxy(), [5, 5, 25, 25]);

        // 7 * 2 / 3 = 4.67 is truncated rather than rounded
        let src = HW::from_hw([3, 3]);
        let tgt = HW::from_hw([2, 2]);
        let bbox = TLBR::from_xyxy([0, 0, 7, 7]);
        assert_eq!(bbox.resize_truncated(&src, &tgt).xyxy(), [0, 0, 4, 4]);
    }

    #[test]
    fn tlbr_resize_truncated_negative_toward_zero() {
        let src = HW::from_hw([2, 2]);
        let tgt = HW::from_hw([1, 1]);
        let bbox = TLBR::from_xyxy([-3, -3, 3, 3]);
        assert_eq!(bbox.resize_truncated(&src, &tgt).xyxy(), [-1, -1, 1, 1]);
    }

    #[test]
    fn tlbr_clamp_within() {
        let size = HW::from_hw([50, 50]);
        let bbox = TLBR::from_xyxy([-10, 40, 30, 70]);
        assert!(!bbox.is_within(&size));
        assert_eq!(bbox.clamp_within(&size).xyxy(), [0, 40, 30, 50]);
        assert_eq!(bbox.clamp_within(&size).hw(), [10, 30]);

        let outside = TLBR::from_xyxy([60, 60, 70, 70]);
        assert!(outside.clamp_within(&size).is_degenerate());
        assert!(!TLBR::from_xyxy([0, 0, 50, 50]).is_degenerate());
        assert!(TLBR::from_xyxy([0, 0, 50, 50]).is_within(&size));
    }
}
