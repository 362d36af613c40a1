use crate::{common::*, rect::Rect, TLBR};

/// Unchecked bounding box in `(xmin, ymin, xmax, ymax)` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct XYXY_<T> {
    pub xmin: T,
    pub ymin: T,
    pub xmax: T,
    pub ymax: T,
}

impl<T> TryFrom<XYXY_<T>> for TLBR<T>
where
    T: Copy + Num + PartialOrd,
{
    type Error = Error;

    fn try_from(from: XYXY_<T>) -> Result<Self, Self::Error> {
        Self::try_from(&from)
    }
}

impl<T> TryFrom<&XYXY_<T>> for TLBR<T>
where
    T: Copy + Num + PartialOrd,
{
    type Error = Error;

    fn try_from(from: &XYXY_<T>) -> Result<Self, Self::Error> {
        let XYXY_ {
            xmin,
            ymin,
            xmax,
            ymax,
        } = *from;
        Self::try_from_xyxy([xmin, ymin, xmax, ymax])
    }
}
