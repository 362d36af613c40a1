use bbox::Rect;

/// A bounding box tagged with its object class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Label<R, C>
where
    R: Rect,
{
    pub rect: R,
    pub class: C,
}

impl<R, C> Label<R, C>
where
    R: Rect,
{
    pub fn new(rect: R, class: C) -> Self {
        Self { rect, class }
    }

    /// Replace the rectangle and keep the class, dropping the label if `f` returns `None`.
    pub fn filter_map_rect<S, F>(self, f: F) -> Option<Label<S, C>>
    where
        S: Rect,
        F: FnOnce(R) -> Option<S>,
    {
        let Self { rect, class } = self;
        Some(Label {
            rect: f(rect)?,
            class,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bbox::{RectNum, Transform, TLBR};

    #[test]
    fn label_translate_keeps_class() {
        let label = Label::new(TLBR::from_xyxy([20i64, 20, 40, 40]), 7usize);
        let transform = Transform::from_translation(-5, -15);
        let moved = label
            .filter_map_rect(|rect| Some(&transform * &rect))
            .unwrap();
        assert_eq!(moved.class, 7);
        assert_eq!(moved.rect.xyxy(), [5, 15, 25, 35]);
    }

    #[test]
    fn label_filter_map_rect() {
        let label = Label::new(TLBR::from_xyxy([0i64, 0, 4, 4]), 1usize);
        let kept = label.filter_map_rect(|rect| (!rect.is_degenerate()).then(|| rect));
        assert_eq!(kept, Some(label));

        let dropped = label.filter_map_rect(|rect| rect.is_degenerate().then(|| rect));
        assert_eq!(dropped, None);
    }
}
