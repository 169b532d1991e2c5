use std::cmp::Ordering;

use crate::render::primitives::{Color, VisualMark};

/// Orders marks so a brushed (highlight-colored) point paints over the
/// complete-set point of the same element.
///
/// Every other pair compares `Equal`, so a stable sort leaves it untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderComparator {
    highlight: Color,
}

impl RenderComparator {
    #[must_use]
    pub const fn new(highlight: Color) -> Self {
        Self { highlight }
    }

    #[must_use]
    pub fn highlight(&self) -> Color {
        self.highlight
    }

    #[must_use]
    pub fn compare(&self, left: &VisualMark, right: &VisualMark) -> Ordering {
        if !left.is_point() || !right.is_point() {
            return Ordering::Equal;
        }
        if left.element != right.element || left.color == right.color {
            return Ordering::Equal;
        }
        if left.color == self.highlight {
            Ordering::Greater
        } else if right.color == self.highlight {
            Ordering::Less
        } else {
            Ordering::Equal
        }
    }

    /// Stable in-place sort putting highlighted points after their counterparts.
    ///
    /// `compare` is not a total order across elements, so the sort keys on
    /// highlight membership instead: highlighted points move behind every other
    /// mark and both groups keep their relative order.
    pub fn sort(&self, marks: &mut [VisualMark]) {
        marks.sort_by_key(|mark| self.is_highlighted(mark));
    }

    fn is_highlighted(&self, mark: &VisualMark) -> bool {
        mark.is_point() && mark.color == self.highlight
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::RenderComparator;
    use crate::render::primitives::{Color, MarkKind, VisualMark};

    const HIGHLIGHT: Color = Color::rgb(1.0, 0.0, 0.0);
    const BASE: Color = Color::rgb(0.5, 0.5, 0.5);

    #[test]
    fn highlighted_point_renders_last() {
        let cmp = RenderComparator::new(HIGHLIGHT);
        let brushed = VisualMark::point(7, HIGHLIGHT);
        let complete = VisualMark::point(7, BASE);
        assert_eq!(cmp.compare(&brushed, &complete), Ordering::Greater);
        assert_eq!(cmp.compare(&complete, &brushed), Ordering::Less);
    }

    #[test]
    fn sort_keeps_other_marks_in_order() {
        let cmp = RenderComparator::new(HIGHLIGHT);
        let mut marks = vec![
            VisualMark::point(1, HIGHLIGHT),
            VisualMark::new(MarkKind::Bar, 2, HIGHLIGHT),
            VisualMark::point(3, BASE),
            VisualMark::point(1, BASE),
        ];
        cmp.sort(&mut marks);
        assert_eq!(
            marks,
            vec![
                VisualMark::new(MarkKind::Bar, 2, HIGHLIGHT),
                VisualMark::point(3, BASE),
                VisualMark::point(1, BASE),
                VisualMark::point(1, HIGHLIGHT),
            ]
        );
    }

    #[test]
    fn non_points_compare_equal() {
        let cmp = RenderComparator::new(HIGHLIGHT);
        let bar = VisualMark::new(MarkKind::Bar, 7, HIGHLIGHT);
        let point = VisualMark::point(7, BASE);
        assert_eq!(cmp.compare(&bar, &point), Ordering::Equal);
    }
}
