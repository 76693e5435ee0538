/// Axis-aligned box in screen pixels. Positions may sit off screen for a
/// tick; only the owning entity decides whether that is corrected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Rect { x, y, width, height }
    }

    pub fn translate(&self, dx: i32, dy: i32) -> Self {
        Rect::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> i32 {
        self.x + self.width / 2
    }

    /// Touching edges do not count.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_are_derived_from_position_and_size() {
        let r = Rect::new(10, 20, 30, 40);
        assert_eq!((r.left(), r.right(), r.top(), r.bottom()), (10, 40, 20, 60));
        assert_eq!(r.center_x(), 25);
    }

    #[test]
    fn translate_keeps_size() {
        let r = Rect::new(0, 0, 5, 6).translate(-3, 7);
        assert_eq!(r, Rect::new(-3, 7, 5, 6));
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(!a.overlaps(&Rect::new(10, 0, 10, 10)));
        assert!(!a.overlaps(&Rect::new(0, 10, 10, 10)));
        assert!(a.overlaps(&Rect::new(9, 9, 10, 10)));
    }

    #[test]
    fn containment_counts_as_overlap() {
        let outer = Rect::new(100, 100, 30, 30);
        let inner = Rect::new(105, 105, 10, 10);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }
}
