use crate::error::SteganoError;
use crate::result::Result;

/// A pixel visited by a [`Traversal`], by linear index and by coordinates
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct PixelPosition {
    pub index: usize,
    pub x: u32,
    pub y: u32,
}

/// Walks the pixels of an image in the order data is hidden and unveiled.
///
/// The walk starts at `padding` and moves `spacing` pixels forward per step.
/// Once it moves past the last pixel, the padding is lowered by one and the
/// walk restarts at the new padding. Encoder and decoder must consume the very
/// same sequence, including every one of those restarts, so they share this type.
///
/// When a restart is needed but the padding is already `0`, the traversal is
/// exhausted and yields no further pixels.
///
/// ## Example of usage
/// ```rust
/// use stegopix_core::media::image::traversal::Traversal;
///
/// // 2x2 image, start at pixel 2, jump 3 pixels per step
/// let indices: Vec<usize> = Traversal::new(2, 2, 2, 3)
///     .expect("parameters are valid")
///     .map(|p| p.index)
///     .collect();
///
/// assert_eq!(indices, vec![2, 1, 0, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct Traversal {
    width: usize,
    pixel_count: usize,
    padding: usize,
    spacing: usize,
    pos: usize,
    exhausted: bool,
}

impl Traversal {
    pub fn new(width: u32, height: u32, padding: usize, spacing: usize) -> Result<Self> {
        let pixel_count = width as usize * height as usize;
        if pixel_count == 0 {
            return Err(SteganoError::DegenerateTraversal("the image has no pixels"));
        }
        if spacing == 0 {
            return Err(SteganoError::DegenerateTraversal(
                "spacing must be at least 1",
            ));
        }
        if padding >= pixel_count {
            return Err(SteganoError::DegenerateTraversal(
                "padding lies outside of the image",
            ));
        }

        Ok(Self {
            width: width as usize,
            pixel_count,
            padding,
            spacing,
            pos: padding,
            exhausted: false,
        })
    }

    /// number of pixels of the traversed image
    pub fn pixel_count(&self) -> usize {
        self.pixel_count
    }

    /// the current restart point, lowered by one on every wrap
    pub fn padding(&self) -> usize {
        self.padding
    }

    /// returns the pixel to visit and moves the cursor one step forward
    pub fn advance(&mut self) -> Option<PixelPosition> {
        if self.exhausted {
            return None;
        }

        let index = self.pos;
        let visited = PixelPosition {
            index,
            x: (index % self.width) as u32,
            y: (index / self.width) as u32,
        };

        match self.pos.checked_add(self.spacing) {
            Some(pos) if pos < self.pixel_count => self.pos = pos,
            _ => self.wrap(),
        }

        Some(visited)
    }

    /// number of pixels visited before the walk ends or returns to a pixel it already visited
    pub fn reach(self) -> usize {
        let mut visited = vec![false; self.pixel_count];

        self.take_while(|p| !std::mem::replace(&mut visited[p.index], true))
            .count()
    }

    fn wrap(&mut self) {
        match self.padding.checked_sub(1) {
            Some(padding) => {
                self.padding = padding;
                self.pos = padding;
            }
            None => self.exhausted = true,
        }
    }
}

impl Iterator for Traversal {
    type Item = PixelPosition;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coordinates(t: Traversal, steps: usize) -> Vec<(u32, u32)> {
        t.take(steps).map(|p| (p.x, p.y)).collect()
    }

    #[test]
    fn should_walk_row_by_row_without_padding_and_spacing() {
        let t = Traversal::new(4, 4, 0, 1).unwrap();
        let indices: Vec<usize> = t.map(|p| p.index).collect();

        assert_eq!(indices, (0..16).collect::<Vec<_>>());
    }

    #[test]
    fn should_map_linear_index_to_coordinates() {
        let t = Traversal::new(3, 2, 1, 2).unwrap();

        assert_eq!(coordinates(t, 3), vec![(1, 0), (0, 1), (2, 1)]);
    }

    #[test]
    fn should_restart_one_pixel_before_the_last_padding_on_every_wrap() {
        let mut t = Traversal::new(5, 2, 4, 3).unwrap();

        // 4, 7 -> wrap (padding 3)
        assert_eq!(t.next().map(|p| p.index), Some(4));
        assert_eq!(t.next().map(|p| p.index), Some(7));
        assert_eq!(t.padding(), 3);
        // 3, 6, 9 -> wrap (padding 2)
        assert_eq!(t.next().map(|p| p.index), Some(3));
        assert_eq!(t.next().map(|p| p.index), Some(6));
        assert_eq!(t.next().map(|p| p.index), Some(9));
        assert_eq!(t.padding(), 2);
        // 2, 5, 8 -> wrap (padding 1)
        assert_eq!(t.next().map(|p| p.index), Some(2));
        assert_eq!(t.next().map(|p| p.index), Some(5));
        assert_eq!(t.next().map(|p| p.index), Some(8));
        assert_eq!(t.padding(), 1);
    }

    #[test]
    fn should_wrap_when_reaching_exactly_the_pixel_count() {
        let t = Traversal::new(4, 1, 1, 3).unwrap();
        let indices: Vec<usize> = t.map(|p| p.index).collect();

        // index 4 would be one row below the image
        assert_eq!(indices, vec![1, 0, 3]);
    }

    #[test]
    fn should_be_exhausted_when_padding_cannot_drift_further() {
        let t = Traversal::new(2, 2, 2, 3).unwrap();

        assert_eq!(coordinates(t, 10), vec![(0, 1), (1, 0), (0, 0), (1, 1)]);
    }

    #[test]
    fn should_wrap_on_every_step_for_huge_spacing() {
        let t = Traversal::new(3, 3, 4, usize::MAX).unwrap();
        let indices: Vec<usize> = t.map(|p| p.index).collect();

        assert_eq!(indices, vec![4, 3, 2, 1, 0]);
    }

    #[test]
    fn should_produce_the_same_sequence_for_the_same_parameters() {
        let first: Vec<PixelPosition> = Traversal::new(7, 5, 20, 6).unwrap().take(64).collect();
        let second: Vec<PixelPosition> = Traversal::new(7, 5, 20, 6).unwrap().take(64).collect();

        assert_eq!(first, second);
    }

    #[test]
    fn should_reach_every_pixel_of_a_plain_walk() {
        assert_eq!(Traversal::new(4, 4, 0, 1).unwrap().reach(), 16);
        // 2, 1, 0, 3 then exhausted
        assert_eq!(Traversal::new(2, 2, 2, 3).unwrap().reach(), 4);
    }

    #[test]
    fn should_stop_reaching_at_the_first_revisited_pixel() {
        // 3, 4 -> wrap to 2, 3 again
        assert_eq!(Traversal::new(5, 1, 3, 1).unwrap().reach(), 3);
        // 50..=99 -> wrap to 49, 50 again
        assert_eq!(Traversal::new(10, 10, 50, 1).unwrap().reach(), 51);
    }

    #[test]
    fn should_reject_degenerate_parameters() {
        assert!(matches!(
            Traversal::new(0, 4, 0, 1),
            Err(SteganoError::DegenerateTraversal(_))
        ));
        assert!(matches!(
            Traversal::new(4, 4, 0, 0),
            Err(SteganoError::DegenerateTraversal(_))
        ));
        assert!(matches!(
            Traversal::new(4, 4, 16, 1),
            Err(SteganoError::DegenerateTraversal(_))
        ));
    }
}
