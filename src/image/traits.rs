//! Pixel access shared by gray pages and foreground masks.

use std::ops::Range;

/// Read access to a row-major, single-channel raster.
pub trait ImageView {
    type Pixel: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;

    /// Scanline `y`, exactly `width()` pixels long.
    fn row(&self, y: usize) -> &[Self::Pixel];

    #[inline]
    fn pixel(&self, x: usize, y: usize) -> Self::Pixel {
        self.row(y)[x]
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    /// Scanlines, top to bottom.
    fn rows(&self) -> Rows<'_, Self>
    where
        Self: Sized,
    {
        Rows {
            image: self,
            lines: 0..self.height(),
        }
    }

    /// Number of pixels for which `pred` holds.
    fn count_where<F>(&self, pred: F) -> usize
    where
        Self: Sized,
        F: Fn(Self::Pixel) -> bool,
    {
        self.rows()
            .map(|row| row.iter().filter(|&&v| pred(v)).count())
            .sum()
    }
}

pub trait ImageViewMut: ImageView {
    fn row_mut(&mut self, y: usize) -> &mut [Self::Pixel];
}

/// Iterator over the scanlines of an [`ImageView`].
pub struct Rows<'a, I: ImageView> {
    image: &'a I,
    lines: Range<usize>,
}

impl<'a, I: ImageView> Iterator for Rows<'a, I> {
    type Item = &'a [I::Pixel];

    fn next(&mut self) -> Option<Self::Item> {
        let y = self.lines.next()?;
        Some(self.image.row(y))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.lines.size_hint()
    }
}

impl<I: ImageView> DoubleEndedIterator for Rows<'_, I> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let y = self.lines.next_back()?;
        Some(self.image.row(y))
    }
}

impl<I: ImageView> ExactSizeIterator for Rows<'_, I> {}
