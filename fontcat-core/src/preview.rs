//! Preview text size steps (made by FontLab https://www.fontlab.com/)

/// Pixel sizes cycled through for cursive faces, which read small at body sizes.
pub const CURSIVE_PREVIEW_SIZES: &[u16] = &[20, 22, 24];
/// Pixel sizes cycled through for every other category.
pub const DEFAULT_PREVIEW_SIZES: &[u16] = &[16, 18, 20, 22];

/// Cycling preview size for a card, chosen by the font's stored category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewScale {
    steps: &'static [u16],
    index: usize,
}

impl PreviewScale {
    pub fn for_category(category: &str) -> Self {
        let steps = if category == "cursive" {
            CURSIVE_PREVIEW_SIZES
        } else {
            DEFAULT_PREVIEW_SIZES
        };
        Self { steps, index: 0 }
    }

    pub fn current(&self) -> u16 {
        self.steps[self.index]
    }

    /// Step to the next size, wrapping to the smallest after the largest.
    pub fn advance(&mut self) -> u16 {
        self.index = (self.index + 1) % self.steps.len();
        self.current()
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    pub fn steps(&self) -> &'static [u16] {
        self.steps
    }
}
