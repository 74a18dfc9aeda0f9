/// Default distance from the bottom, in pixels, below which more items are requested.
pub const DEFAULT_SCROLL_THRESHOLD: u32 = 200;

/// One sampled scroll position of the content viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollSample {
    /// Offset of the viewport top from the content top.
    pub scroll_top: u32,
    /// Height of the visible viewport.
    pub viewport_height: u32,
    /// Full height of the scrolled content.
    pub content_height: u32,
}

impl ScrollSample {
    /// Unscrolled distance left below the viewport.
    pub fn remaining(&self) -> u32 {
        self.content_height
            .saturating_sub(self.scroll_top.saturating_add(self.viewport_height))
    }

    /// Whether this sample is close enough to the bottom to ask for more.
    ///
    /// Firing repeatedly is fine; the controller absorbs duplicates.
    pub fn near_bottom(&self, threshold: u32) -> bool {
        self.remaining() < threshold
    }
}
