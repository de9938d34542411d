//! Pagination control logic
//!
//! Pages are stored zero-based and shown one-based. All conversion between
//! the two goes through [`PageControl`].

use crate::constants::{PAGE_STRIP_BOUNDARIES, PAGE_STRIP_SIBLINGS};
use redlist_rs::PageResult;
use std::collections::BTreeSet;
use std::ops::RangeInclusive;

/// One entry of the rendered page strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot {
    /// A one-based page number, flagged if it is the current page
    Page { number: u32, current: bool },
    /// Elided run of pages
    Gap,
}

/// Current page and page count of a result
///
/// # Examples
///
/// ```
/// use redlist_explorer_core::pagination::PageControl;
///
/// let control = PageControl::new(0, 5);
/// assert_eq!(control.display_page(), 1);
/// assert_eq!(control.index_for_display(5), Some(4));
/// assert_eq!(control.index_for_display(6), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageControl {
    /// Zero-based current page
    current: u32,
    /// Total pages (at least 1)
    total: u32,
}

impl Default for PageControl {
    fn default() -> Self {
        Self::new(0, 1)
    }
}

impl PageControl {
    /// Build a control, clamping into a valid shape
    pub fn new(current: u32, total: u32) -> Self {
        let total = total.max(1);
        Self {
            current: current.min(total - 1),
            total,
        }
    }

    /// Build a control from a fetched page, keeping the requested page as current
    pub fn for_result(requested: u32, page: &PageResult) -> Self {
        Self::new(requested, page.max_pages)
    }

    /// Zero-based current page
    pub fn current_index(&self) -> u32 {
        self.current
    }

    /// One-based current page as shown to the user
    pub fn display_page(&self) -> u32 {
        to_display(self.current)
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// One-based pages the control can show
    pub fn display_range(&self) -> RangeInclusive<u32> {
        1..=self.total
    }

    /// Convert a one-based page into a zero-based index, rejecting values outside `[1, total]`
    pub fn index_for_display(&self, display: u32) -> Option<u32> {
        if self.display_range().contains(&display) {
            Some(display - 1)
        } else {
            None
        }
    }

    /// Zero-based index of the next page, if any
    pub fn next(&self) -> Option<u32> {
        (self.current + 1 < self.total).then_some(self.current + 1)
    }

    /// Zero-based index of the previous page, if any
    pub fn prev(&self) -> Option<u32> {
        self.current.checked_sub(1)
    }

    pub fn first(&self) -> u32 {
        0
    }

    pub fn last(&self) -> u32 {
        self.total - 1
    }

    /// "Page P of M"
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.display_page(), self.total)
    }

    /// Page strip with boundary pages, siblings around the current page, and gaps
    pub fn strip(&self) -> Vec<PageSlot> {
        let current = self.display_page();
        let mut pages = BTreeSet::new();

        for n in 1..=PAGE_STRIP_BOUNDARIES.min(self.total) {
            pages.insert(n);
            pages.insert(self.total - (n - 1));
        }
        let low = current.saturating_sub(PAGE_STRIP_SIBLINGS).max(1);
        let high = current.saturating_add(PAGE_STRIP_SIBLINGS).min(self.total);
        pages.extend(low..=high);

        let mut slots = Vec::with_capacity(pages.len() * 2);
        let mut previous = 0;
        for number in pages {
            let step = number - previous;
            if step > 1 {
                if step == 2 {
                    // Show a lone hidden page instead of a gap
                    slots.push(PageSlot::Page {
                        number: previous + 1,
                        current: previous + 1 == current,
                    });
                } else {
                    slots.push(PageSlot::Gap);
                }
            }
            slots.push(PageSlot::Page {
                number,
                current: number == current,
            });
            previous = number;
        }
        slots
    }
}

/// Zero-based index to one-based display number
pub fn to_display(index: u32) -> u32 {
    index + 1
}

/// Parse one-based user input into a zero-based index within `control`
pub fn parse_display_page(input: &str, control: &PageControl) -> Option<u32> {
    let display: u32 = input.trim().parse().ok()?;
    control.index_for_display(display)
}
