//! Pagination over a filtered view.
//!
//! `paginate` is pure: it never fails and always produces a page inside
//! `[1, page_count]`, even for an empty view or an out-of-range request.

use std::num::NonZeroUsize;

// ===== PageSize =====

/// Number of records per page. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    /// Records per page when nothing is configured.
    pub const DEFAULT: usize = 10;

    /// Smart constructor: returns `None` for zero.
    pub fn new(size: usize) -> Option<Self> {
        NonZeroUsize::new(size).map(Self)
    }

    /// Records per page.
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl From<NonZeroUsize> for PageSize {
    fn from(size: NonZeroUsize) -> Self {
        Self(size)
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(NonZeroUsize::new(Self::DEFAULT).unwrap_or(NonZeroUsize::MIN))
    }
}

// ===== Page =====

/// One page of a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// Current page, 1-based, clamped into `[1, page_count]`.
    pub page: usize,
    /// Records shown on this page, at most `page_size` long.
    pub slice: &'a [T],
    /// Total pages, at least 1.
    pub page_count: usize,
}

/// Number of pages needed for `len` items; at least 1.
pub fn page_count(len: usize, page_size: PageSize) -> usize {
    len.div_ceil(page_size.get()).max(1)
}

/// Clamp a requested page into `[1, page_count]`.
pub fn clamp_page(requested: usize, page_count: usize) -> usize {
    requested.clamp(1, page_count.max(1))
}

/// Cut the `requested` page out of `view`.
pub fn paginate<T>(view: &[T], page_size: PageSize, requested: usize) -> Page<'_, T> {
    let page_count = page_count(view.len(), page_size);
    let page = clamp_page(requested, page_count);
    let start = ((page - 1) * page_size.get()).min(view.len());
    let end = (start + page_size.get()).min(view.len());

    Page {
        page,
        slice: &view[start..end],
        page_count,
    }
}

// ===== Navigation =====

/// Page navigation intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    /// Jump to page 1.
    First,
    /// One page back; no-op on the first page.
    Previous,
    /// One page forward; no-op on the last page.
    Next,
    /// Jump to the last page.
    Last,
    /// Jump to a page number, clamped.
    Goto(usize),
}

/// Apply `nav` to `current`, returning the new clamped page.
pub fn navigate(current: usize, page_count: usize, nav: PageNav) -> usize {
    let current = clamp_page(current, page_count);
    let target = match nav {
        PageNav::First => 1,
        PageNav::Previous => current.saturating_sub(1),
        PageNav::Next => current.saturating_add(1),
        PageNav::Last => page_count,
        PageNav::Goto(page) => page,
    };
    clamp_page(target, page_count)
}
