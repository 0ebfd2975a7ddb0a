/// Number of transactions requested per ledger call
pub const DEFAULT_PAGE_SIZE: u64 = 20;

/// One ledger request covering sequence numbers `[offset, offset + limit)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// 1-based, page 1 holds the newest transactions
    pub page: u64,
    pub offset: u64,
    pub limit: u64,
}

impl PageWindow {
    pub fn end(&self) -> u64 {
        self.offset + self.limit
    }
}

/// Split `total` account transactions into windows walking backward from the
/// newest one. Page `p` covers `[max(0, total - p*size), total - (p-1)*size)`,
/// so only the oldest page may be shorter than `page_size`.
pub fn page_windows(total: u64, page_size: u64) -> Vec<PageWindow> {
    if page_size == 0 {
        return Vec::new();
    }

    let total_pages = total.div_ceil(page_size);
    (1..=total_pages)
        .filter_map(|page| {
            let end = total.saturating_sub((page - 1).saturating_mul(page_size));
            let offset = total.saturating_sub(page.saturating_mul(page_size));
            let limit = end.saturating_sub(offset).min(page_size);
            (limit > 0).then_some(PageWindow {
                page,
                offset,
                limit,
            })
        })
        .collect()
}
