/// Scroll window over one category's filtered rows.
///
/// `page` is the maximum distance the selection may sit from the window
/// start; a panel drawing `page + 1` rows starting at `offset` always
/// contains the selection. Invariant after every operation:
/// `offset <= selected <= offset + page`, with `selected < len` and
/// `offset <= max(0, len - page)` whenever `len > 0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    selected: usize,
    offset: usize,
}

impl Viewport {
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Move the selection down one row. No-op at the last row.
    pub fn move_down(&mut self, len: usize, page: usize) {
        if len == 0 || self.selected + 1 >= len {
            return;
        }
        self.selected += 1;
        if self.selected > self.offset + page {
            self.offset += 1;
        }
    }

    /// Move the selection up one row. No-op at row 0.
    pub fn move_up(&mut self) {
        if self.selected == 0 {
            return;
        }
        self.selected -= 1;
        if self.selected < self.offset {
            self.offset -= 1;
        }
    }

    pub fn move_top(&mut self) {
        self.selected = 0;
        self.offset = 0;
    }

    pub fn move_bottom(&mut self, len: usize, page: usize) {
        if len == 0 {
            self.move_top();
            return;
        }
        self.selected = len - 1;
        self.offset = len.saturating_sub(page).min(self.selected);
    }

    /// Re-establish the invariant after the underlying collection shrank,
    /// e.g. when a filter removed rows. Must be called after every filter
    /// change or category switch.
    pub fn reclamp(&mut self, len: usize, page: usize) {
        if len == 0 {
            self.move_top();
            return;
        }
        if self.selected >= len {
            self.selected = len - 1;
        }
        let max_offset = len.saturating_sub(page);
        if self.offset > max_offset {
            self.offset = max_offset;
        }
        if self.offset > self.selected {
            self.offset = self.selected;
        }
        if self.selected > self.offset + page {
            self.offset = self.selected - page;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invariant_holds(vp: &Viewport, len: usize, page: usize) -> bool {
        let sel_ok = len == 0 || vp.selected() < len;
        vp.offset() <= vp.selected() && vp.selected() <= vp.offset() + page && sel_ok
    }

    #[test]
    fn five_rows_page_three_walkthrough() {
        let mut vp = Viewport::default();

        for _ in 0..4 {
            vp.move_down(5, 3);
        }
        assert_eq!((vp.selected(), vp.offset()), (4, 1));

        vp.move_top();
        assert_eq!((vp.selected(), vp.offset()), (0, 0));

        vp.move_bottom(5, 3);
        assert_eq!((vp.selected(), vp.offset()), (4, 2));
    }

    #[test]
    fn move_down_is_noop_at_last_row() {
        let mut vp = Viewport::default();
        vp.move_bottom(3, 10);
        let before = vp;
        vp.move_down(3, 10);
        assert_eq!(vp, before);
    }

    #[test]
    fn move_up_is_noop_at_row_zero() {
        let mut vp = Viewport::default();
        vp.move_up();
        assert_eq!((vp.selected(), vp.offset()), (0, 0));
    }

    #[test]
    fn reclamp_after_shrink_lands_on_last_row() {
        let mut vp = Viewport::default();
        for _ in 0..7 {
            vp.move_down(10, 3);
        }
        assert_eq!(vp.selected(), 7);

        // Filter narrowed the collection to 2 rows.
        vp.reclamp(2, 3);
        assert_eq!((vp.selected(), vp.offset()), (1, 0));
    }

    #[test]
    fn reclamp_to_empty_resets() {
        let mut vp = Viewport::default();
        for _ in 0..5 {
            vp.move_down(8, 2);
        }
        vp.reclamp(0, 2);
        assert_eq!((vp.selected(), vp.offset()), (0, 0));
    }

    #[test]
    fn invariant_survives_arbitrary_op_sequences() {
        // Deterministic pseudo-random walk over ops, lengths and pages.
        let mut seed: u64 = 0x9e3779b97f4a7c15;
        let mut next = move || {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            seed
        };

        let mut vp = Viewport::default();
        let mut len = 9usize;
        let mut page = 4usize;
        for _ in 0..2000 {
            match next() % 6 {
                0 => vp.move_down(len, page),
                1 => vp.move_up(),
                2 => vp.move_top(),
                3 => vp.move_bottom(len, page),
                4 => {
                    len = (next() % 15) as usize;
                    vp.reclamp(len, page);
                }
                _ => {
                    page = (next() % 6) as usize;
                    vp.reclamp(len, page);
                }
            }
            assert!(
                invariant_holds(&vp, len, page),
                "invariant broken: sel={} off={} len={} page={}",
                vp.selected(),
                vp.offset(),
                len,
                page
            );
        }
    }

    #[test]
    fn page_zero_keeps_selection_pinned_to_offset() {
        let mut vp = Viewport::default();
        vp.move_down(5, 0);
        assert_eq!((vp.selected(), vp.offset()), (1, 1));
        vp.move_bottom(5, 0);
        assert_eq!((vp.selected(), vp.offset()), (4, 4));
    }
}
