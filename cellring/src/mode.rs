/// How strictly transfers are checked against the ring contents.
///
/// `Legacy` only rejects runs longer than the capacity. Puts may overwrite
/// unread cells, and a put that lands `head` on `tail` makes the ring read as
/// empty. Reads and watches past the written cells return stale data.
///
/// `Checked` keeps one slot free so that `head == tail` is never reached by a
/// put: at most `capacity - 1` cells are stored. Puts are limited to the free
/// space and reads/watches to the available cells.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Legacy,
    Checked,
}

impl Mode {
    #[must_use]
    pub const fn is_checked(self) -> bool {
        matches!(self, Mode::Checked)
    }
}
