/// Edge handling when a cell's neighbor falls outside the row.
///
/// `Wrap` is the default and is what every existing carpet pattern was
/// generated with; earlier tooling wrapped unconditionally even when a
/// flat surface was requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BoundaryPolicy {
    /// Cells live on a cylinder: column 0 and the last column are adjacent
    #[default]
    Wrap,
    /// Cells live on a flat strip: neighbors beyond the edges read as dead
    Fixed,
}

impl BoundaryPolicy {
    /// Resolve the (left, center, right) neighbor bits for column `x`.
    #[inline]
    pub fn neighbors(self, row: &[bool], x: usize) -> (bool, bool, bool) {
        let w = row.len();
        debug_assert!(x < w);
        let center = row[x];
        match self {
            BoundaryPolicy::Wrap => {
                let left = row[(x + w - 1) % w];
                let right = row[(x + 1) % w];
                (left, center, right)
            }
            BoundaryPolicy::Fixed => {
                let left = x > 0 && row[x - 1];
                let right = x + 1 < w && row[x + 1];
                (left, center, right)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_joins_first_and_last_columns() {
        let row = [true, false, false, false, true];
        let (left, center, right) = BoundaryPolicy::Wrap.neighbors(&row, 0);
        assert_eq!((left, center, right), (true, true, false));
        let (left, center, right) = BoundaryPolicy::Wrap.neighbors(&row, 4);
        assert_eq!((left, center, right), (false, true, true));
    }

    #[test]
    fn test_wrap_interior_columns() {
        let row = [true, false, true, false, true];
        assert_eq!(BoundaryPolicy::Wrap.neighbors(&row, 2), (false, true, false));
    }

    #[test]
    fn test_fixed_edges_read_dead() {
        let row = [true, false, false, false, true];
        assert_eq!(BoundaryPolicy::Fixed.neighbors(&row, 0), (false, true, false));
        assert_eq!(BoundaryPolicy::Fixed.neighbors(&row, 4), (false, true, false));
    }

    #[test]
    fn test_fixed_matches_wrap_away_from_edges() {
        let row = [true, true, false, true, true];
        for x in 1..4 {
            assert_eq!(
                BoundaryPolicy::Fixed.neighbors(&row, x),
                BoundaryPolicy::Wrap.neighbors(&row, x),
            );
        }
    }

    #[test]
    fn test_single_column_wrap_is_self_adjacent() {
        let row = [true];
        assert_eq!(BoundaryPolicy::Wrap.neighbors(&row, 0), (true, true, true));
        assert_eq!(BoundaryPolicy::Fixed.neighbors(&row, 0), (false, true, false));
    }
}
