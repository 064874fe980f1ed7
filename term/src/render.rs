use std::io::{self, Write};

use timebomb_core::{CellLabel, Snapshot};

pub(crate) const fn glyph(label: CellLabel) -> char {
    match label {
        CellLabel::Blank => '#',
        CellLabel::Flag => '!',
        CellLabel::Count(0) => ' ',
        CellLabel::Count(count) => (b'0' + count) as char,
        CellLabel::Mine => '*',
    }
}

/// Draws the board with row numbers down the left and column numbers across the top.
pub(crate) fn render(snapshot: &Snapshot, out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "Time Left: {}    Mines left: {}",
        snapshot.time_remaining, snapshot.mines_left
    )?;

    write!(out, "   ")?;
    for y in 0..snapshot.size.1 {
        write!(out, "{:>3}", y)?;
    }
    writeln!(out)?;

    for (x, row) in snapshot.labels.rows().into_iter().enumerate() {
        write!(out, "{:>3}", x)?;
        for &label in row {
            write!(out, "{:>3}", glyph(label))?;
        }
        writeln!(out)?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use timebomb_core::{Board, MineLayout};

    #[test]
    fn glyphs_are_distinct_for_covered_and_empty() {
        assert_eq!(glyph(CellLabel::Blank), '#');
        assert_eq!(glyph(CellLabel::Count(0)), ' ');
        assert_eq!(glyph(CellLabel::Count(8)), '8');
    }

    #[test]
    fn renders_header_and_rows() {
        let layout = MineLayout::from_mine_coords((4, 4), &[(0, 0)]).unwrap();
        let mut board = Board::new(layout);
        board.toggle_flag((0, 0)).unwrap();
        board.reveal((3, 3)).unwrap();

        let mut out = Vec::new();
        render(&Snapshot::from_board(&board, 7), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "Time Left: 7    Mines left: 0");
        assert_eq!(lines[1], "     0  1  2  3");
        assert_eq!(lines[2], "  0  !  1      ");
        assert_eq!(lines[5], "  3            ");
        assert_eq!(lines.len(), 6);
    }
}
