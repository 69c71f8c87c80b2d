//! Kani arbitrary implementations for board types.

use super::{Board, Cell, Player};

impl kani::Arbitrary for Player {
    fn any() -> Self {
        if kani::any() { Player::X } else { Player::O }
    }
}

impl kani::Arbitrary for Cell {
    fn any() -> Self {
        let tag: u8 = kani::any();
        kani::assume(tag < 3);
        match tag {
            0 => Cell::Empty,
            1 => Cell::X,
            _ => Cell::O,
        }
    }
}

impl kani::Arbitrary for Board {
    fn any() -> Self {
        Board::from_cells([
            kani::any(),
            kani::any(),
            kani::any(),
            kani::any(),
            kani::any(),
            kani::any(),
            kani::any(),
            kani::any(),
            kani::any(),
        ])
    }
}
