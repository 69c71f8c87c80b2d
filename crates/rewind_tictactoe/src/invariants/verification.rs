//! Bounded proofs of the rules and session invariants using Kani.

#[cfg(kani)]
mod proofs {
    use crate::{
        Board, Invariant, InvariantSet, Outcome, Player, Session, SessionInvariants,
        SingleStepInvariant, apply_move, evaluate, is_legal,
    };

    /// A won outcome always names a line fully held by the winner.
    #[kani::proof]
    fn verify_won_line_is_held() {
        let board: Board = kani::any();

        if let Outcome::Won { player, line } = evaluate(&board) {
            for pos in line.positions() {
                assert!(board.get(pos) == player.cell());
            }
        }
    }

    /// A legal move changes exactly the chosen cell and leaves the input intact.
    #[kani::proof]
    fn verify_apply_move_single_cell() {
        let board: Board = kani::any();
        let index: usize = kani::any();
        let player: Player = kani::any();
        let before = board;

        match apply_move(&board, index, player) {
            Ok(next) => {
                assert!(is_legal(&before, index));
                assert!(board == before);
                for (i, cell) in next.cells().iter().enumerate() {
                    if i == index {
                        assert!(*cell == player.cell());
                    } else {
                        assert!(*cell == before.cells()[i]);
                    }
                }
            }
            Err(_) => assert!(!is_legal(&before, index)),
        }
    }

    /// Invariants survive any three plays and one jump.
    #[kani::proof]
    #[kani::unwind(5)]
    fn verify_session_invariants() {
        let mut session = Session::new();
        for _ in 0..3 {
            let index: usize = kani::any();
            let _ = session.play(index);
        }
        let jump: usize = kani::any();
        let _ = session.jump_to(jump);
        let index: usize = kani::any();
        let _ = session.play(index);

        assert!(SessionInvariants::check_all(&session).is_ok());
        assert!(SingleStepInvariant::holds(&session));
    }
}
