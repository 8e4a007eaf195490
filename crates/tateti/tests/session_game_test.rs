//! Full games through the session controller against the real heuristic.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tateti::{GameSession, HeuristicSelector, Mark, Outcome, Turn};
use tateti_engine::evaluate;

fn seeded_session(seed: u64) -> GameSession<HeuristicSelector<StdRng>> {
    GameSession::new(HeuristicSelector::with_rng(
        Mark::O,
        Mark::X,
        StdRng::seed_from_u64(seed),
    ))
}

#[test]
fn test_games_always_finish() {
    for seed in 0..50 {
        let mut session = seeded_session(seed);
        assert!(session.start());

        let mut turns = 0;
        let end = loop {
            // Human takes the highest free square.
            let index = *session.board().empty_cells().last().expect("board full mid-game");
            match session.play(index).expect("legal move rejected") {
                Turn::Finished(end) => break end,
                Turn::Continued { reply } => {
                    assert_eq!(session.board().count(Mark::O), turns + 1, "reply {reply}");
                }
                Turn::Ignored => panic!("free square ignored"),
            }
            turns += 1;
            assert!(turns < 5, "game should end within five human moves");
        };

        assert!(end.outcome().is_over());
        assert!(!session.is_active());
        assert_eq!(session.outcome(), *end.outcome());
    }
}

#[test]
fn test_blocked_line_then_center() {
    let mut session = seeded_session(3);
    session.start();

    // Corner first: the computer takes the center.
    assert_eq!(session.play(0), Ok(Turn::Continued { reply: 4 }));
    // Two in the top row: the computer blocks at 2.
    assert_eq!(session.play(1), Ok(Turn::Continued { reply: 2 }));
}

#[test]
fn test_fork_beats_the_heuristic() {
    // X takes opposite corners 0 and 8 around the computer's center. When the
    // random reply lands on edge 3 or 5, one more corner makes two threats and
    // the heuristic can only block one of them.
    let mut won = false;
    for seed in 0..64 {
        let mut session = seeded_session(seed);
        session.start();
        session.play(0).expect("first move");
        let Ok(Turn::Continued { reply }) = session.play(8) else {
            continue;
        };
        let corner = match reply {
            3 => 2,
            5 => 6,
            _ => continue,
        };
        let Ok(Turn::Continued { reply: block }) = session.play(corner) else {
            panic!("fork move should not end the game");
        };
        let finisher = session
            .board()
            .empty_cells()
            .into_iter()
            .find(|&i| {
                let mut board = session.board().clone();
                board.set_cell(i, Mark::X).is_ok() && evaluate(&board) == Outcome::PlayerWins
            })
            .expect("fork leaves a winning square");

        let Ok(Turn::Finished(end)) = session.play(finisher) else {
            panic!("winning move did not finish the game (block was {block})");
        };
        assert_eq!(*end.outcome(), Outcome::PlayerWins);
        won = true;
        break;
    }
    assert!(won, "no seed produced a fork");
}
