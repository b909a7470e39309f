use thorview_core::board::{all_symmetries, parse_move_list, Position, Square, Symmetry};

fn after(moves: &str) -> Position {
    let mut p = Position::initial();
    for sq in parse_move_list(moves).unwrap() {
        p = p.play_with_forced_pass(sq).unwrap();
    }
    p
}

fn samples() -> Vec<Position> {
    vec![
        Position::initial(),
        after("f5"),
        after("f5d6c3"),
        after("f5f6e6f4e3c5c4"),
        after("f5d6c3d3c4f4c5b3c2e6c6b4b5d2e3a6c1b1"),
    ]
}

#[test]
fn inverse_undoes_every_symmetry() {
    for p in samples() {
        for s in Symmetry::ALL {
            let image = s.apply_position(&p);
            assert_eq!(s.inverse().apply_position(&image), p, "symmetry {}", s.index());
        }
    }
}

#[test]
fn composition_is_closed_and_associative() {
    let p = after("f5d6c3d3");
    for a in Symmetry::ALL {
        assert_eq!(a.then(Symmetry::IDENTITY), a);
        assert_eq!(Symmetry::IDENTITY.then(a), a);
        assert_eq!(a.then(a.inverse()), Symmetry::IDENTITY);
        for b in Symmetry::ALL {
            let ab = a.then(b);
            assert_eq!(ab.apply_position(&p), b.apply_position(&a.apply_position(&p)));
            for c in Symmetry::ALL {
                assert_eq!(ab.then(c), a.then(b.then(c)));
            }
        }
    }
}

#[test]
fn images_keep_disc_counts_and_mover() {
    for p in samples() {
        for img in all_symmetries(&p) {
            assert_eq!(img.black().count(), p.black().count());
            assert_eq!(img.white().count(), p.white().count());
            assert_eq!(img.to_move(), p.to_move());
            assert_eq!(img.legal_moves().count(), p.legal_moves().count());
        }
    }
}

#[test]
fn start_position_is_fixed_by_the_diagonal_symmetries() {
    let start = Position::initial();
    let fixed: Vec<u8> = Symmetry::ALL
        .into_iter()
        .filter(|s| s.apply_position(&start) == start)
        .map(Symmetry::index)
        .collect();
    assert_eq!(fixed, vec![0, 3, 4, 7]);
}

#[test]
fn square_images_follow_board_images() {
    let f5 = Square::parse("f5").unwrap();
    let c4 = Square::parse("c4").unwrap();
    let s = Symmetry::new(3).unwrap();
    assert_eq!(s.apply_square(f5), c4);
    assert_eq!(all_symmetries(&after("f5"))[3], after("c4"));
}
