use thorview_core::archive::{Archive, GameMeta, GameRecord};
use thorview_core::board::{all_symmetries, parse_move_list, Bitboard, Position, Side, Square};
use thorview_core::opening::catalog::CATALOG;
use thorview_core::opening::OpeningBook;
use thorview_core::search::matcher::{exact_match, passes_prefilter};
use thorview_core::search::{find_matches, query, Move, QueryOptions};

fn game(moves: &str, black_discs: u8) -> GameRecord {
    let meta = GameMeta { black_discs, year: 1999, ..GameMeta::default() };
    GameRecord::from_squares(meta, &parse_move_list(moves).unwrap())
}

fn archive(games: Vec<GameRecord>) -> Archive {
    Archive::from_parts(games, Vec::new(), Vec::new(), OpeningBook::standard())
}

fn live(moves: &str) -> Position {
    let mut p = Position::initial();
    for sq in parse_move_list(moves).unwrap() {
        p = p.play_with_forced_pass(sq).unwrap();
    }
    p
}

fn sq(s: &str) -> Square {
    Square::parse(s).unwrap()
}

#[test]
fn start_position_matches_with_identity() {
    let a = archive(vec![game("f5d6c3", 40)]);
    let r = query(&a, &Position::initial(), &QueryOptions::default(), None);

    assert_eq!(r.matches.ply, 0);
    assert_eq!(r.matches.len(), 1);
    assert_eq!(r.matches.entries()[0].game, 0);
    assert_eq!(r.matches.entries()[0].symmetry.index(), 0);

    let f5 = r.summary.get(Move::Play(sq("f5"))).unwrap();
    assert_eq!(f5.played, 1);
    assert_eq!(f5.wins, 1);
    assert!(r.summary.get(Move::Play(sq("c3"))).is_none());
    assert!(r.summary.get(Move::Pass).is_none());
}

#[test]
fn game_shorter_than_query_never_matches() {
    let a = archive(vec![game("f5", 20)]);
    let q = live("f5d6");
    assert_eq!(q.ply(), 2);
    let r = query(&a, &q, &QueryOptions::default(), None);
    assert!(r.matches.is_empty());
    assert_eq!(r.summary.total, 0);
    assert!(r.summary.moves.is_empty());
}

#[test]
fn reflected_games_map_back_to_one_move() {
    let a = archive(vec![game("f5d6", 40), game("c4e3", 30)]);
    let r = query(&a, &live("f5"), &QueryOptions::default(), None);

    let tags: Vec<(usize, u8)> = r.matches.iter().map(|m| (m.game, m.symmetry.index())).collect();
    assert_eq!(tags, vec![(0, 0), (1, 3)]);

    let d6 = r.summary.get(Move::Play(sq("d6"))).unwrap();
    assert_eq!(d6.played, 2);
    assert_eq!(r.summary.moves.len(), 1);
    assert!(r.summary.get(Move::Play(sq("e3"))).is_none());
}

#[test]
fn game_reaching_a_rotated_position_later_still_matches() {
    // f5f6 and e6f6 are transposes of each other
    let a = archive(vec![game("e6f6g6", 32)]);
    let r = query(&a, &live("f5f6"), &QueryOptions::default(), None);
    assert_eq!(r.matches.len(), 1);
    let s = r.matches.entries()[0].symmetry;
    assert_eq!(s.index(), 4);
    assert_eq!(s.apply_position(&live("f5f6")), live("e6f6"));

    // g6 seen from the query's side of the diagonal
    let back = r.summary.ranked();
    assert_eq!(back.len(), 1);
    assert_eq!(back[0].0, Move::Play(sq("f7")));
}

#[test]
fn late_positions_short_circuit() {
    let q = Position::from_bitboards(Bitboard(!0b111), Bitboard::EMPTY, Side::Black).unwrap();
    assert_eq!(q.empty_count(), 3);
    let a = archive(vec![game("f5d6c3d3c4f4c5b3c2e6c6b4b5d2e3a6c1b1", 40)]);
    let m = find_matches(&a, &q, &QueryOptions::default());
    assert!(m.is_empty());
    assert_eq!(m.ply, 57);
}

#[test]
fn stuck_mover_goes_to_the_pass_bucket() {
    let a = archive(vec![game("c4c3f5b4a4a5c2a3d2", 10)]);
    let mut q = Position::initial();
    for s in parse_move_list("c4c3f5b4a4a5c2a3").unwrap() {
        q = q.play(s).unwrap();
    }
    assert!(!q.has_legal_move());

    let r = query(&a, &q, &QueryOptions::default(), None);
    assert_eq!(r.matches.len(), 1);
    assert_eq!(r.summary.total, 1);
    assert!(r.summary.moves.is_empty());
    let pass = r.summary.get(Move::Pass).unwrap();
    assert_eq!(pass.played, 1);
    assert_eq!(pass.losses, 1);
    assert_eq!(pass.score, 0.0);
}

#[test]
fn prefilter_never_rejects_an_exact_match() {
    let lines: Vec<&str> = CATALOG.iter().map(|o| o.moves).filter(|m| !m.is_empty()).collect();
    let games: Vec<GameRecord> = lines.iter().map(|m| game(m, 33)).collect();

    let mut queries = vec![Position::initial()];
    for line in &lines {
        let mut p = Position::initial();
        for s in parse_move_list(line).unwrap() {
            p = p.play_with_forced_pass(s).unwrap();
            queries.push(p);
        }
    }

    let mut exact = 0usize;
    for q in &queries {
        let images = all_symmetries(q);
        let empties = images.map(|p| p.empty());
        for g in &games {
            if exact_match(g, q.ply(), &images, None).is_some() {
                exact += 1;
                assert!(passes_prefilter(g, q.ply(), &empties));
            }
        }
    }
    assert!(exact > queries.len());
}
