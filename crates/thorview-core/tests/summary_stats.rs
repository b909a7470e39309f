use thorview_core::archive::{game_at, Archive, GameMeta, GameRecord, Outcome};
use thorview_core::board::{parse_move_list, Position, Square};
use thorview_core::opening::OpeningBook;
use thorview_core::search::{query, GameFilter, Move, QueryOptions};

fn game(moves: &str, black_discs: u8, black: u16, white: u16, year: u16) -> GameRecord {
    let meta = GameMeta {
        tournament: 0,
        black_player: black,
        white_player: white,
        black_discs,
        perfect_score: black_discs,
        year,
    };
    GameRecord::from_squares(meta, &parse_move_list(moves).unwrap())
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn sample() -> Archive {
    let games = vec![
        game("f5d6c3", 20, 0, 1, 2001),
        game("f5d6", 32, 1, 2, 2002),
        game("f5f6e6", 50, 2, 0, 2002),
        // ends right at the query position
        game("f5", 10, 0, 2, 2003),
    ];
    Archive::from_parts(
        games,
        names(&["Alpha Brandt", "Beta Cole", "Gamma Dorn"]),
        names(&["Open"]),
        OpeningBook::standard(),
    )
}

fn after(moves: &str) -> Position {
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
fn outcomes_are_from_the_query_movers_side() {
    let a = sample();
    let r = query(&a, &after("f5"), &QueryOptions::default(), None);
    assert_eq!(r.matches.len(), 4);
    assert_eq!(r.summary.total, 4);

    // white to move: 20 black discs is a white win
    let d6 = r.summary.get(Move::Play(sq("d6"))).unwrap();
    assert_eq!((d6.played, d6.wins, d6.draws, d6.losses), (2, 1, 1, 0));
    assert_eq!(d6.score, 0.75);
    assert_eq!(d6.frequency, 0.5);

    let f6 = r.summary.get(Move::Play(sq("f6"))).unwrap();
    assert_eq!((f6.played, f6.losses), (1, 1));
    assert_eq!(f6.score, 0.0);
    assert_eq!(f6.frequency, 0.25);

    let ranked: Vec<Move> = r.summary.ranked().into_iter().map(|(m, _)| m).collect();
    assert_eq!(ranked, vec![Move::Play(sq("d6")), Move::Play(sq("f6"))]);
}

#[test]
fn filter_narrows_the_summary_not_the_matches() {
    let a = sample();
    let f = GameFilter::parse("player:beta").unwrap();
    let r = query(&a, &after("f5"), &QueryOptions::default(), Some(&f));
    assert_eq!(r.matches.len(), 4);
    assert_eq!(r.selected.game_indices().collect::<Vec<_>>(), vec![0, 1]);
    assert_eq!(r.summary.total, 2);
    assert_eq!(r.summary.get(Move::Play(sq("d6"))).unwrap().played, 2);

    let f = GameFilter::parse("opening:ganglion year:2002").unwrap();
    let r = query(&a, &after("f5"), &QueryOptions::default(), Some(&f));
    assert_eq!(r.selected.game_indices().collect::<Vec<_>>(), vec![2]);

    let f = GameFilter::parse("result:white").unwrap();
    let r = query(&a, &after("f5"), &QueryOptions::default(), Some(&f));
    assert_eq!(r.selected.game_indices().collect::<Vec<_>>(), vec![0, 3]);

    let f = GameFilter::parse("result:draw").unwrap();
    let r = query(&a, &after("f5"), &QueryOptions::default(), Some(&f));
    assert!(r.selected.contains_game(1));
    assert_eq!(r.selected.len(), 1);
}

#[test]
fn illegal_continuation_counts_but_adds_no_move() {
    // a1 is not playable after f5d6
    let a = Archive::from_parts(
        vec![game("f5d6a1", 40, 0, 1, 2000), game("f5d6c3", 40, 0, 1, 2000)],
        Vec::new(),
        Vec::new(),
        OpeningBook::standard(),
    );
    assert_eq!(a.games()[0].playable_len(), 2);

    let r = query(&a, &after("f5d6"), &QueryOptions::default(), None);
    assert!(r.matches.contains_game(0));
    assert_eq!(r.matches.len(), 2);
    assert_eq!(r.summary.total, 2);
    assert!(r.summary.get(Move::Play(sq("a1"))).is_none());
    let c3 = r.summary.get(Move::Play(sq("c3"))).unwrap();
    assert_eq!(c3.played, 1);
    assert_eq!(c3.frequency, 0.5);
    assert_eq!(r.summary.moves.len(), 1);
}

#[test]
fn query_is_repeatable() {
    let a = sample();
    let q = after("f5");
    let first = query(&a, &q, &QueryOptions::default(), None);
    let second = query(&a, &q, &QueryOptions::default(), None);
    assert_eq!(first, second);
}

#[test]
fn game_view_resolves_names_and_moves() {
    let a = sample();
    let v = game_at(&a, 0).unwrap();
    assert_eq!(v.black, "Alpha Brandt");
    assert_eq!(v.white, "Beta Cole");
    assert_eq!(v.tournament, "Open");
    assert_eq!(v.result, Outcome::Loss);
    assert_eq!(v.move_text(), "F5D6C3");
    assert_eq!(v.opening_name, "Tiger");
    assert_eq!(v.positions.len(), 4);
    assert!(!v.truncated);
    assert_eq!(v.final_position(), after("f5d6c3"));

    assert!(game_at(&a, 4).is_none());
}

#[test]
fn unknown_ids_get_a_placeholder() {
    let a = Archive::from_parts(
        vec![game("f5d6c3a1", 33, 7, 8, 1990)],
        Vec::new(),
        Vec::new(),
        OpeningBook::standard(),
    );
    let v = game_at(&a, 0).unwrap();
    assert_eq!((v.black.as_str(), v.white.as_str(), v.tournament.as_str()), ("?", "?", "?"));
    assert!(v.truncated);
    assert_eq!(v.moves.len(), 3);
    assert_eq!(v.result, Outcome::Win);
}
