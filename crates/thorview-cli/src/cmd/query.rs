use anyhow::Context;
use clap::Args;
use thorview_core::search::{query, GameFilter, QueryOptions};

use crate::io::archive::load;
use crate::io::moves::live_position;

#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Archive file; repeatable (games plus .jou/.trn name tables)
    #[arg(long = "file", required = true)]
    pub files: Vec<String>,

    /// Moves from the start position leading to the query, e.g. "f5d6"
    #[arg(long, default_value = "")]
    pub moves: String,

    /// Restrict summarised games: player:NAME opening:NAME year:YYYY result:black|white|draw
    #[arg(long)]
    pub filter: Option<String>,

    /// Show at most N candidate moves
    #[arg(long, default_value_t = 10)]
    pub top: usize,

    /// Positions with fewer empty squares return nothing
    #[arg(long, default_value_t = QueryOptions::default().min_empties)]
    pub min_empties: u32,

    /// List the indices of matched games
    #[arg(long, default_value_t = false)]
    pub list: bool,
}

pub fn run(args: QueryArgs) -> anyhow::Result<()> {
    let position = live_position(&args.moves)?;
    let filter = args
        .filter
        .as_deref()
        .map(GameFilter::parse)
        .transpose()
        .context("parse --filter")?;
    let archive = load(&args.files)?;

    let opts = QueryOptions { min_empties: args.min_empties };
    let r = query(&archive, &position, &opts, filter.as_ref());

    eprintln!("--- query ---");
    eprintln!("ply             = {}", r.matches.ply);
    eprintln!("to_move         = {:?}", position.to_move());
    eprintln!("matches         = {}", r.matches.len());
    eprintln!("selected        = {}", r.selected.len());

    println!("{:<5} {:>7} {:>6} {:>6} {:>6} {:>7} {:>7}", "move", "played", "win", "draw", "loss", "score", "freq");
    for (mv, s) in r.summary.ranked().into_iter().take(args.top) {
        println!(
            "{:<5} {:>7} {:>6} {:>6} {:>6} {:>6.1}% {:>6.1}%",
            mv.to_string(),
            s.played,
            s.wins,
            s.draws,
            s.losses,
            s.score * 100.0,
            s.frequency * 100.0
        );
    }

    if args.list {
        for m in r.selected.iter() {
            println!("game {} symmetry {}", m.game, m.symmetry.index());
        }
    }
    Ok(())
}
