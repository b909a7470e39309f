use anyhow::Context;
use clap::Args;
use thorview_core::archive::MoveSlot;
use thorview_core::board::parse_move_list;
use thorview_core::OpeningBook;

#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Move list, e.g. "f5d6c3d3c4"
    #[arg(long)]
    pub moves: String,
}

pub fn run(args: ClassifyArgs) -> anyhow::Result<()> {
    let squares = parse_move_list(&args.moves).with_context(|| format!("parse moves: {:?}", args.moves))?;
    let slots: Vec<MoveSlot> = squares.into_iter().map(MoveSlot::Square).collect();

    let book = OpeningBook::standard();
    let c = book.classify(&slots);

    eprintln!("--- classify ---");
    eprintln!("moves     = {}", slots.len());
    eprintln!("playable  = {}", c.playable);
    if c.playable < slots.len() {
        eprintln!("WARNING: move {} is illegal; later moves ignored", c.playable + 1);
    }
    eprintln!("code      = {}", c.code);
    println!("{}", book.name(c.code));
    Ok(())
}
