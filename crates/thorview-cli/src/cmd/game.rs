use anyhow::Context;
use clap::Args;
use thorview_core::archive::game_at;

use crate::io::archive::load;

#[derive(Args, Debug)]
pub struct GameArgs {
    /// Archive file; repeatable (games plus .jou/.trn name tables)
    #[arg(long = "file", required = true)]
    pub files: Vec<String>,

    /// Game index within the loaded archive (0-based)
    #[arg(long)]
    pub index: usize,

    /// Also print the board after the last playable move
    #[arg(long, default_value_t = false)]
    pub board: bool,
}

pub fn run(args: GameArgs) -> anyhow::Result<()> {
    let archive = load(&args.files)?;
    let view = game_at(&archive, args.index)
        .with_context(|| format!("game index {} out of range (archive holds {})", args.index, archive.len()))?;

    println!("{view}");
    if args.board {
        println!("{}", view.final_position());
    }
    Ok(())
}
