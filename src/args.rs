use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "followergen",
    about = "Fill data.json with synthetic daily follower counts",
    version,
    long_about = None
)]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
