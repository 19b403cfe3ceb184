use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Initial contents, as a comma-separated list.
    #[arg(long, allow_hyphen_values = true)]
    pub values: Option<String>,

    #[arg(long, allow_negative_numbers = true)]
    pub insert: Vec<i32>,

    #[arg(long, allow_negative_numbers = true)]
    pub erase: Vec<i32>,

    #[arg(long, allow_negative_numbers = true)]
    pub find: Vec<i32>,

    /// Clear the set after inserting and erasing.
    #[arg(long)]
    pub clear: bool,
}
