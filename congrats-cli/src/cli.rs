use std::path::PathBuf;

#[derive(clap::Parser)]
pub struct Cli {
    #[arg(long, env)]
    pub gemini_api_key: String,
    #[arg(long, env, default_value = "gemini-2.5-flash")]
    pub gemini_model: String,
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub age: i64,
    #[arg(long, num_args = 1.., required = true)]
    pub interests: Vec<String>,
    #[arg(long, default_value = "warm")]
    pub style: String,
    #[arg(short, long, default_value = "congratulation.txt")]
    pub output: PathBuf,
}
