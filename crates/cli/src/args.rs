use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "update-url",
    version,
    about = "Find and replace the given URLs in your database",
    long_about = None
)]
pub struct Cli {
    /// URL to replace
    pub old_url: String,
    /// URL to use as the replacement
    pub new_url: String,
}
