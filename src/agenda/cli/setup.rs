use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(name = "agenda", version)]
#[command(about = "Menu-driven tracker for people and their appointments", long_about = None)]
pub struct Cli {
    /// Verbose output (debug logging on stderr)
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored messages
    #[arg(long)]
    pub no_color: bool,

    /// Do not wait for a key press or clear the screen between commands
    #[arg(long)]
    pub no_pause: bool,
}

impl Cli {
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}
