use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "odonto-match")]
#[command(about = "Match a dental service request to a professional and their open slots")]
pub struct CliArgs {
    /// Free-text description of the requested service.
    pub service_text: String,

    #[arg(long, default_value = "config/odonto.toml")]
    pub config: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON for log shipping")]
    pub log_json: bool,

    #[arg(long, help = "Print rotation counters after the request")]
    pub show_rotation: bool,
}
