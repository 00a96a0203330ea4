use clap::Subcommand;

#[derive(Subcommand)]
pub enum IdentityCommands {
    /// Bind an identity locally and relay it if an endpoint is configured
    Bind {
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        handle: String,
        /// Raw token; stored locally, only its SHA-256 is ever sent
        #[arg(long, default_value = "")]
        token: String,
        /// Consent to relaying the identity to the configured endpoint
        #[arg(long)]
        consent: bool,
    },
    /// Erase the locally bound identity
    Clear,
    /// Show whether an identity is bound locally
    Status,
}
