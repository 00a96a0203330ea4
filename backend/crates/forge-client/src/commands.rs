use crate::identity_commands::IdentityCommands;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Fetch and render the asset registry
    Assets,

    /// Local identity operations
    Identity {
        #[command(subcommand)]
        action: IdentityCommands,
    },

    /// Submit the email signup form
    Signup {
        /// Email address to subscribe
        #[arg(long)]
        email: String,
    },
}
