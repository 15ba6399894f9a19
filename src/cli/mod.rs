//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the backand binary.

use clap::{Parser, Subcommand};

use crate::pagination::DEFAULT_PAGE_SIZE;
use crate::session::Access;

/// Backand API command-line interface.
#[derive(Parser, Debug)]
#[command(name = "backand", about = "Backand API CLI", version)]
pub struct Cli {
    /// Output results as JSON instead of a table.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Request a bearer token and print the token payload.
    Token,

    /// Create an object from a JSON document.
    Create {
        /// The object type (collection name).
        object_type: String,

        /// The object body as JSON text, sent unchanged.
        data: String,
    },

    /// List objects of a type, one page at a time.
    List {
        /// The object type (collection name).
        object_type: String,

        /// Number of items per page.
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: u32,

        /// Page number (1-indexed).
        #[arg(long, default_value_t = 1)]
        page_number: u32,

        /// Authenticate with a bearer token instead of the anonymous token.
        #[arg(long)]
        auth: bool,
    },

    /// Get a single object by ID.
    Get {
        /// The object type (collection name).
        object_type: String,

        /// The object ID.
        id: String,

        /// Authenticate with a bearer token instead of the anonymous token.
        #[arg(long)]
        auth: bool,
    },
}

/// Map the `--auth` flag to an access mode.
pub fn access_for(auth: bool) -> Access {
    Access::from(!auth)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_for_flag() {
        assert_eq!(access_for(false), Access::Anonymous);
        assert_eq!(access_for(true), Access::Authenticated);
    }
}
