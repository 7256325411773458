use clap::{Parser, Subcommand};

/// depp - query and install packages through a uniform package manager contract
///
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct ClapCli {
    /// Override the pip executable (or command prefix) from config
    ///
    #[clap(long, global = true)]
    pub(crate) pip: Option<String>,

    /// Override the shell used to run commands
    ///
    #[clap(long, global = true)]
    pub(crate) shell: Option<String>,

    /// Show detailed output
    ///
    #[clap(long, short = 'v', global = true, default_value_t = false)]
    pub(crate) verbose: bool,

    /// Disable colored output
    ///
    #[clap(long, global = true, default_value_t = false)]
    pub(crate) no_color: bool,

    /// Subcommand to execute
    ///
    #[clap(subcommand)]
    pub(crate) command: ClapCommands,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum ClapCommands {
    /// Check whether the package manager is available
    Present,

    /// List every version the package manager knows about
    Versions {
        /// Name of the package
        package_name: String,

        /// Print JSON instead of a table
        #[clap(long)]
        json: bool,
    },

    /// Show whether a package is installed, and which version
    Status {
        /// Name of the package
        package_name: String,

        /// Print JSON instead of text
        #[clap(long)]
        json: bool,
    },

    /// Install a package
    Install {
        /// Name of the package to install
        package_name: String,

        /// Version to install
        #[clap(long, default_value = "latest")]
        version: String,

        /// Don't ask for confirmation
        #[clap(long, short = 'y')]
        yes: bool,
    },

    /// Show the direct dependencies of a package version
    Deps {
        /// Name of the package
        package_name: String,

        /// Version of the package
        version: String,
    },
}
