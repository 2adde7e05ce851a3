use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for obras
/// CLI client to manage construction work sites and their inspections
#[derive(Parser, Debug)]
#[command(
    name = "obras",
    version = env!("CARGO_PKG_VERSION"),
    about = "Manage construction work sites and their inspections through the obras backend",
    long_about = None
)]
pub struct Cli {
    /// Override the backend address (e.g. http://192.168.0.102:5000)
    #[arg(global = true, long = "api-url", value_name = "URL")]
    pub api_url: Option<String>,

    /// Print request traces on stderr
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    /// Disable colored output
    #[arg(global = true, long = "no-color")]
    pub no_color: bool,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the configuration file
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "check",
            help = "Validate the configuration and look for missing keys"
        )]
        check: bool,

        #[arg(long = "migrate", help = "Add missing keys with their default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Work sites ("obras")
    Site {
        #[command(subcommand)]
        action: SiteCommand,
    },

    /// Inspections ("fiscalizações")
    Inspection {
        #[command(subcommand)]
        action: InspectionCommand,
    },
}

/// Photo and GPS capture shared by every form.
#[derive(Args, Debug, Clone, Default)]
pub struct CaptureArgs {
    /// Image file to attach as photo (empty string = cancel the capture)
    #[arg(long, value_name = "FILE")]
    pub photo: Option<String>,

    /// Current position as "lat,long" (e.g. "-23.55052,-46.63331")
    #[arg(long = "at", value_name = "LAT,LONG", allow_hyphen_values = true)]
    pub at: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct SiteFields {
    #[arg(long, help = "Work site name")]
    pub name: Option<String>,

    #[arg(long, help = "Responsible party")]
    pub responsible: Option<String>,

    #[arg(long, value_name = "DD-MM-YYYY", help = "Start date (DD-MM-YYYY or DD/MM/YYYY)")]
    pub start: Option<String>,

    #[arg(long, value_name = "DD-MM-YYYY", help = "End date (DD-MM-YYYY or DD/MM/YYYY)")]
    pub end: Option<String>,

    #[arg(long, help = "Free-text description")]
    pub description: Option<String>,

    #[command(flatten)]
    pub capture: CaptureArgs,
}

#[derive(Args, Debug, Clone, Default)]
pub struct InspectionFields {
    #[arg(long, value_name = "DD-MM-YYYY", help = "Inspection date (DD-MM-YYYY or DD/MM/YYYY)")]
    pub date: Option<String>,

    #[arg(
        long,
        help = "Status: em-dia (on-track), atrasada (late), parada (halted)"
    )]
    pub status: Option<String>,

    #[arg(long, help = "Free-text observations")]
    pub observations: Option<String>,

    #[command(flatten)]
    pub capture: CaptureArgs,
}

#[derive(Subcommand, Debug)]
pub enum SiteCommand {
    /// List all work sites
    List,

    /// Show a work site with its inspections
    Show { id: String },

    /// Register a new work site
    Add {
        #[command(flatten)]
        fields: SiteFields,
    },

    /// Edit a work site (only the given fields change)
    Edit {
        id: String,

        #[command(flatten)]
        fields: SiteFields,
    },

    /// Delete a work site and all of its inspections
    Del {
        id: String,

        /// Do not ask for confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Send the work site report by e-mail
    Email { id: String, address: String },

    /// Register an inspection for this work site
    Inspect {
        id: String,

        #[command(flatten)]
        fields: InspectionFields,
    },
}

#[derive(Subcommand, Debug)]
pub enum InspectionCommand {
    /// Register a new inspection, choosing the work site
    Add {
        #[arg(long, value_name = "SITE_ID", help = "Linked work site")]
        site: Option<String>,

        #[command(flatten)]
        fields: InspectionFields,
    },

    /// Edit an inspection (only the given fields change)
    Edit {
        id: String,

        #[arg(long, value_name = "SITE_ID", help = "Move to another work site")]
        site: Option<String>,

        #[command(flatten)]
        fields: InspectionFields,
    },

    /// Show one inspection
    Show { id: String },
}
