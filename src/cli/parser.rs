use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rovertime
#[derive(Parser)]
#[command(
    name = "rovertime",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log overtime sessions, split them into overtime / holiday-excess / night minutes and fill the monthly ODS request form",
    long_about = None
)]
pub struct Cli {
    /// Override session file path (useful for tests or a second ledger)
    #[arg(global = true, long = "session")]
    pub session: Option<String>,

    /// Override the ODS template path
    #[arg(global = true, long = "template")]
    pub template: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file and an empty session
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show or set the applicant printed on the form
    Applicant {
        #[arg(long, help = "Department (신청부서)")]
        department: Option<String>,

        #[arg(long, help = "Rank (직급)")]
        rank: Option<String>,

        #[arg(long, help = "Full name (성명)")]
        name: Option<String>,

        #[arg(long, help = "Birth date (생년월일)")]
        birthdate: Option<String>,
    },

    /// Add an overtime session, or edit one with --edit
    Add {
        /// Start date (YYYY-MM-DD); optional with --edit
        date: Option<String>,

        #[arg(long = "in", help = "Start time (HH:MM)")]
        start: Option<String>,

        #[arg(long = "out", help = "End time (HH:MM)")]
        end: Option<String>,

        #[arg(
            long = "end-date",
            help = "End date (YYYY-MM-DD) when the session ends after midnight"
        )]
        end_date: Option<String>,

        #[arg(long, help = "Reason (사유)")]
        reason: Option<String>,

        #[arg(
            long,
            conflicts_with_all = ["workday", "auto_holiday"],
            help = "Treat the start date as a holiday (공휴일 / 대체휴일 / 근로자의날)"
        )]
        holiday: bool,

        #[arg(
            long,
            conflicts_with = "auto_holiday",
            help = "Treat the start date as a working day even if the calendar lists it"
        )]
        workday: bool,

        #[arg(
            long = "auto-holiday",
            help = "Follow the holiday calendar (default for new entries)"
        )]
        auto_holiday: bool,

        #[arg(long = "edit", value_name = "ID", help = "Edit the entry with this id")]
        edit: Option<i64>,
    },

    /// Delete an entry by id
    Del {
        id: i64,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List entries with their minute buckets
    List {
        #[arg(
            long,
            short,
            help = "Filter by period: YYYY-MM, YYYY or all (default: all)"
        )]
        period: Option<String>,
    },

    /// Classify one session without storing it
    Calc {
        /// Start date (YYYY-MM-DD)
        date: String,

        #[arg(long = "in", help = "Start time (HH:MM)")]
        start: String,

        #[arg(long = "out", help = "End time (HH:MM)")]
        end: String,

        #[arg(long = "end-date", help = "End date (YYYY-MM-DD)")]
        end_date: Option<String>,

        #[arg(long, conflicts_with = "workday")]
        holiday: bool,

        #[arg(long)]
        workday: bool,
    },

    /// Show the holiday calendar
    Holidays {
        #[arg(long, help = "Only this year")]
        year: Option<i32>,
    },

    /// Export the ledger: the ODS request form, or flat CSV / JSON
    Export {
        #[arg(long, value_enum, default_value = "ods")]
        format: ExportFormat,

        #[arg(
            long,
            value_name = "FILE",
            help = "Output file (absolute path); ODS defaults to <output_dir>/overtime_YYYYMM.ods"
        )]
        file: Option<String>,

        #[arg(
            long,
            short,
            help = "YYYY-MM for ODS (default: current month); YYYY-MM, YYYY or all for CSV/JSON"
        )]
        period: Option<String>,

        #[arg(
            long = "date",
            value_name = "YYYY-MM-DD",
            help = "Application date printed on the form (default: today)"
        )]
        applied_on: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite output file without confirmation")]
        force: bool,
    },

    /// Print the internal log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log")]
        print: bool,
    },
}
