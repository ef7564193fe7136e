use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Returns the version string, with the git hash appended on dev builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234" otherwise
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "rolodex", bin_name = "rolodex", version = get_version())]
#[command(
    about = "Plain-text phone contact list",
    long_about = "Plain-text phone contact list.\n\n\
        rolodex <list.txt> <name words>            look up by name\n\
        rolodex <list.txt> <10-digit number>       look up by number\n\
        rolodex <list.txt> <name words> <number>   add a contact\n\
        rolodex <list.txt> add_json <file.json>    import contacts"
)]
pub struct Cli {
    /// Log to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// JSON file overriding the file marker, import keyword and column widths
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Contact list path followed by a name, a number, or both
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "TOKENS")]
    pub tokens: Vec<String>,
}
