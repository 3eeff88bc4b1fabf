#[derive(Clone, Debug, Default, clap::Parser)]
pub struct Args {
    /// Don't read or create the configuration file.
    #[clap(long)]
    pub ignore_config: bool,
}
