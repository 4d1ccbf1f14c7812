use clap::Parser;

fn main() {
    let cli = tradfri_status::cli::Cli::parse();
    let exit_code = tradfri_status::run(cli);
    std::process::exit(exit_code);
}
