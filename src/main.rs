use clap::Parser;

fn main() {
    let cli = qutebrowser_profile::cli::Cli::parse();
    qutebrowser_profile::logging::init_logging(cli.verbose);

    match qutebrowser_profile::run(cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
