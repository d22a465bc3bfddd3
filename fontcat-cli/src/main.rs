//! Binary entrypoint for fontcat-cli (made by FontLab https://www.fontlab.com/)

fn main() {
    if let Err(err) = fontcat_cli::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
