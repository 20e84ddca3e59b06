use colored::Colorize;

pub fn run(quiet: bool) {
    let version = env!("CARGO_PKG_VERSION");
    if quiet {
        println!("{version}");
        return;
    }
    println!(
        "{} {}",
        "paradeck".cyan().bold(),
        format!("v{version}").purple()
    );
    println!("{}", env!("CARGO_PKG_DESCRIPTION").dimmed());
}
