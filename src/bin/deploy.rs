// src/bin/deploy.rs
use pca_tools::cli;

fn main() {
    if let Err(e) = color_eyre::install().and_then(|()| cli::deploy_main()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
