//! gitref - write the HEAD commit reference to a text file
//!
//! ## Quick Start
//!
//! ```bash
//! # Write <commit>.txt to ~/Desktop (or ~)
//! gitref create
//!
//! # Write to a specific folder and append the credits line
//! gitref create --folder ~/refs --credits
//!
//! # Inspect HEAD without writing anything
//! gitref show
//! ```

mod commands;
mod notifier;

fn main() {
    match commands::run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            std::process::exit(1);
        }
    }
}
