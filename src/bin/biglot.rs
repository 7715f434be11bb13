//! Print the embedded analytics glossary as two blocks:  every term, one blank line, every
//! translation.
//!
//! ```
//! USAGE: biglot
//! ```

use biglot::{extract, render, ANALYTICS_GLOSSARY};

fn main() {
    let args = std::env::args().collect::<Vec<_>>();
    if args.len() != 1 {
        eprintln!("USAGE: biglot");
        std::process::exit(1);
    }
    let (keys, values) = extract(ANALYTICS_GLOSSARY);
    println!("{}", render(&keys, &values));
}
