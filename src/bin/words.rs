use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use linked_collections::words::{self, Order};
use linked_collections::{AnyDeque, LinkedDeque};

#[derive(Parser)]
#[command(
    name = "words",
    about = "Push words from a line of text, popping one for every '-'",
    version
)]
struct Cli {
    /// Line to process. Read from stdin when omitted.
    text: Option<String>,

    /// Order of the surviving words in the output.
    #[arg(long, value_enum, default_value_t = Order::Pushed)]
    order: Order,

    /// Container that stores the words.
    #[arg(long, value_enum, default_value_t = Backend::Linked)]
    backend: Backend,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum Backend {
    Linked,
    Vec,
}

fn read_line() -> Result<String> {
    let mut stdout = io::stdout();
    writeln!(stdout, "Enter text ('-' to pop)").context("writing prompt")?;
    stdout.flush().context("flushing prompt")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("reading line from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let line = match cli.text {
        Some(text) => text,
        None => read_line()?,
    };

    let mut store: Box<dyn AnyDeque<String>> = match cli.backend {
        Backend::Linked => Box::new(LinkedDeque::<String>::new()),
        Backend::Vec => Box::new(VecDeque::new()),
    };
    words::process_line(&line, &mut *store);
    println!("{}", words::render(&*store, cli.order));
    Ok(())
}
