use anyhow::Result;
use colored::Colorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::render::{OutputFormat, render_table};
use crate::session::{Report, Session, SessionError};
use crate::types::{SymbolTable, Walk, WalkError};

/// Interactive loop: one submission per line, one shared session
pub struct Repl {
    session: Session,
    editor: DefaultEditor,
    format: OutputFormat,
}

impl Repl {
    pub fn new(format: OutputFormat) -> rustyline::Result<Self> {
        Ok(Self {
            session: Session::new(),
            editor: DefaultEditor::new()?,
            format,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        println!("Type an expression (\\x -> x) or a declaration (x :: N). 'help' lists commands.");

        loop {
            match self.editor.readline("hinner> ") {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    self.editor.add_history_entry(line)?;

                    match self.handle_line(line) {
                        Ok(true) => {}
                        Ok(false) => break,
                        Err(e) => eprintln!("{} {}", "Error:".red().bold(), e),
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => break,
                Err(err) => {
                    eprintln!("{} {:?}", "Error:".red().bold(), err);
                    break;
                }
            }
        }

        Ok(())
    }

    /// Returns `false` when the loop should stop
    fn handle_line(&mut self, line: &str) -> Result<bool> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            ["quit"] | ["exit"] => return Ok(false),
            ["help"] => print_help(),
            ["symbols"] => print!("{}", symbol_table(self.session.symbols())),
            ["format", "dot"] => self.format = OutputFormat::Dot,
            ["format", "json"] => self.format = OutputFormat::Json,
            ["format", other] => anyhow::bail!("Unknown format '{}', use dot or json", other),
            _ => {
                let result = self.session.submit(line);
                print_outcome(&result, self.session.symbols(), self.format)?;
            }
        }
        Ok(true)
    }
}

fn print_help() {
    println!("  <expression>     build and label the trees, e.g. (+) 3");
    println!("  <expr> :: <type> declare a type, e.g. (+) :: N -> (N -> N)");
    println!("  symbols          show the declared types");
    println!("  format dot|json  choose how trees are printed");
    println!("  quit             leave");
}

fn symbol_table(symbols: &SymbolTable) -> String {
    render_table("Symbol", "Type", &symbols.entries())
}

fn print_walk(title: &str, walk: &Option<Result<Walk, WalkError>>) {
    match walk {
        Some(Ok(walk)) => {
            println!("{}", title.bold());
            println!("{}", walk.graph.to_dot());
            for diagnostic in &walk.diagnostics {
                eprintln!("{}", diagnostic.to_string().red());
            }
        }
        Some(Err(err)) => eprintln!("{} {}", format!("{}:", title).red().bold(), err),
        None => {}
    }
}

fn print_report(report: &Report, symbols: &SymbolTable, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", report.to_json(symbols)?);
        return Ok(());
    }

    println!("{}", "The expression is valid".green());
    print_walk("Semantic tree", &report.semantic);

    println!("{}", "Type table".bold());
    print!("{}", symbol_table(symbols));

    if !report.is_declaration() {
        print_walk("Type tree", &report.types);
        print!("{}", render_table("Variable", "Type", &report.aux.entries()));
    }
    Ok(())
}

/// Print the result of one submission the way the REPL shows it
pub fn print_outcome(
    result: &Result<Report, SessionError>,
    symbols: &SymbolTable,
    format: OutputFormat,
) -> Result<()> {
    match result {
        Ok(report) => print_report(report, symbols, format),
        Err(SessionError::Syntax { errors }) => {
            eprintln!("{}", "The expression is not valid".red().bold());
            for err in errors {
                eprintln!("  {}", err);
            }
            Ok(())
        }
    }
}
