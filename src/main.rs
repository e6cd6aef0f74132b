use clap::Parser;
use pasc::ast::StmtSeq;
use pasc::errors::{PasError, PasResult};
use pasc::frontend::{lexer::scan, Token};
use pasc::semantic::{IdentifierCollector, NodeCounter};
use pasc::{read, LineNumber};
use std::{path::PathBuf, time::Instant};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Pascal-subset front end that builds and inspects syntax trees",
    long_about = "Pascal-subset front end that builds and inspects syntax trees.\n\
                 It scans and parses a statement sequence and can print the\n\
                 resulting tree, node statistics and identifier references.\n\
                 \n\
                 Example usage:\n\
                 pasc input.pas                    # Check that the input parses\n\
                 pasc input.pas --show-ast         # Print the tree as Pascal source\n\
                 pasc input.pas --find '^tmp'      # List identifiers matching a regex\n\
                 pasc input.pas --stats --timing   # Node counts and phase timing"
)]
struct Cli {
    // The path to the file to parse
    path: PathBuf,

    // Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    // Show phase timing
    #[arg(short, long)]
    timing: bool,

    // Show AST after parsing
    #[arg(long)]
    show_ast: bool,

    // Show node counts per layer
    #[arg(short, long)]
    stats: bool,

    // List identifier references whose name matches this regex
    #[arg(short, long, value_name = "REGEX")]
    find: Option<String>,
}

#[derive(Debug, Default)]
struct FrontendStats {
    lexer_time: f64,
    parser_time: f64,
    total_time: f64,
    token_count: usize,
}

// Print error message and exit with error code
fn fatal(msg: &str) -> ! {
    eprintln!("Error: {}", msg);
    std::process::exit(1);
}

fn lexical_analysis(
    source: &str,
    stats: &mut FrontendStats,
    verbose: bool,
) -> PasResult<Vec<(Token, usize)>> {
    let lexer_start = Instant::now();
    let mut state = LineNumber::default();
    let tokens = scan(&mut state, source)?;
    stats.lexer_time = lexer_start.elapsed().as_secs_f64();
    stats.token_count = tokens.len();

    if verbose {
        println!("Lexical analysis completed in {:.3}s", stats.lexer_time);
        println!("  Generated {} tokens", stats.token_count);
    }

    Ok(tokens)
}

fn parsing_phase(
    tokens: &[(Token, usize)],
    stats: &mut FrontendStats,
    verbose: bool,
) -> PasResult<StmtSeq> {
    let parser_start = Instant::now();
    let ast = pasc::frontend::Parser::new(tokens).parse()?;
    stats.parser_time = parser_start.elapsed().as_secs_f64();

    if verbose {
        println!("Parsing completed in {:.3}s", stats.parser_time);
        println!("  Parsed {} top-level statements", ast.len());
    }

    Ok(ast)
}

fn build_tree(input_path: &PathBuf, args: &Cli) -> PasResult<(StmtSeq, FrontendStats)> {
    let start_time = Instant::now();
    let mut stats = FrontendStats::default();

    if args.verbose {
        println!("Reading: {}", input_path.display());
    }

    if !input_path.exists() {
        return Err(PasError::compilation_error(
            "file not found",
            format!("Input file does not exist: {}", input_path.display()),
        ));
    }

    let source = read(input_path)?;
    if args.verbose {
        println!("Read {} bytes from input file", source.len());
    }

    let tokens = lexical_analysis(&source, &mut stats, args.verbose)?;
    let ast = parsing_phase(&tokens, &mut stats, args.verbose)?;

    stats.total_time = start_time.elapsed().as_secs_f64();
    Ok((ast, stats))
}

fn print_node_counts(ast: &StmtSeq) -> PasResult<()> {
    let counts = NodeCounter::count(ast)?;
    println!("\nNode counts:");
    println!("  Statements:          {}", counts.statements);
    println!("  Case arms:           {}", counts.case_arms);
    println!("  Case labels:         {}", counts.case_labels);
    println!("  Expressions:         {}", counts.expressions);
    println!("  Simple expressions:  {}", counts.simple_expressions);
    println!("  Terms:               {}", counts.terms);
    println!("  Factors:             {}", counts.factors);
    println!("  Designators:         {}", counts.designators);
    println!("  Designator items:    {}", counts.designator_items);
    println!("  Total:               {}", counts.total());
    Ok(())
}

fn print_matches(ast: &StmtSeq, pattern: &str) -> PasResult<()> {
    let refs = IdentifierCollector::with_pattern(pattern)?.collect(ast)?;
    println!("\nIdentifiers matching '{}':", pattern);
    if refs.is_empty() {
        println!("  (none)");
    }
    for r in refs {
        println!("  {:<20} {}", r.name, r.role);
    }
    Ok(())
}

fn print_timing(stats: &FrontendStats) {
    println!("\nPhase timing:");
    println!("  Lexical analysis  {:>8.3}s", stats.lexer_time);
    println!("  Parsing           {:>8.3}s", stats.parser_time);
    println!("  Total             {:>8.3}s", stats.total_time);
    println!("  Tokens            {:>8}", stats.token_count);
}

fn run(args: &Cli) -> PasResult<()> {
    let (ast, stats) = build_tree(&args.path, args)?;

    if args.show_ast {
        println!("\nAbstract Syntax Tree:");
        if ast.stmts().iter().all(|stmt| stmt.is_empty()) {
            println!("  (empty)");
        } else {
            println!("{}", ast);
        }
    }

    if args.stats {
        print_node_counts(&ast)?;
    }

    if let Some(pattern) = &args.find {
        print_matches(&ast, pattern)?;
    }

    if args.timing {
        print_timing(&stats);
    }

    if args.verbose {
        println!("Parsing successful!");
    }
    Ok(())
}

fn main() {
    let args = Cli::parse();

    if let Err(e) = run(&args) {
        fatal(&format!("Failed: {}", e));
    }
}
