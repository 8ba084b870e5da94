use clap::Parser;
use opcalc::get_result;

/// opcalc evaluates a single arithmetic operation given on the command line.
///
/// Binary operations take two operands, for example `opcalc add 2 3` or
/// `opcalc divide 7 2`. The square root takes one: `opcalc sqrt 16`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The operation to evaluate: add, subtract, multiply, divide, modulo,
    /// power or sqrt.
    operation: String,

    /// One operand for sqrt, two for every other operation.
    #[arg(allow_negative_numbers = true)]
    operands: Vec<String>,
}

fn main() {
    let args = Args::parse();

    match get_result(&args.operation, &args.operands) {
        Ok(line) => println!("{line}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        },
    }
}
