use clap::{Parser, Subcommand};
use function_solver::{
    ComplexNumber, Value, evaluate, find_solution_center, get_plot_range, intersections,
    interpreter::evaluator::core::Context, parse, solve, validate,
};
use tracing::Level;

/// function-solver validates, evaluates and solves single-variable
/// expressions such as `x^2 - 4` or `log(x + 1)`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Raises the log level: `-v` for debug, `-vv` for trace.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Checks expressions and prints `valid` or their errors.
    Validate {
        /// Expressions to check.
        #[arg(required = true)]
        exprs: Vec<String>,
    },
    /// Solves `f1(x) = f2(x)` and prints the roots, the plot window and the
    /// intersection points.
    Solve {
        /// Left-hand side.
        f1:      String,
        /// Right-hand side.
        f2:      String,
        /// Prints a table of both functions at this many points of the window.
        #[arg(short, long)]
        samples: Option<usize>,
    },
    /// Evaluates an expression at a value of `x`.
    Eval {
        /// The expression.
        expr: String,
        /// The value of `x`.
        #[arg(allow_negative_numbers = true)]
        x:    f64,
    },
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_writer(std::io::stderr)
                             .with_max_level(level)
                             .init();

    let ok = match args.command {
        Command::Validate { exprs } => run_validate(&exprs),
        Command::Solve { f1, f2, samples } => run_solve(&f1, &f2, samples),
        Command::Eval { expr, x } => run_eval(&expr, x),
    };

    if !ok {
        std::process::exit(1);
    }
}

fn run_validate(exprs: &[String]) -> bool {
    let mut all_valid = true;
    for expr in exprs {
        let validation = validate(expr);
        if validation.is_valid {
            println!("{expr}: valid");
        } else {
            all_valid = false;
            for error in &validation.errors {
                println!("{expr}: {error}");
            }
        }
    }
    all_valid
}

fn run_solve(f1: &str, f2: &str, samples: Option<usize>) -> bool {
    let mut valid = true;
    for (name, expr) in [("f1", f1), ("f2", f2)] {
        for error in validate(expr).errors {
            println!("{name}: {error}");
            valid = false;
        }
    }
    if !valid {
        return false;
    }

    let roots = match solve(f1, f2) {
        Ok(roots) => roots,
        Err(e) => {
            eprintln!("{e}");
            return false;
        },
    };
    let center = find_solution_center(&roots);
    let range = get_plot_range(center, &roots);

    println!("roots: [{}]", join(roots.iter().map(ComplexNumber::to_string)));
    println!("center: {center}");
    println!("range: [{}, {}]", range.min_x, range.max_x);

    match intersections(f1, f2) {
        Ok(points) => {
            let points = points.iter()
                               .map(|p| format!("({:.4}, {})", p.x, format_value(p.y)));
            println!("intersections: {}", join(points));
        },
        Err(e) => eprintln!("{e}"),
    }

    if let Some(n) = samples
       && let (Ok(lhs), Ok(rhs)) = (parse(f1), parse(f2))
    {
        println!("{:>12} {:>16} {:>16}", "x", "f1", "f2");
        for x in range.samples(n) {
            let context = Context::new(x);
            let y1 = context.eval(&lhs).map_or_else(|_| "-".to_string(), format_value);
            let y2 = context.eval(&rhs).map_or_else(|_| "-".to_string(), format_value);
            println!("{x:>12.4} {y1:>16} {y2:>16}");
        }
    }

    true
}

fn run_eval(expr: &str, x: f64) -> bool {
    match evaluate(expr, x) {
        Ok(value) => {
            println!("{value}");
            true
        },
        Err(e) => {
            eprintln!("{e}");
            false
        },
    }
}

fn format_value(value: Value) -> String {
    match value {
        Value::Real(r) => format!("{r:.4}"),
        Value::Complex(c) => c.to_string(),
    }
}

fn join(items: impl Iterator<Item = String>) -> String {
    items.collect::<Vec<_>>().join(", ")
}
