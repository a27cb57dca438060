use argh::FromArgs;
use linmat::{LinalgError, Matrix};
use std::fmt::Display;

#[derive(FromArgs)]
/// Print the determinant, cofactor, adjoint, inverse and powers of a matrix.
struct Args {
    /// matrix rows separated by ';', entries by ',' (e.g. "1,2;3,4")
    #[argh(option, short = 'm')]
    matrix: String,

    /// a second matrix to add, subtract and multiply with
    #[argh(option, short = 'o')]
    other: Option<String>,

    /// raise the matrix to this integer power
    #[argh(option, short = 'p')]
    power: Option<i32>,

    /// number of decimals to print
    #[argh(option, default = "2")]
    precision: usize,
}

fn report<T: Display>(label: &str, result: Result<T, LinalgError>, precision: usize) {
    match result {
        Ok(value) => println!("{label}:\n{value:.precision$}\n"),
        Err(err) => println!("{label}: {err}\n"),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();
    let precision = args.precision;

    let a: Matrix = args.matrix.parse()?;
    log::info!(
        "parsed a {}x{} matrix",
        a.column_length(),
        a.row_length()
    );

    println!("A:\n{a:.precision$}\n");
    println!("square: {}\n", a.is_square());
    report("det(A)", a.determinant(), precision);
    report("transpose(A)", Ok(a.transpose()), precision);
    report("cofactor(A)", a.cofactor_matrix(), precision);
    report("adjoint(A)", a.adjoint(), precision);
    report("inverse(A)", a.inverse(), precision);

    if let Some(exponent) = args.power {
        report(&format!("A^{exponent}"), a.power(exponent), precision);
    }

    if let Some(other) = args.other {
        let b: Matrix = other.parse()?;
        println!("B:\n{b:.precision$}\n");
        report("A + B", a.add(&b), precision);
        report("A - B", a.subtract(&b), precision);
        report("A * B", a.multiply(&b), precision);
    }

    Ok(())
}
