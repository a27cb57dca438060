use argh::FromArgs;
use linmat::{LinalgError, Matrix, Vector};

#[derive(FromArgs)]
/// Check whether a resource allocation state is safe (banker's algorithm).
struct Args {
    /// resources currently held by each process, one row per process (e.g. "0,1;2,0")
    #[argh(option, short = 'a')]
    allocation: String,

    /// maximum resources each process may claim, same shape as the allocation
    #[argh(option, short = 'c')]
    claim: String,

    /// resources currently free (e.g. "3,3")
    #[argh(option, short = 'f')]
    free: String,
}

/// Outcome of a safety check.
#[derive(Debug)]
struct SafetyReport {
    /// Whether every process could run to completion.
    safe: bool,
    /// Processes in the order they were executed.
    order: Vec<usize>,
    /// Outstanding needs after the check.
    need: Matrix,
    /// Free resources after the executed processes released theirs.
    free: Vector,
}

/// Run every process whose outstanding need fits in the free resources until
/// no further process can run.
fn check_safe_state(
    allocation: &Matrix,
    claim: &Matrix,
    free: &Vector,
) -> Result<SafetyReport, LinalgError> {
    let mut need = claim.subtract(allocation)?;
    let mut free = free.clone();
    let mut finished = vec![false; need.column_length()];
    let mut order = Vec::new();

    log::debug!("need matrix:\n{}", need);

    loop {
        let mut progressed = false;

        for process in 0..need.column_length() {
            if finished[process] {
                continue;
            }

            let remaining = free.subtract(need.get_row_vector(process)?)?;
            if remaining.iter().any(|&v| v < 0.0) {
                log::debug!("process {process} must wait, free {free}");
                continue;
            }

            free = free.add(allocation.get_row_vector(process)?)?;
            need = need.set_row_vector(process, Vector::zeros(need.row_length()))?;
            finished[process] = true;
            order.push(process);
            progressed = true;

            log::info!("executed process {process}, free {free}");
        }

        if !progressed {
            break;
        }
    }

    Ok(SafetyReport {
        safe: need.is_zero(),
        order,
        need,
        free,
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let allocation: Matrix = args.allocation.parse()?;
    let claim: Matrix = args.claim.parse()?;
    let free: Vector = args.free.parse()?;

    let report = check_safe_state(&allocation, &claim, &free)?;

    println!("execution order: {:?}", report.order);
    println!("remaining need:\n{}", report.need);
    println!("free resources: {}", report.free);
    println!("safe state: {}", report.safe);

    Ok(())
}
