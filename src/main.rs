use clap::Parser;
use tracing_subscriber::EnvFilter;

use mini_tensor::Tensor;

#[derive(Parser)]
#[command(
    name = "mini-tensor-demo",
    about = "Runs a fixed set of tensor operations and prints the results",
    version
)]
struct Cli {
    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Do not print results, only logs
    #[arg(long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let vector = Tensor::new(vec![1, 2, 3, 4], &[4])?;
    let matrix = Tensor::new(vec![1, 2, 3, 4], &[2, 2])?;

    let selections: [(&Tensor, usize, &[usize]); 7] = [
        (&vector, 0, &[0, 0, 2][..]),
        (&matrix, 0, &[0][..]),
        (&matrix, 0, &[0, 0][..]),
        (&matrix, 0, &[0, 0, 1, 1][..]),
        (&matrix, 1, &[0][..]),
        (&matrix, 1, &[0, 0][..]),
        (&matrix, 1, &[0, 0, 1, 1][..]),
    ];

    for (tensor, dim, indices) in selections {
        let call = format!("IndexSelect({}, {}, {:?})", tensor, dim, indices);
        report(cli.quiet, &call, &tensor.index_select(dim, indices));
    }

    let call = format!("Reshape({}, [4, 1])", matrix);
    report(cli.quiet, &call, &matrix.reshape(&[4, 1]));

    let other = Tensor::new(vec![2, 0, 1, 2], &[2, 2])?;
    let call = format!("HadamardProduct({}, {})", matrix, other);
    report(cli.quiet, &call, &matrix.hadamard_product(&other));

    tracing::info!("demo finished");
    Ok(())
}

/// Log failures and print the outcome unless `quiet`.
fn report(quiet: bool, call: &str, result: &mini_tensor::Result<Tensor>) {
    if let Err(e) = result {
        tracing::warn!(call, "operation failed: {}", e);
    }
    if !quiet {
        println!("{}", describe(call, result));
    }
}

fn describe(call: &str, result: &mini_tensor::Result<Tensor>) -> String {
    match result {
        Ok(tensor) => format!("{} -> {}", call, tensor),
        Err(e) => format!("Error: {}", e),
    }
}
