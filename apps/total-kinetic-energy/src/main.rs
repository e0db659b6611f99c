use std::io;
use std::process::ExitCode;

use total_kinetic_energy::{Cli, execute};
use tracing_subscriber::FmtSubscriber;

fn main() -> ExitCode {
    let cli = Cli::parse_foam_args(std::env::args_os());

    // 診断ログは標準エラーへ。標準出力は報告専用
    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level())
        .with_target(false)
        .with_writer(io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("cannot initialise logging: {e}");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match execute(&cli, &mut out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("\n--> FOAM FATAL ERROR:\n{err:#}\n");
            ExitCode::FAILURE
        }
    }
}
