use fivept::cli::Args;
use fivept::error::*;
use fivept::sink::WriterSink;
use fivept::solver::Solver;
use std::io::Write;
use std::process::ExitCode;

fn run(args: &Args) -> Result<()> {
    let mut sink = WriterSink::create(&args.output, args.format)?;
    let mut solver = Solver::new(&args.solver_parameters())?;

    let quiet = args.quiet;
    let summary = solver.run_with(&mut sink, |report| {
        if !quiet {
            print!("\n{}", report.t);
            let _ = std::io::stdout().flush();
        }
    })?;
    println!("\n[chrono] time_ms={}", summary.elapsed.as_millis());

    if let Some(path) = &args.csv {
        fivept::csv::write_csv_file(&solver.fields().current, path)?;
    }
    if let Some(path) = &args.image {
        fivept::image::write_image(&solver.fields().current, path)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::cli_setup("fivept");

    #[cfg(feature = "profile-with-puffin")]
    let _puffin_server = {
        let server_addr = format!("127.0.0.1:{}", puffin_http::DEFAULT_PORT);
        println!("Run this to view profiling data:  puffin_viewer {server_addr}");
        profiling::puffin::set_scopes_on(true);
        puffin_http::Server::new(&server_addr).ok()
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
