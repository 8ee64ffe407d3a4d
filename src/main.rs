use std::{env, io, path::PathBuf, process, time::Instant};

use lexscan::{display_error, report::report::write_report, scan_source};

fn main() {
    let args: Vec<String> = env::args().collect();

    let file_path = if args.len() > 1 {
        PathBuf::from(&args[1])
    } else {
        PathBuf::from("input.txt")
    };

    let start = Instant::now();

    let buckets = match scan_source(file_path) {
        Ok(buckets) => buckets,
        Err(error) => {
            display_error(error);
            process::exit(1);
        }
    };

    println!("Scanned in {:?}", start.elapsed());

    let stdout = io::stdout();
    write_report(&mut stdout.lock(), &buckets).expect("Failed to write report!");
}
