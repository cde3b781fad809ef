use anyhow::Result;
use chrono::Local;
use clap::{App, Arg};

/// Command line arguments parsed with clap's builder API (pinned to the 2.x
/// line the teacher crate depends on).  Mirrors the flag set of the Go
/// original's `internal/arguments` package, extended with the error-budget
/// and enrichment flags the Rust port added.
#[derive(Debug, Clone)]
pub struct Args {
    pub fastq: String,
    pub format: String,
    pub sample_barcodes_option: Option<String>,
    pub counted_barcodes_option: Option<String>,
    pub output_dir: String,
    pub threads: usize,
    pub prefix: String,
    pub merge_output: bool,
    pub enrich: bool,
    pub barcodes_errors_option: Option<u16>,
    pub sample_errors_option: Option<u16>,
    pub constant_errors_option: Option<u16>,
    pub min_average_quality_score: f32,
}

impl Args {
    /// Parses `std::env::args()` into an `Args` struct, applying the same
    /// defaults the teacher's main.rs assumed were already applied upstream:
    /// threads defaults to 3x the CPU count, error budgets of `-1` mean
    /// "use 20% of the region size", and the output prefix defaults to
    /// today's date so per-sample files land as `<date>_<sample>_counts.csv`.
    pub fn new() -> Result<Self> {
        let matches = App::new("barcode-count")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Counts barcodes located in next-generation sequencing data")
            .arg(
                Arg::with_name("fastq")
                    .short("f")
                    .long("fastq")
                    .takes_value(true)
                    .required(true)
                    .help("FASTQ file, plain or bgzip compressed (*.fastq or *.fastq.gz)"),
            )
            .arg(
                Arg::with_name("format")
                    .short("q")
                    .long("sequence-format")
                    .takes_value(true)
                    .required(true)
                    .help("Sequence format file"),
            )
            .arg(
                Arg::with_name("sample_barcodes")
                    .short("s")
                    .long("sample-barcodes")
                    .takes_value(true)
                    .help("Sample barcode conversion file. Omit to disable sample correction"),
            )
            .arg(
                Arg::with_name("counted_barcodes")
                    .short("c")
                    .long("counted-barcodes")
                    .takes_value(true)
                    .help("Counted barcode conversion file. Omit to disable counted-barcode correction"),
            )
            .arg(
                Arg::with_name("output_dir")
                    .short("o")
                    .long("output-dir")
                    .takes_value(true)
                    .default_value("./")
                    .help("Directory to write the output files to"),
            )
            .arg(
                Arg::with_name("prefix")
                    .short("p")
                    .long("prefix")
                    .takes_value(true)
                    .help("Prefix for output file names. Defaults to today's date"),
            )
            .arg(
                Arg::with_name("merge_output")
                    .short("m")
                    .long("merge-output")
                    .takes_value(false)
                    .help("Also write a merged counts file across all samples"),
            )
            .arg(
                Arg::with_name("enrich")
                    .short("e")
                    .long("enrich")
                    .takes_value(false)
                    .help("Also write single and double counted-barcode enrichment files"),
            )
            .arg(
                Arg::with_name("threads")
                    .short("t")
                    .long("threads")
                    .takes_value(true)
                    .help("Number of threads to use. Defaults to 3x the number of CPU cores"),
            )
            .arg(
                Arg::with_name("max_errors_counted_barcode")
                    .long("max-errors-counted-barcode")
                    .takes_value(true)
                    .default_value("-1")
                    .help("Max mismatches allowed per counted barcode. -1 defaults to 20% of the barcode length"),
            )
            .arg(
                Arg::with_name("max_errors_sample")
                    .long("max-errors-sample")
                    .takes_value(true)
                    .default_value("-1")
                    .help("Max mismatches allowed in the sample barcode. -1 defaults to 20% of the barcode length"),
            )
            .arg(
                Arg::with_name("max_errors_constant")
                    .long("max-errors-constant")
                    .takes_value(true)
                    .default_value("-1")
                    .help("Max mismatches allowed in the constant region. -1 defaults to 20% of the constant region length"),
            )
            .arg(
                Arg::with_name("min_average_quality_score")
                    .long("min-average-quality-score")
                    .takes_value(true)
                    .default_value("0.0")
                    .help("Minimum average Phred quality score allowed per barcode region. 0 disables the filter"),
            )
            .get_matches();

        let threads = match matches.value_of("threads") {
            Some(value) => value.parse::<usize>()?,
            None => num_cpus::get() * 3,
        };

        let prefix = match matches.value_of("prefix") {
            Some(value) => value.to_string(),
            None => Local::now().format("%Y-%m-%d").to_string(),
        };

        Ok(Args {
            fastq: matches.value_of("fastq").unwrap().to_string(),
            format: matches.value_of("format").unwrap().to_string(),
            sample_barcodes_option: matches.value_of("sample_barcodes").map(str::to_string),
            counted_barcodes_option: matches.value_of("counted_barcodes").map(str::to_string),
            output_dir: matches.value_of("output_dir").unwrap().to_string(),
            threads,
            prefix,
            merge_output: matches.is_present("merge_output"),
            enrich: matches.is_present("enrich"),
            barcodes_errors_option: sentinel_to_option(matches.value_of("max_errors_counted_barcode"))?,
            sample_errors_option: sentinel_to_option(matches.value_of("max_errors_sample"))?,
            constant_errors_option: sentinel_to_option(matches.value_of("max_errors_constant"))?,
            min_average_quality_score: matches
                .value_of("min_average_quality_score")
                .unwrap()
                .parse::<f32>()?,
        })
    }
}

/// `-1` is the CLI sentinel for "use the 20% default"; any other value is a
/// user-supplied error budget.
fn sentinel_to_option(value: Option<&str>) -> Result<Option<u16>> {
    match value {
        None => Ok(None),
        Some(raw) => {
            let parsed = raw.parse::<i32>()?;
            if parsed < 0 {
                Ok(None)
            } else {
                Ok(Some(parsed as u16))
            }
        }
    }
}
