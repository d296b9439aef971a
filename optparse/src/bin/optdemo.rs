// Demo driver: parses its own argv against a fixed option set and prints
// what was resolved.

use optparse::{args_from_os, Opt, OptId, OptParser, Result};
use tracing_subscriber::EnvFilter;

struct DemoOpts {
    args_file: OptId<String>,
}

fn register(parser: &mut OptParser) -> Result<DemoOpts> {
    parser.try_add(Opt::flag("is").short('i').description("the value of some field is"))?;
    parser.try_add(
        Opt::int("js", 1100)
            .short('j')
            .description("the value of some field js"),
    )?;
    parser.try_add(Opt::uint("ks", 2200).description("the value of some field ks"))?;
    parser.try_add(
        Opt::string("ls", "Blah")
            .short('l')
            .description("the value of some field ls"),
    )?;
    parser.try_add(Opt::flag("verbose").short('v').description("debug logging"))?;
    let args_file = parser.try_add(
        Opt::string("args-file", "").description("read more options from a file"),
    )?;
    Ok(DemoOpts { args_file })
}

fn init_logging(args: &[String]) {
    let verbose = args
        .iter()
        .skip(1)
        .take_while(|a| a.as_str() != "--")
        .any(|a| a == "-v" || a == "--verbose");
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Vec<String>) -> Result<OptParser> {
    let mut parser = OptParser::new();
    let opts = register(&mut parser)?;
    parser.parse(args.iter().cloned())?;

    let path = parser.get(opts.args_file)?.clone();
    if path.is_empty() {
        return Ok(parser);
    }

    // File options go first so the command line overrides them.
    let mut parser = OptParser::new();
    register(&mut parser)?;
    parser.load_option_file(&path)?;
    tracing::info!(path = %path, "loaded options file");
    parser.parse(args)?;
    Ok(parser)
}

fn fail(e: optparse::Error) -> ! {
    eprintln!("optdemo: {}", e);
    std::process::exit(1);
}

fn main() {
    let args = args_from_os(std::env::args_os()).unwrap_or_else(|e| fail(e));
    init_logging(&args);

    let parser = match run(args) {
        Ok(p) => p,
        Err(e) => fail(e),
    };

    for opt in parser.options() {
        let state = if opt.is_present() { "present" } else { "absent" };
        println!("{}={} ({})", opt.long_name(), opt.value(), state);
    }
    println!("program={}", parser.program_name().unwrap_or(""));
    for (i, arg) in parser.residual_args().iter().enumerate() {
        println!("residual[{}]={}", i, arg);
    }
}
