use {
    slime_fusion::{engine::Strategy, errors::*, Options},
    std::io::Read,
};

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        log::error!("{err}");
        for cause in err.iter().skip(1) {
            log::error!("caused by: {cause}");
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut args = pico_args::Arguments::from_env();
    let num_threads: Option<usize> = args.opt_value_from_str("--threads")?;
    let naive = args.contains("--naive");
    let json = args.contains("--json");
    let progress = args.contains("--progress");
    let path: Option<std::path::PathBuf> = args.opt_free_from_str()?;

    let strategy = if let Some(num_threads) = num_threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()?;
        Strategy::Parallel
    } else {
        Strategy::Sequential
    };

    let mut text = String::new();
    match &path {
        Some(path) => {
            std::fs::File::open(path)
                .chain_err(|| format!("can't open {}", path.display()))?
                .read_to_string(&mut text)?;
        }
        None => {
            std::io::stdin().lock().read_to_string(&mut text)?;
        }
    }

    let options = Options {
        strategy,
        naive,
        progress,
    };

    if let Some(report) = slime_fusion::run(&text, options)? {
        println!("{}", report.render(json));
    }

    Ok(())
}
