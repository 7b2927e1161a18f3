mod chart;
mod logger;
mod report;

use anyhow::Context;
use clap::Parser;
use dice_sim_core as core;

#[derive(Debug, Parser)]
/// Roll two six-sided dice many times and chart how often each sum comes up
struct Args {
    /// Number of times to roll the pair of dice
    #[arg(long, short = 'n', default_value_t = core::DEFAULT_NUM_ROLLS)]
    rolls: u64,

    /// Fix the seed to get a reproducible run
    #[arg(long, short)]
    seed: Option<core::Seed>,

    /// Show the theoretical percentage next to each simulated one
    #[arg(long, short)]
    compare: bool,

    /// Only print the results, skip the bar chart
    #[arg(long)]
    no_chart: bool,

    /// Number of rows used by the chart bars, defaults to fit the terminal
    #[arg(conflicts_with = "no_chart", long, value_name = "ROWS")]
    height: Option<usize>,

    /// Increase logging output, can be repeated
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init(args.verbose)?;
    log::debug!("{args:?}");

    let num_rolls = args.rolls;

    let mut rng = match args.seed {
        Some(seed) => core::Rng::with_seed(seed),
        None => core::Rng::new(),
    };
    if let Some(seed) = rng.initial_seed() {
        log::info!("using seed {seed}");
    }

    println!("Simulating {num_rolls} dice rolls...");

    let counts = core::simulate(num_rolls, &mut rng).context("Failed to simulate dice rolls")?;
    let percentages =
        core::to_percentages(&counts, num_rolls).context("Failed to compute percentages")?;

    let expected = args.compare.then(core::expected_percentages);

    let mut out = String::new();
    report::write_report(&mut out, &percentages, expected.as_ref())?;
    print!("{out}");

    if !args.no_chart {
        let height = args.height.unwrap_or_else(fit_terminal_height);
        let chart = chart::Chart::new(&percentages, num_rolls)
            .height(height)
            .color(stdout_is_tty());

        out.clear();
        chart.render(&mut out)?;
        println!();
        print!("{out}");
    }

    Ok(())
}

// leaves room for the title and axis labels around the bars
fn fit_terminal_height() -> usize {
    match crossterm::terminal::size() {
        Ok((_, rows)) => (rows as usize).saturating_sub(8),
        Err(err) => {
            log::warn!("Failed to query terminal size: {err}");
            chart::MAX_HEIGHT / 2
        }
    }
}

fn stdout_is_tty() -> bool {
    use crossterm::tty::IsTty;

    std::io::stdout().is_tty()
}
