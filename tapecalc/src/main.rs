use anyhow::{Context, Result};
use clap::Parser;
use tapecalc::{
    init_logger, ActionStats, Episode, GeneratorConfig, GeneratorError, RandomOperands,
    SumProblemGenerator, DEFAULT_MAX_DIGITS, DEFAULT_TAPE_LEN,
};
use tracing::{debug, info, warn};

/// Random draws allowed per episode before giving up on operands that never
/// fit the input tape.
const MAX_DRAWS: usize = 1_000;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate addition episodes as cursor-action traces")]
struct Args {
    /// Left operand; drawn at random when omitted
    #[arg(long)]
    lhs: Option<String>,

    /// Right operand; drawn at random when omitted
    #[arg(long)]
    rhs: Option<String>,

    /// Maximum number of digits of a random operand
    #[arg(long, default_value_t = DEFAULT_MAX_DIGITS)]
    max_digits: usize,

    /// Number of cells on each tape
    #[arg(long, default_value_t = DEFAULT_TAPE_LEN)]
    tape_len: usize,

    /// Seed for the random operand source
    #[arg(long)]
    seed: Option<u64>,

    /// Number of episodes to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// Print per-action counts after the episodes
    #[arg(long)]
    stats: bool,
}

impl Args {
    fn config(&self) -> GeneratorConfig {
        GeneratorConfig::default()
            .with_tape_len(self.tape_len)
            .with_max_digits(self.max_digits)
    }

    fn source(&self) -> RandomOperands {
        match self.seed {
            Some(seed) => RandomOperands::seeded(seed),
            None => RandomOperands::from_entropy(),
        }
    }

    fn draws_operands(&self) -> bool {
        self.lhs.is_none() || self.rhs.is_none()
    }
}

/// Generates one episode, drawing again whenever randomly drawn operands do
/// not fit the input tape. Operands given on the command line are never
/// replaced.
fn generate_episode(
    generator: &mut SumProblemGenerator,
    source: &mut RandomOperands,
    args: &Args,
) -> Result<Episode, GeneratorError> {
    let mut draws = 1;
    loop {
        match generator.generate_sum_with(args.lhs.as_deref(), args.rhs.as_deref(), source) {
            Err(err) if args.draws_operands() && err.is_input_overflow() && draws < MAX_DRAWS => {
                debug!(%err, draws, "operands do not fit, drawing again");
                draws += 1;
            }
            result => return result,
        }
    }
}

fn main() -> Result<()> {
    let _guard = init_logger();
    let args = Args::parse();

    let config = args.config();
    if args.draws_operands() && !config.random_operands_fit() {
        warn!(
            max_digits = config.max_digits,
            tape_len = config.tape_len,
            "some random operand pairs will not fit the input tape and will be redrawn"
        );
    }

    let mut generator = SumProblemGenerator::new(config);
    let mut source = args.source();

    let mut stats = ActionStats::new();
    for i in 0..args.count {
        let episode = generate_episode(&mut generator, &mut source, &args)
            .with_context(|| format!("failed to generate episode {i}"))?;
        info!(
            lhs = episode.lhs(),
            rhs = episode.rhs(),
            actions = episode.trace().len(),
            "generated episode"
        );
        stats.record_trace(episode.trace());
        println!("{episode}\n");
    }

    if args.stats {
        for (action, count) in stats.iter() {
            println!("{:>2}: {count}", action.token());
        }
        println!(
            "moves: {}, writes: {}, total: {}",
            stats.moves(),
            stats.writes(),
            stats.total()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        Args::parse_from(std::iter::once("tapecalc").chain(extra.iter().copied()))
    }

    #[test]
    fn test_default_flags_redraw_overflowing_operands() {
        for seed in 1..=8u64 {
            let args = args(&["--seed", &seed.to_string(), "-n", "10"]);
            let mut generator = SumProblemGenerator::new(args.config());
            let mut source = args.source();

            for _ in 0..args.count {
                let episode = generate_episode(&mut generator, &mut source, &args).unwrap();
                let expected =
                    episode.lhs().parse::<u128>().unwrap() + episode.rhs().parse::<u128>().unwrap();
                assert_eq!(episode.result_value(), Some(expected));
            }
        }
    }

    #[test]
    fn test_given_operands_are_not_redrawn() {
        let args = args(&["--lhs", "12345678", "--rhs", "87654321", "--seed", "1"]);
        let mut generator = SumProblemGenerator::new(args.config());
        let mut source = args.source();

        let err = generate_episode(&mut generator, &mut source, &args).unwrap_err();
        assert!(err.is_input_overflow());
    }

    #[test]
    fn test_one_given_operand_redraws_the_other() {
        let args = args(&["--lhs", "1234567", "--seed", "5", "-n", "20"]);
        let mut generator = SumProblemGenerator::new(args.config());
        let mut source = args.source();

        for _ in 0..args.count {
            let episode = generate_episode(&mut generator, &mut source, &args).unwrap();
            assert_eq!(episode.lhs(), "1234567");
            assert!(episode.rhs().len() <= 6);
        }
    }

    #[test]
    fn test_gives_up_when_nothing_fits() {
        let args = args(&["--tape-len", "4", "--seed", "2"]);
        let mut generator = SumProblemGenerator::new(args.config());
        let mut source = args.source();

        let err = generate_episode(&mut generator, &mut source, &args).unwrap_err();
        assert!(err.is_input_overflow());
    }
}
