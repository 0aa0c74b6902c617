pub mod doubling;
pub mod engine;
pub mod errors;
pub mod extraction;
pub mod input;
pub mod naive;
pub mod serialization;

use {
    doubling::Doubled,
    engine::Strategy,
    errors::*,
    extraction::Best,
    serialization::Report,
};

macro_rules! wrapper_for {
    ($Outer:ty, $field:ident, $Inner:ty) => {
        impl std::ops::Deref for $Outer {
            type Target = $Inner;

            fn deref(&self) -> &Self::Target {
                &self.$field
            }
        }

        impl From<$Outer> for $Inner {
            fn from(value: $Outer) -> Self {
                value.$field
            }
        }
    };
}

pub(crate) use wrapper_for;

/// Most experience obtainable by fusing the whole ring, `None` if it is empty.
pub fn solve(ring: &[i64], strategy: Strategy) -> Result<Option<Best>> {
    solve_with(ring, strategy, |_| {})
}

pub fn solve_with(
    ring: &[i64],
    strategy: Strategy,
    on_pass: impl FnMut(usize),
) -> Result<Option<Best>> {
    let Some(doubled) = Doubled::new(ring) else {
        return Ok(None);
    };

    let now = std::time::Instant::now();
    let table = engine::fill_with(&doubled, strategy, on_pass)?;
    log::info!("dp over {} slimes took {:?}", doubled.n(), now.elapsed());

    Ok(Some(extraction::best_rotation(&table)))
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Options {
    pub strategy: Strategy,
    /// Use the exhaustive enumerator instead of the DP.
    pub naive: bool,
    /// Redraw a length-pass status line on stderr.
    pub progress: bool,
}

/// Parses `text` and solves it. `Ok(None)` when the input holds nothing to solve.
pub fn run(text: &str, options: Options) -> Result<Option<Report>> {
    let Some(ring) = input::parse(text)? else {
        return Ok(None);
    };
    let n = ring.len();

    if options.naive {
        return Ok(Some(Report::naive(n, naive::best_experience(&ring)?)));
    }

    let best = solve_with(&ring, options.strategy, |len| {
        if options.progress {
            print_overwrite(&format!("length {len}/{n}"));
        }
    })?;
    if options.progress {
        eprintln!();
    }

    Ok(best.map(|best| Report::new(n, best)))
}

/// Redraws a single status line on stderr.
pub fn print_overwrite(str: &str) {
    eprint!("\r{}\r{str}", " ".repeat(str.len() + 1));
}
