error_chain::error_chain! {
    foreign_links {
        Io(std::io::Error);
        Args(pico_args::Error);
        ThreadPool(rayon::ThreadPoolBuildError);
    }

    errors {
        MissingValue(expected: usize, found: usize) {
            description("input ended before all slime sizes were read"),
            display("expected {} slime sizes, found {}", expected, found),
        }
        NonPositive(position: usize, value: i64) {
            description("slime size must be positive"),
            display("slime size #{} is {}, sizes must be positive", position, value),
        }
        Overflow(start: usize, end: usize) {
            description("experience does not fit in 64 bits"),
            display("experience of interval [{}, {}] overflows i64", start, end),
        }
        TooLargeForNaive(n: usize, max: usize) {
            description("too many slimes for exhaustive enumeration"),
            display("exhaustive enumeration supports at most {} slimes, got {}", max, n),
        }
    }
}
