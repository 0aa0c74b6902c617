use {crate::errors::*, error_chain::bail};

/// Parses `n` followed by `n` positive slime sizes, whitespace separated.
///
/// `Ok(None)` means there is nothing to solve: no input at all, or a first
/// token that is not a positive count. Anything after the `n` sizes is ignored.
pub fn parse(text: &str) -> Result<Option<Vec<i64>>> {
    let mut tokens = text.split_ascii_whitespace();

    let n = match tokens.next().map(str::parse::<usize>) {
        Some(Ok(n)) if n > 0 => n,
        Some(_) => {
            log::warn!("no positive slime count at start of input");
            return Ok(None);
        }
        None => return Ok(None),
    };

    let mut ring = Vec::new();

    for position in 1..=n {
        let Some(token) = tokens.next() else {
            bail!(ErrorKind::MissingValue(n, position - 1));
        };

        let size: i64 = token
            .parse()
            .chain_err(|| format!("slime size #{position} is not an integer: {token:?}"))?;

        if size <= 0 {
            bail!(ErrorKind::NonPositive(position, size));
        }

        ring.push(size);
    }

    Ok(Some(ring))
}

#[test]
fn test_parse() {
    assert_eq!(parse("3\n1 2 3\n").unwrap(), Some(vec![1, 2, 3]));
    assert_eq!(parse("  2 7\t\t9 trailing junk").unwrap(), Some(vec![7, 9]));
}

#[test]
fn test_nothing_to_solve() {
    assert_eq!(parse("").unwrap(), None);
    assert_eq!(parse(" \n\t").unwrap(), None);
    assert_eq!(parse("slimes").unwrap(), None);
    assert_eq!(parse("0").unwrap(), None);
    assert_eq!(parse("-4 1 2").unwrap(), None);
}

#[test]
fn test_malformed_sizes() {
    assert!(matches!(
        parse("4 1 2").unwrap_err().kind(),
        ErrorKind::MissingValue(4, 2)
    ));
    assert!(matches!(
        parse("2 5 0").unwrap_err().kind(),
        ErrorKind::NonPositive(2, 0)
    ));
    assert!(matches!(
        parse("18446744073709551615 1").unwrap_err().kind(),
        ErrorKind::MissingValue(usize::MAX, 1)
    ));
    assert!(matches!(
        parse("100000000000 1 2").unwrap_err().kind(),
        ErrorKind::MissingValue(100000000000, 2)
    ));
    assert!(matches!(
        parse("2 5 x").unwrap_err().kind(),
        ErrorKind::Msg(_)
    ));
}
