use anyhow::{Result, bail};

use snakeladder_game::constants::{MAX_PLAYERS, MIN_PLAYERS};

const DEFAULT_SEED: u64 = 1337;

/// Resolve CLI seed tokens into a deduplicated seed list.
///
/// Accepts decimal integers (negative values use their magnitude) and
/// `0x`-prefixed hex. An empty list falls back to the default seed.
pub fn resolve_seed_inputs(tokens: &[String]) -> Result<Vec<u64>> {
    let mut seeds: Vec<u64> = Vec::new();

    for token in tokens {
        if token.is_empty() {
            continue;
        }

        let seed = if let Some(hex) = token
            .strip_prefix("0x")
            .or_else(|| token.strip_prefix("0X"))
        {
            u64::from_str_radix(&hex.replace('_', ""), 16).ok()
        } else if let Ok(value) = token.parse::<i64>() {
            Some(value.unsigned_abs())
        } else {
            token.parse::<u64>().ok()
        };

        let Some(seed) = seed else {
            bail!("Unrecognized seed token: {token}");
        };
        if !seeds.contains(&seed) {
            seeds.push(seed);
        }
    }

    if seeds.is_empty() {
        seeds.push(DEFAULT_SEED);
    }

    Ok(seeds)
}

/// Resolve the `--players` list, keeping only valid table sizes.
pub fn resolve_player_counts(tokens: &[String]) -> Result<Vec<usize>> {
    let mut counts = Vec::new();
    for token in tokens {
        let Ok(count) = token.parse::<usize>() else {
            bail!("Unrecognized player count: {token}");
        };
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            bail!("Player count {count} is outside {MIN_PLAYERS}..={MAX_PLAYERS}");
        }
        if !counts.contains(&count) {
            counts.push(count);
        }
    }
    if counts.is_empty() {
        counts.push(MIN_PLAYERS);
    }
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn resolves_decimal_negative_and_hex() {
        let seeds = resolve_seed_inputs(&tokens(&["42", "-7", "0xFF", "42"])).unwrap();
        assert_eq!(seeds, vec![42, 7, 255]);
    }

    #[test]
    fn rejects_garbage_and_defaults_when_empty() {
        assert!(resolve_seed_inputs(&tokens(&["CL-ORANGE42"])).is_err());
        assert_eq!(resolve_seed_inputs(&[]).unwrap(), vec![DEFAULT_SEED]);
    }

    #[test]
    fn player_counts_are_bounded() {
        assert_eq!(
            resolve_player_counts(&tokens(&["2", "4", "2"])).unwrap(),
            vec![2, 4]
        );
        assert!(resolve_player_counts(&tokens(&["5"])).is_err());
        assert!(resolve_player_counts(&tokens(&["two"])).is_err());
        assert_eq!(resolve_player_counts(&[]).unwrap(), vec![2]);
    }
}
