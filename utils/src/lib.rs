// Test helpers shared by the integration tests

pub fn fib_iter(n: u64) -> u64 {
    (0..n).fold((0u64, 1u64), |(a, b), _| (b, a + b)).0
}

// One run's output, split into results and elapsed seconds
#[derive(Debug, PartialEq)]
pub struct Transcript {
    pub values: Vec<u64>,
    pub elapsed_secs: f64,
}

// Expects numeric lines, then `marker`, then exactly one float line
pub fn parse_transcript(text: &str, marker: &str) -> Result<Transcript, String> {
    let lines: Vec<&str> = text.lines().collect();
    let pos = lines
        .iter()
        .position(|line| *line == marker)
        .ok_or_else(|| format!("missing {:?} line", marker))?;

    let values = lines[..pos]
        .iter()
        .map(|line| line.parse::<u64>().map_err(|e| format!("{:?}: {}", line, e)))
        .collect::<Result<Vec<u64>, String>>()?;

    match &lines[pos + 1..] {
        [secs] => {
            let elapsed_secs = secs.parse::<f64>().map_err(|e| format!("{:?}: {}", secs, e))?;
            Ok(Transcript { values, elapsed_secs })
        }
        rest => Err(format!("expected one line after {:?}, found {}", marker, rest.len())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iterative_values() {
        let expected = [0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55];
        for (n, f) in expected.iter().enumerate() {
            assert_eq!(fib_iter(n as u64), *f);
        }
        assert_eq!(fib_iter(29), 514229);
        assert_eq!(fib_iter(50), 12586269025);
    }

    #[test]
    fn parse_ok() {
        let t = parse_transcript("0\n1\n1\nTIME\n0.25\n", "TIME").unwrap();
        assert_eq!(t, Transcript { values: vec![0, 1, 1], elapsed_secs: 0.25 });
    }

    #[test]
    fn parse_errors() {
        assert!(parse_transcript("0\n1\n", "TIME").is_err());
        assert!(parse_transcript("0\nx\nTIME\n0.1\n", "TIME").is_err());
        assert!(parse_transcript("0\nTIME\n", "TIME").is_err());
        assert!(parse_transcript("0\nTIME\n0.1\n0.2\n", "TIME").is_err());
    }
}
