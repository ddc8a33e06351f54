use log::debug;

/// Delimiter used when detection finds nothing convincing
pub const DEFAULT_DELIMITER: u8 = b',';

/// Delimiters tried by [`DelimiterSniffer::default`]
pub const CANDIDATE_DELIMITERS: [u8; 4] = [b',', b';', b'\t', b'|'];

/// Share of sampled records (in tenths) that must agree on a delimiter count
const MIN_AGREEMENT_TENTHS: usize = 9;

/// Detects the field delimiter of a delimited text file from a sample
pub trait DialectSniffer {
    fn detect(&self, sample: &[u8]) -> Option<u8>;

    fn detect_or_default(&self, sample: &[u8]) -> u8 {
        self.detect(sample).unwrap_or(DEFAULT_DELIMITER)
    }
}

/// Picks the candidate whose per-record count is the most consistent
/// across the sampled records.
#[derive(Debug, Clone)]
pub struct DelimiterSniffer {
    candidates: Vec<u8>,
}

impl Default for DelimiterSniffer {
    fn default() -> Self {
        Self::new(CANDIDATE_DELIMITERS.to_vec())
    }
}

impl DelimiterSniffer {
    pub fn new(candidates: Vec<u8>) -> Self {
        Self { candidates }
    }

    /// Counts every candidate per record. Delimiters and line breaks inside
    /// double quotes belong to the field and are not counted. A record left
    /// unterminated at the end of the sample is dropped unless it is the
    /// only one, since the sample may have cut it short.
    fn record_counts(&self, sample: &[u8]) -> Vec<Vec<usize>> {
        let mut records = Vec::new();
        let mut current = vec![0usize; self.candidates.len()];
        let mut has_content = false;
        let mut in_quotes = false;

        for &byte in sample {
            if byte == b'"' {
                in_quotes = !in_quotes;
                has_content = true;
                continue;
            }
            if in_quotes {
                continue;
            }
            if byte == b'\n' {
                if has_content {
                    records.push(std::mem::replace(
                        &mut current,
                        vec![0; self.candidates.len()],
                    ));
                }
                has_content = false;
                continue;
            }
            if let Some(idx) = self.candidates.iter().position(|&c| c == byte) {
                current[idx] += 1;
            }
            if !byte.is_ascii_whitespace() || self.candidates.contains(&byte) {
                has_content = true;
            }
        }

        if has_content && records.is_empty() {
            records.push(current);
        }

        records
    }
}

/// Most frequent value and how many times it occurs. Ties go to the larger value.
fn modal_count(counts: impl Iterator<Item = usize>) -> (usize, usize) {
    let mut tally: Vec<(usize, usize)> = Vec::new();
    for count in counts {
        match tally.iter_mut().find(|(value, _)| *value == count) {
            Some((_, seen)) => *seen += 1,
            None => tally.push((count, 1)),
        }
    }
    tally
        .into_iter()
        .max_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(&b.0)))
        .unwrap_or((0, 0))
}

impl DialectSniffer for DelimiterSniffer {
    fn detect(&self, sample: &[u8]) -> Option<u8> {
        let records = self.record_counts(sample);
        if records.is_empty() {
            return None;
        }

        let best = self
            .candidates
            .iter()
            .enumerate()
            .filter_map(|(idx, &delimiter)| {
                let (value, agreeing) = modal_count(records.iter().map(|r| r[idx]));
                let qualifies =
                    value > 0 && agreeing * 10 >= records.len() * MIN_AGREEMENT_TENTHS;
                qualifies.then_some((agreeing, value, std::cmp::Reverse(idx), delimiter))
            })
            .max()
            .map(|(_, _, _, delimiter)| delimiter);

        match best {
            Some(delimiter) => debug!(
                "Detected delimiter {:?} from {} sampled records",
                delimiter as char,
                records.len()
            ),
            None => debug!("No delimiter detected in {} sampled records", records.len()),
        }

        best
    }
}
