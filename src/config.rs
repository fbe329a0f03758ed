/// Ciura's empirically tuned gap sequence, largest first.
pub const CIURA_GAPS: [usize; 8] = [701, 301, 132, 57, 23, 10, 4, 1];

/// Number of leading elements the driver prints after each sort.
pub const PREVIEW_LEN: usize = 10;

pub const DEFAULT_LEN: usize = 10_000;
pub const DEFAULT_MAX_VALUE: u32 = 50_000;
pub const DEFAULT_SEED: u64 = 12345;

pub const fn is_valid_gap_sequence(gaps: &[usize]) -> bool {
    if gaps.is_empty() || gaps[gaps.len() - 1] != 1 {
        return false;
    }
    let mut i = 1;
    while i < gaps.len() {
        if gaps[i - 1] <= gaps[i] {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = {
    assert!(is_valid_gap_sequence(&CIURA_GAPS), "CIURA_GAPS must be strictly decreasing and end in 1");
    assert!(PREVIEW_LEN > 0, "PREVIEW_LEN must be positive");
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gap_sequence_validation() {
        assert!(is_valid_gap_sequence(&[1]));
        assert!(is_valid_gap_sequence(&[10, 4, 1]));
        assert!(!is_valid_gap_sequence(&[]));
        assert!(!is_valid_gap_sequence(&[4, 2]));
        assert!(!is_valid_gap_sequence(&[4, 4, 1]));
        assert!(!is_valid_gap_sequence(&[1, 4]));
    }
}
