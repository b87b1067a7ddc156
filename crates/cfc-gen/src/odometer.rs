use cfc_core::{CfcError, ErrorInfo, Word};

/// Mixed-radix odometer over fixed-length tuples.
///
/// Every position carries its own inclusive maximum, so position `i` runs
/// over `[0, max_i]`. This is the opposite range convention from the
/// necklace generator's exclusive alphabet bound; the two are documented
/// separately on purpose and must not be conflated.
#[derive(Debug, Clone)]
pub struct TupleEnumerator {
    maxima: Vec<u32>,
    buffer: Vec<u32>,
}

impl TupleEnumerator {
    /// Creates an enumerator from the inclusive per-position maxima.
    pub fn new(maxima: Vec<u32>) -> Result<Self, CfcError> {
        if maxima.is_empty() {
            let info = ErrorInfo::new("empty-maxima", "at least one tuple position is required");
            return Err(CfcError::Config(info));
        }
        let buffer = vec![0; maxima.len()];
        Ok(Self { maxima, buffer })
    }

    /// Returns the number of tuple positions.
    pub fn positions(&self) -> usize {
        self.maxima.len()
    }

    /// Returns the current tuple together with a "more remain" flag.
    ///
    /// The first call yields the all-zero tuple; each call increments the
    /// least-significant position, carrying left and wrapping overflowed
    /// positions to zero. The call that yields the all-maximum tuple
    /// returns it with the flag lowered, so the caller must process that
    /// final tuple before stopping.
    pub fn next_tuple(&mut self) -> (Word, bool) {
        let tuple = Word::new(self.buffer.clone());

        let mut j = self.buffer.len();
        while j > 0 && self.buffer[j - 1] == self.maxima[j - 1] {
            self.buffer[j - 1] = 0;
            j -= 1;
        }
        if j == 0 {
            return (tuple, false);
        }
        self.buffer[j - 1] += 1;
        (tuple, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_maxima() {
        assert!(matches!(
            TupleEnumerator::new(Vec::new()),
            Err(CfcError::Config(_))
        ));
    }

    #[test]
    fn heterogeneous_ranges_step_in_odometer_order() {
        let mut enumerator = TupleEnumerator::new(vec![1, 2]).unwrap();
        let expected = [
            (vec![0, 0], true),
            (vec![0, 1], true),
            (vec![0, 2], true),
            (vec![1, 0], true),
            (vec![1, 1], true),
            (vec![1, 2], false),
        ];
        for (symbols, more) in expected {
            let (tuple, more_remain) = enumerator.next_tuple();
            assert_eq!(tuple.symbols(), &symbols[..]);
            assert_eq!(more_remain, more);
        }
    }

    #[test]
    fn final_tuple_arrives_with_the_flag_lowered() {
        let mut enumerator = TupleEnumerator::new(vec![0, 0]).unwrap();
        let (tuple, more) = enumerator.next_tuple();
        assert_eq!(tuple.symbols(), &[0, 0]);
        assert!(!more);
    }
}
