use cfc_core::{CfcError, Word};
use cfc_dict::Dictionary;

use crate::odometer::TupleEnumerator;

/// Brute-forces the minimal representative of every aperiodic class.
///
/// Every tuple under the inclusive per-position `maxima` is driven through
/// a fresh non-strict dictionary. The odometer ascends lexicographically,
/// so the first member of a class to arrive is its minimal rotation; later
/// rotations bounce off the cross-check and periodic tuples off the
/// self-check. Unlike the necklace generator this supports heterogeneous
/// per-position ranges, at the intrinsic cost of visiting the full tuple
/// product.
pub fn class_representatives(maxima: &[u32]) -> Result<Vec<Word>, CfcError> {
    let mut odometer = TupleEnumerator::new(maxima.to_vec())?;
    let mut dict = Dictionary::new(maxima.len())?;
    loop {
        let (tuple, more) = odometer.next_tuple();
        // per-candidate rejections are the filter here, not failures
        let _ = dict.add(&tuple, false);
        if !more {
            break;
        }
    }
    Ok(dict.list())
}
