use crate::error::InvariantViolation;

/// Returns the first index `i` where `keys[i] >= keys[i + 1]`, or `None` when the keys are
/// strictly increasing.
pub(crate) fn find_disorder(keys: &[i64]) -> Option<usize> {
    keys.windows(2).position(|pair| pair[0] >= pair[1])
}

/// Checks that an in-order key sequence is strictly increasing. Both trees verify the BST
/// invariant this way since a strictly increasing in-order walk is equivalent to checking every
/// node against every key in its subtrees.
pub(crate) fn check_in_order(keys: &[i64]) -> Result<(), InvariantViolation> {
    match find_disorder(keys) {
        None => Ok(()),
        Some(index) => Err(InvariantViolation::OutOfOrder {
            index,
            left: keys[index],
            right: keys[index + 1],
        }),
    }
}
