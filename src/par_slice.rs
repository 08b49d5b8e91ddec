use crate::decomposition::Decomposer;
use crate::util::*;

/// Sets `a[k] = (a[k] + b[k]) * 0.5` for every element.
/// Work is split into contiguous linear blocks by `decomposer`.
pub fn average_into<NumType: NumTrait>(
    a_slice: &mut [NumType],
    b_slice: &[NumType],
    decomposer: &Decomposer,
) {
    debug_assert_eq!(a_slice.len(), b_slice.len());
    let half = one_half::<NumType>();
    decomposer.run(0..a_slice.len(), a_slice, 1, |block, a_chunk| {
        for (a, b) in a_chunk.iter_mut().zip(&b_slice[block]) {
            *a = (*a + *b) * half;
        }
    });
}

#[inline]
fn one_half<NumType: NumTrait>() -> NumType {
    let two = NumType::one() + NumType::one();
    NumType::one() / two
}
