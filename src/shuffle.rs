use crate::error::Error;
use crate::source::UniformSource;
use crate::Result;

/// Randomly permutes `values` in place (Fisher-Yates).
///
/// Walks the slice from the back, swapping each element with one picked from
/// the not yet visited prefix, itself included. Slices of 0 or 1 elements are
/// left untouched and don't consume any draws.
pub fn shuffle<T, S>(values: &mut [T], source: &mut S)
where
    S: UniformSource + ?Sized,
{
    // the final step (i == 0) could only ever swap with itself
    for i in (1..values.len()).rev() {
        let z = source.next_index(i);
        debug_assert!(z <= i);
        values.swap(i, z);
    }
}

/// Shuffles only the first `len` elements of `values`, leaving the rest as is.
pub fn shuffle_prefix<T, S>(values: &mut [T], len: usize, source: &mut S) -> Result<()>
where
    S: UniformSource + ?Sized,
{
    let actual = values.len();
    let prefix = values
        .get_mut(..len)
        .ok_or(Error::LengthOutOfBounds { len, actual })?;
    shuffle(prefix, source);
    Ok(())
}
