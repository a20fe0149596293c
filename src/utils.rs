use std::ops::Mul;

/// Multiply `n` by 100.
///
/// ```rust
/// use lambdata::utils::enlarge;
///
/// assert_eq!(enlarge(3), 300);
/// assert_eq!(enlarge(0.5), 50.0);
/// ```
pub fn enlarge<T>(n: T) -> T
where
    T: Mul<Output = T> + From<u8>,
{
    n * T::from(100)
}
