/// Compile-time knobs controlling how an array reserves memory.
///
/// Capacities are measured in bytes. When an insertion needs more room than
/// is reserved, the capacity is stepped through `scale` until it fits, and
/// the block is reallocated once to that size.
///
/// ```
/// use dyn_array::types::GrowthPolicy;
///
/// // Starts small and grows by half each step.
/// struct HalfAgain;
///
/// impl GrowthPolicy for HalfAgain {
///     const INITIAL_CAPACITY: usize = 16;
///     const SCALE_FACTOR: usize = 2;
///
///     fn scale(capacity: usize) -> Option<usize> {
///         let base = if capacity > 1 { capacity } else { 2 };
///         return base.checked_add(base / 2);
///     }
/// }
///
/// assert_eq!(HalfAgain::grown_capacity(16, 17), Some(24));
/// ```
pub trait GrowthPolicy {
    /// Bytes reserved for the payload when an array is created.
    const INITIAL_CAPACITY: usize;
    /// Multiplier applied by the default `scale`.
    const SCALE_FACTOR: usize;

    /// One growth step. A capacity of zero is treated as one.
    #[inline]
    fn scale(capacity: usize) -> Option<usize> {
        let base = if capacity > 0 { capacity } else { 1 };
        return base.checked_mul(Self::SCALE_FACTOR);
    }

    /// The capacity reached by stepping `current` until it holds `required`.
    ///
    /// Returns `current` unchanged when it is already large enough, and
    /// `None` if a step overflows or fails to increase the capacity.
    fn grown_capacity(current: usize, required: usize) -> Option<usize> {
        let mut capacity = current;
        while capacity < required {
            let next = Self::scale(capacity)?;
            if next <= capacity {
                return None;
            }
            capacity = next;
        }
        return Some(capacity);
    }
}

/// 256 initial bytes, doubling on every step.
#[derive(Debug, Copy, Clone, Default)]
pub struct DefaultGrowth;

impl GrowthPolicy for DefaultGrowth {
    const INITIAL_CAPACITY: usize = 256;
    const SCALE_FACTOR: usize = 2;
}
