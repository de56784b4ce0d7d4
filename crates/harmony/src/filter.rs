//! Running-window filters over sample streams.

use alloc::collections::VecDeque;
use core::num::NonZeroUsize;
use core::ops::{Add, Sub};

/// Lazy running sum over the trailing `window` samples.
///
/// Created by [`windowed_sum`].
#[derive(Debug, Clone)]
pub struct WindowedSum<I: Iterator> {
    samples: I,
    window: VecDeque<I::Item>,
    size: usize,
    value: I::Item,
    primed: bool,
}

/// Sum every run of `window` consecutive samples.
///
/// The first item is the sum of the first `window` samples; after that each
/// new sample yields one more item, the sum of the trailing `window` samples.
/// An input shorter than the window yields a single sum of whatever it held
/// (`T::default()` for an empty input).
///
/// The input is consumed once, lazily.
///
/// ```rust
/// use core::num::NonZeroUsize;
/// use int_harmony::windowed_sum;
///
/// let window = NonZeroUsize::new(2).unwrap();
/// let sums: Vec<i64> = windowed_sum(window, [1, 2, 3, 4]).collect();
/// assert_eq!(sums, vec![3, 5, 7]);
/// ```
pub fn windowed_sum<I, T>(window: NonZeroUsize, samples: I) -> WindowedSum<I::IntoIter>
where
    I: IntoIterator<Item = T>,
    T: Copy + Default + Add<Output = T> + Sub<Output = T>,
{
    WindowedSum {
        samples: samples.into_iter(),
        window: VecDeque::with_capacity(window.get()),
        size: window.get(),
        value: T::default(),
        primed: false,
    }
}

impl<I, T> Iterator for WindowedSum<I>
where
    I: Iterator<Item = T>,
    T: Copy + Default + Add<Output = T> + Sub<Output = T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if !self.primed {
            self.primed = true;
            for sample in self.samples.by_ref().take(self.size) {
                self.window.push_back(sample);
                self.value = self.value + sample;
            }
            return Some(self.value);
        }

        let sample = self.samples.next()?;
        if let Some(oldest) = self.window.pop_front() {
            self.value = self.value - oldest;
        }
        self.window.push_back(sample);
        self.value = self.value + sample;
        Some(self.value)
    }
}
