use rayon::prelude::*;

use pixbox_image::{Image, ImageError};

/// Controls how row-wise operations are executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Use the global Rayon thread pool to process rows in parallel.
    #[default]
    ParallelRows,

    /// Run sequentially on the current thread.
    ///
    /// Useful for small images, debugging, or when the overhead of parallelization
    /// outweighs the benefits.
    Serial,

    /// Run on a local thread pool with `n` threads.
    ///
    /// # Warning
    /// Creates a new thread pool on every call, which has significant overhead.
    Fixed(usize),
}

/// Apply a function to each pixel in the image in parallel.
pub fn par_iter_rows<T1, const C1: usize, T2, const C2: usize>(
    src: &Image<T1, C1>,
    dst: &mut Image<T2, C2>,
    f: impl Fn(&[T1], &mut [T2]) + Send + Sync,
) where
    T1: Send + Sync,
    T2: Send + Sync,
{
    let cols = src.cols();
    src.as_slice()
        .par_chunks_exact(C1 * cols)
        .zip(dst.as_slice_mut().par_chunks_exact_mut(C2 * cols))
        .for_each(|(src_chunk, dst_chunk)| {
            src_chunk
                .chunks_exact(C1)
                .zip(dst_chunk.chunks_exact_mut(C2))
                .for_each(|(src_pixel, dst_pixel)| {
                    f(src_pixel, dst_pixel);
                });
        });
}

/// Apply a function to every row of `dst` together with its row index.
///
/// # Arguments
///
/// * `strategy` - The execution strategy.
/// * `dst` - The destination buffer, a whole number of rows.
/// * `row_len` - The number of elements in a row (width * channels).
/// * `f` - The operation receiving `(row_index, row)`.
///
/// # Errors
///
/// Fails with [`ImageError::ParallelError`] if the row length is zero or a
/// fixed pool cannot be built.
pub fn for_each_row<T, F>(
    strategy: ExecutionStrategy,
    dst: &mut [T],
    row_len: usize,
    f: F,
) -> Result<(), ImageError>
where
    T: Send,
    F: Fn(usize, &mut [T]) + Send + Sync,
{
    if row_len == 0 {
        return Err(ImageError::ParallelError(
            "row length must be > 0".to_string(),
        ));
    }

    match strategy {
        ExecutionStrategy::Serial => {
            dst.chunks_exact_mut(row_len)
                .enumerate()
                .for_each(|(y, row)| f(y, row));
        }
        ExecutionStrategy::ParallelRows => {
            dst.par_chunks_exact_mut(row_len)
                .enumerate()
                .for_each(|(y, row)| f(y, row));
        }
        ExecutionStrategy::Fixed(n) => {
            if n == 0 {
                return Err(ImageError::ParallelError(format!(
                    "thread count must be > 0, got {n}"
                )));
            }
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .map_err(|e| ImageError::ParallelError(e.to_string()))?;

            pool.install(|| {
                dst.par_chunks_exact_mut(row_len)
                    .enumerate()
                    .for_each(|(y, row)| f(y, row));
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_each_row_serial() -> Result<(), ImageError> {
        let mut dst = vec![0usize; 6];
        for_each_row(ExecutionStrategy::Serial, &mut dst, 2, |y, row| {
            row.iter_mut().for_each(|v| *v = y);
        })?;
        assert_eq!(dst, vec![0, 0, 1, 1, 2, 2]);
        Ok(())
    }

    #[test]
    fn test_for_each_row_parallel() -> Result<(), ImageError> {
        let mut dst = vec![0usize; 6];
        for_each_row(ExecutionStrategy::ParallelRows, &mut dst, 3, |y, row| {
            row.iter_mut().enumerate().for_each(|(x, v)| *v = y * 10 + x);
        })?;
        assert_eq!(dst, vec![0, 1, 2, 10, 11, 12]);
        Ok(())
    }

    #[test]
    fn test_for_each_row_fixed() -> Result<(), ImageError> {
        let mut dst = vec![1u8; 4];
        for_each_row(ExecutionStrategy::Fixed(2), &mut dst, 1, |_, row| {
            row[0] *= 2;
        })?;
        assert_eq!(dst, vec![2, 2, 2, 2]);
        Ok(())
    }

    #[test]
    fn test_for_each_row_fixed_error() {
        let mut dst = vec![0u8; 4];
        let res = for_each_row(ExecutionStrategy::Fixed(0), &mut dst, 2, |_, _| {});
        assert!(matches!(res, Err(ImageError::ParallelError(_))));
    }

    #[test]
    fn test_for_each_row_zero_stride() {
        let mut dst = vec![0u8; 4];
        let res = for_each_row(ExecutionStrategy::Serial, &mut dst, 0, |_, _| {});
        assert!(matches!(res, Err(ImageError::ParallelError(_))));
    }

    #[test]
    fn test_par_iter_rows() -> Result<(), ImageError> {
        let src = Image::<u8, 2>::new([2, 1].into(), vec![1, 2, 3, 4])?;
        let mut dst = Image::<u8, 1>::from_size_val(src.size(), 0)?;
        par_iter_rows(&src, &mut dst, |s, d| d[0] = s[0] + s[1]);
        assert_eq!(dst.as_slice(), &[3, 7]);
        Ok(())
    }
}
