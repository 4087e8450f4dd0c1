//! Strassen product: seven recursive sub-products per level, `O(n^2.807)`.
//!
//! With quadrants `a11..a22`, `b11..b22` each level forms ten auxiliary
//! sums, seven products and recombines them:
//!
//! ```text
//! s1 = b12 - b22   s2 = a11 + a12   s3 = a21 + a22   s4 = b21 - b11
//! s5 = a11 + a22   s6 = b11 + b22   s7 = a12 - a22   s8 = b21 + b22
//! s9 = a11 - a21   s10 = b11 + b12
//!
//! p1 = a11 s1   p2 = s2 b22   p3 = s3 b11   p4 = a22 s4
//! p5 = s5 s6    p6 = s7 s8    p7 = s9 s10
//!
//! c11 = p5 + p4 - p2 + p6   c12 = p1 + p2
//! c21 = p3 + p4             c22 = p5 + p1 - p3 - p7
//! ```
//!
//! The seven products are independent. At sizes at or above
//! `Options::parallel_threshold` they are submitted to the worker pool and
//! all seven are joined before the combine step runs.

use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::options::Options;
use crate::pool::WorkerPool;
use crate::quadrant::{check_operands, leaf_product, Quadrants};

/// Multiply `a * b` with Strassen's algorithm.
///
/// Both operands must share the same power-of-two size. Sub-products at
/// sizes `>= opts.parallel_threshold` run on `pool`; smaller ones run on
/// the calling thread.
pub fn multiply_strassen(
    a: &Matrix,
    b: &Matrix,
    opts: &Options,
    pool: &WorkerPool,
) -> Result<Matrix, MatrixError> {
    let n = check_operands(a, b)?;
    tracing::debug!(
        size = n,
        parallel_threshold = opts.parallel_threshold,
        leaf_size = opts.leaf_size,
        workers = pool.capacity(),
        "strassen multiply"
    );

    let ctx = Strassen {
        opts: Options {
            leaf_size: opts.leaf_size.max(1),
            ..*opts
        },
        pool: pool.clone(),
    };
    ctx.multiply(a, b)
}

/// Per-call recursion state, cloned into every pooled task.
#[derive(Clone)]
struct Strassen {
    opts: Options,
    pool: WorkerPool,
}

impl Strassen {
    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
        let n = a.size();
        if n <= self.opts.leaf_size {
            return leaf_product(a, b);
        }

        let Quadrants {
            q11: a11,
            q12: a12,
            q21: a21,
            q22: a22,
        } = Quadrants::split(a)?;
        let Quadrants {
            q11: b11,
            q12: b12,
            q21: b21,
            q22: b22,
        } = Quadrants::split(b)?;

        let s1 = b12.minus(&b22)?;
        let s2 = a11.plus(&a12)?;
        let s3 = a21.plus(&a22)?;
        let s4 = b21.minus(&b11)?;
        let s5 = a11.plus(&a22)?;
        let s6 = b11.plus(&b22)?;
        let s7 = a12.minus(&a22)?;
        let s8 = b21.plus(&b22)?;
        let s9 = a11.minus(&a21)?;
        let s10 = b11.plus(&b12)?;

        let operands = [
            (a11, s1),
            (s2, b22),
            (s3, b11),
            (a22, s4),
            (s5, s6),
            (s7, s8),
            (s9, s10),
        ];

        let products = if self.opts.should_parallelize(n) {
            tracing::debug!(size = n, "strassen fan-out to worker pool");
            let handles = operands.map(|(x, y)| {
                let ctx = self.clone();
                self.pool.submit(move || ctx.multiply(&x, &y))
            });
            // Barrier: every handle is joined before any result is used.
            handles.map(|handle| handle.join().and_then(|product| product))
        } else {
            operands.map(|(x, y)| self.multiply(&x, &y))
        };

        let [p1, p2, p3, p4, p5, p6, p7] = products;
        let (p1, p2, p3, p4, p5, p6, p7) = (p1?, p2?, p3?, p4?, p5?, p6?, p7?);

        let mut c11 = p5.plus(&p4)?;
        c11.minus_ip(&p2)?.plus_ip(&p6)?;
        let c12 = p1.plus(&p2)?;
        let c21 = p3.plus(&p4)?;
        let mut c22 = p5;
        c22.plus_ip(&p1)?.minus_ip(&p3)?.minus_ip(&p7)?;

        Matrix::from_parts(&c11, &c12, &c21, &c22)
    }
}
